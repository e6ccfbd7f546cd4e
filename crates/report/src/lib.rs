//! Core audit domain for branch-audit.
//!
//! This crate contains every domain concept used by the audit: newtype
//! identifiers, the repository registry built during discovery, the value
//! types describing a branch inspection, the CSV row encoding, and the two
//! sequential loops that drive a run. Infrastructure crates implement the
//! traits defined here; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; infrastructure crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype domain identifiers (`RepositoryName`, `BranchName`, `RunId`) |
//! | [`types`] | Value types (`RepositoryPage`, `BranchCheck`, `CommitInfo`) |
//! | [`registry`] | The repository registry and its insertion filters |
//! | [`ports`] | The `OrganizationBrowser` and `ReportSink` traits |
//! | [`discover`] | The pagination walk that fills the registry |
//! | [`csv`] | CSV header, row rendering, and field quoting |
//! | [`run`] | The reporting loop that drains the registry |
//! | [`errors`] | Top-level error type |

pub mod csv;
pub mod discover;
pub mod errors;
pub mod identifiers;
pub mod ports;
pub mod registry;
pub mod run;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use csv::{ReportRow, REPORT_HEADER};
pub use discover::discover_repositories;
pub use errors::ReportError;
pub use identifiers::{BranchName, RepositoryName, RunId};
pub use ports::{OrganizationBrowser, ReportSink};
pub use registry::RepositoryRegistry;
pub use run::write_report;
pub use types::{
    BranchCheck, CommitInfo, RepositoryListing, RepositoryPage, HANDEL_FILE, PIPELINE_FILE,
};
