//! Port traits implemented by infrastructure crates.
//!
//! The domain defines *what* it needs from the outside world; the `github`
//! crate supplies the remote queries and the CLI supplies the file-backed
//! sink. Tests substitute in-memory implementations for both.

use async_trait::async_trait;

use crate::{BranchCheck, BranchName, ReportError, RepositoryName, RepositoryPage};

/// Read access to the audited organization.
///
/// Both operations are request/response against the hosting platform; the
/// domain never sees transport, authentication, or query syntax. Exactly one
/// call is in flight at any time — implementations do not need to be
/// concurrency-safe beyond `Send + Sync`.
#[async_trait]
pub trait OrganizationBrowser: Send + Sync {
    /// Fetches one page of the repository listing, ordered by name
    /// ascending, with up to 100 repositories each carrying up to 100
    /// `refs/heads/` refs.
    ///
    /// `cursor` is `None` for the first page and the previous page's
    /// `end_cursor` afterwards.
    async fn repository_page(&self, cursor: Option<&str>)
        -> Result<RepositoryPage, ReportError>;

    /// Inspects a single branch tip: existence of the two manifests and the
    /// most recent reachable commit.
    async fn inspect_branch(
        &self,
        repository: &RepositoryName,
        branch: &BranchName,
    ) -> Result<BranchCheck, ReportError>;
}

/// Destination for report lines.
///
/// Lines are appended strictly one at a time: every [`ReportSink::append`]
/// completes before the next is issued, and [`ReportSink::finish`] is called
/// exactly once after the final line. Implementations add the line
/// terminator themselves.
#[async_trait]
pub trait ReportSink: Send {
    /// Appends one line (without terminator) to the report.
    async fn append(&mut self, line: &str) -> Result<(), ReportError>;

    /// Flushes any buffered output. Called once, after the last append.
    async fn finish(&mut self) -> Result<(), ReportError>;
}
