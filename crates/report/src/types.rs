//! Shared value types for the audit domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types
//! carry structured values produced by the remote side: one page of the
//! repository listing, and the result of inspecting a single branch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{BranchName, RepositoryName};

/// Path of the Handel deployment manifest checked on every branch tip.
pub const HANDEL_FILE: &str = "handel.yml";

/// Path of the Handel CodePipeline manifest checked on every branch tip.
pub const PIPELINE_FILE: &str = "handel-codepipeline.yml";

// ---------------------------------------------------------------------------
// Discovery types
// ---------------------------------------------------------------------------

/// One repository node from a repository-listing page.
///
/// Carries the raw listing as returned by the remote side; the archived and
/// bot-branch filters are applied when the listing is recorded into the
/// [`crate::RepositoryRegistry`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryListing {
    /// Repository name, unique within the organization.
    pub name: RepositoryName,

    /// Whether the repository is archived. Archived repositories are never
    /// registered.
    pub archived: bool,

    /// Branch names under `refs/heads/`, up to the per-repository page size.
    pub branches: Vec<BranchName>,
}

/// One page of the paginated repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPage {
    /// Whether the remote side declares a further page after this one.
    pub has_next_page: bool,

    /// Cursor identifying this page's end; passed back to request the next
    /// page. `None` on the terminal page of an empty organization.
    pub end_cursor: Option<String>,

    /// The repository nodes on this page.
    pub repositories: Vec<RepositoryListing>,
}

// ---------------------------------------------------------------------------
// Inspection types
// ---------------------------------------------------------------------------

/// Metadata of the most recent commit reachable from a branch tip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    /// The timestamp recorded on the commit at creation time.
    pub committed_date: DateTime<Utc>,

    /// Commit author name. Empty if the platform recorded none.
    pub author_name: String,

    /// Commit author email. Empty if the platform recorded none.
    pub author_email: String,
}

/// Result of inspecting a single (repository, branch) pair.
///
/// Transient: produced by one inspection query, consumed by one reporting
/// iteration, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchCheck {
    /// `true` iff `handel.yml` exists at the branch tip.
    pub handel: bool,

    /// `true` iff `handel-codepipeline.yml` exists at the branch tip.
    pub pipeline: bool,

    /// Latest commit on the branch, or `None` for a ref with no reachable
    /// commits (unborn branch). Such branches are skipped with a warning.
    pub last_commit: Option<CommitInfo>,
}

impl BranchCheck {
    /// Returns `true` if this branch belongs in the report: at least one of
    /// the two manifests exists at its tip.
    pub fn qualifies(&self) -> bool {
        self.handel || self.pipeline
    }
}
