//! Serde DTOs for the GraphQL responses, and their conversion into domain
//! types.
//!
//! The DTOs mirror the response JSON one field per level; everything the
//! audit does not read is simply not declared. Conversion is where nullable
//! wire shapes collapse into the domain's stricter types: a null blob object
//! becomes `false`, a missing commit or empty history becomes
//! `last_commit: None`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use report::{BranchCheck, BranchName, CommitInfo, RepositoryListing, RepositoryName, RepositoryPage};

use crate::errors::GithubError;

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// Standard GraphQL response envelope: `data` and/or `errors`.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlEnvelope<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlProblem>>,
}

/// One entry of a GraphQL `errors` array. Only the message is read.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlProblem {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Repository listing page
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RepositoryPageData {
    pub organization: PagedOrganization,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PagedOrganization {
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RepositoryConnection {
    pub page_info: PageInfo,
    pub nodes: Vec<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RepositoryNode {
    pub name: String,
    pub is_archived: bool,
    pub refs: Option<RefConnection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefConnection {
    pub nodes: Vec<RefNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefNode {
    pub name: String,
}

impl RepositoryPageData {
    /// Converts a decoded listing page into the domain's page type.
    pub(crate) fn into_page(self) -> Result<RepositoryPage, GithubError> {
        let connection = self.organization.repositories;
        let repositories = connection
            .nodes
            .into_iter()
            .map(RepositoryNode::into_listing)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RepositoryPage {
            has_next_page: connection.page_info.has_next_page,
            end_cursor: connection.page_info.end_cursor,
            repositories,
        })
    }
}

impl RepositoryNode {
    fn into_listing(self) -> Result<RepositoryListing, GithubError> {
        let name = RepositoryName::new(&self.name).ok_or_else(|| {
            GithubError::InvalidResponse {
                context: "repository node with an empty name".to_owned(),
            }
        })?;
        let branches = self
            .refs
            .map(|refs| refs.nodes)
            .unwrap_or_default()
            .into_iter()
            .map(|r| {
                BranchName::new(r.name).ok_or_else(|| GithubError::InvalidResponse {
                    context: format!("empty ref name on repository {name}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RepositoryListing {
            name,
            archived: self.is_archived,
            branches,
        })
    }
}

// ---------------------------------------------------------------------------
// Branch inspection
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct BranchCheckData {
    pub organization: InspectedOrganization,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InspectedOrganization {
    pub repository: Option<RepositoryObjects>,
}

/// The three aliased object lookups of the inspection query.
#[derive(Debug, Deserialize)]
pub(crate) struct RepositoryObjects {
    pub commit: Option<CommitObject>,
    pub handel: Option<BlobMarker>,
    pub pipeline: Option<BlobMarker>,
}

/// The branch-tip object. The inline fragment yields an empty object when
/// the expression resolves to something other than a commit, so `history` is
/// optional.
#[derive(Debug, Deserialize)]
pub(crate) struct CommitObject {
    pub history: Option<CommitHistory>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitHistory {
    pub nodes: Vec<CommitNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommitNode {
    pub committed_date: DateTime<Utc>,
    pub author: Option<CommitAuthor>,
}

/// Git actor attached to a commit; name and email are nullable on the wire.
#[derive(Debug, Deserialize)]
pub(crate) struct CommitAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Existence marker for a blob lookup; the oid itself is never used.
#[derive(Debug, Deserialize)]
pub(crate) struct BlobMarker {
    #[allow(dead_code)]
    pub oid: String,
}

impl BranchCheckData {
    /// Converts a decoded inspection response into the domain's check type.
    ///
    /// A null `repository` means the name vanished between discovery and
    /// inspection; that is a malformed run, not a skippable branch.
    pub(crate) fn into_check(
        self,
        repository: &RepositoryName,
        branch: &BranchName,
    ) -> Result<BranchCheck, GithubError> {
        let objects =
            self.organization
                .repository
                .ok_or_else(|| GithubError::InvalidResponse {
                    context: format!("repository {repository} not found while inspecting {branch}"),
                })?;
        let last_commit = objects
            .commit
            .and_then(|c| c.history)
            .and_then(|h| h.nodes.into_iter().next())
            .map(CommitNode::into_info);
        Ok(BranchCheck {
            handel: objects.handel.is_some(),
            pipeline: objects.pipeline.is_some(),
            last_commit,
        })
    }
}

impl CommitNode {
    fn into_info(self) -> CommitInfo {
        let author = self.author.unwrap_or(CommitAuthor {
            name: None,
            email: None,
        });
        CommitInfo {
            committed_date: self.committed_date,
            author_name: author.name.unwrap_or_default(),
            author_email: author.email.unwrap_or_default(),
        }
    }
}
