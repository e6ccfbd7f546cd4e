//! Branch-audit GitHub infrastructure adapter.
//!
//! Implements the [`report::OrganizationBrowser`] port over the GitHub
//! GraphQL v4 endpoint using [`reqwest`]. Owns the two fixed query documents,
//! the bearer credential, and the response decoding; the [`report`] crate
//! never sees HTTP or GraphQL.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain audit rules. Transport,
//! authentication, and wire-shape handling all live here.

pub mod errors;
pub mod queries;

mod wire;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use report::{
    BranchCheck, BranchName, OrganizationBrowser, ReportError, RepositoryName, RepositoryPage,
    HANDEL_FILE, PIPELINE_FILE,
};

pub use errors::GithubError;

use queries::{BRANCH_CHECK_QUERY, REPOSITORY_PAGE_QUERY};
use wire::{BranchCheckData, GraphqlEnvelope, RepositoryPageData};

/// The GitHub GraphQL v4 endpoint.
const GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

/// User-Agent sent with every request; GitHub rejects requests without one.
const USER_AGENT: &str = concat!("branch-audit/", env!("CARGO_PKG_VERSION"));

/// GraphQL client for one organization on GitHub.
///
/// Holds the HTTP client, the bearer credential, and the organization login
/// every query is scoped to. Cloning is cheap; the underlying connection
/// pool is shared.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: HttpClient,
    endpoint: String,
    token: String,
    organization: String,
}

impl GithubClient {
    /// Creates a client for `organization`, authenticating every query with
    /// `token`.
    pub fn new(
        token: impl Into<String>,
        organization: impl Into<String>,
    ) -> Result<Self, GithubError> {
        let http = HttpClient::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            endpoint: GRAPHQL_ENDPOINT.to_owned(),
            token: token.into(),
            organization: organization.into(),
        })
    }

    /// The organization login this client is scoped to.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Posts one GraphQL document and decodes the enveloped response.
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &'static str,
        variables: serde_json::Value,
        context: &str,
    ) -> Result<T, GithubError> {
        debug!(context, "issuing GraphQL query");
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Status { status });
        }

        let envelope: GraphqlEnvelope<T> = response.json().await?;
        unwrap_envelope(envelope, context)
    }
}

/// Surfaces GraphQL-level errors and the no-data case from a decoded envelope.
fn unwrap_envelope<T>(envelope: GraphqlEnvelope<T>, context: &str) -> Result<T, GithubError> {
    if let Some(problems) = envelope.errors {
        if !problems.is_empty() {
            return Err(GithubError::Api {
                messages: problems.into_iter().map(|p| p.message).collect(),
            });
        }
    }
    envelope.data.ok_or_else(|| GithubError::MissingData {
        context: context.to_owned(),
    })
}

#[async_trait]
impl OrganizationBrowser for GithubClient {
    async fn repository_page(
        &self,
        cursor: Option<&str>,
    ) -> Result<RepositoryPage, ReportError> {
        let variables = json!({
            "organization": self.organization,
            "endCursor": cursor,
        });
        let data: RepositoryPageData = self
            .execute(REPOSITORY_PAGE_QUERY, variables, "repository listing page")
            .await?;
        Ok(data.into_page()?)
    }

    async fn inspect_branch(
        &self,
        repository: &RepositoryName,
        branch: &BranchName,
    ) -> Result<BranchCheck, ReportError> {
        let variables = json!({
            "organization": self.organization,
            "repository": repository.as_str(),
            "branch": branch.as_str(),
            "handelFile": format!("{}:{}", branch.as_str(), HANDEL_FILE),
            "pipelineFile": format!("{}:{}", branch.as_str(), PIPELINE_FILE),
        });
        let data: BranchCheckData = self
            .execute(BRANCH_CHECK_QUERY, variables, "branch inspection")
            .await?;
        Ok(data.into_check(repository, branch)?)
    }
}
