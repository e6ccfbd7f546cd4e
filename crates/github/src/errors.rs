//! Adapter-level error type for the GitHub GraphQL transport.
//!
//! [`GithubError`] covers everything between issuing a request and handing a
//! decoded value to the domain. At the port boundary it flattens into
//! [`report::ReportError::Browse`]; the domain never sees HTTP detail.

use thiserror::Error;

/// Errors raised by the GitHub GraphQL adapter.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The HTTP request could not be built, sent, or its body read.
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status (e.g. 401 for a
    /// rejected credential).
    #[error("GitHub answered with HTTP {status}")]
    Status {
        /// The response status code.
        status: reqwest::StatusCode,
    },

    /// The GraphQL layer reported query errors.
    #[error("GraphQL query failed: {}", .messages.join("; "))]
    Api {
        /// Error messages from the response's `errors` array.
        messages: Vec<String>,
    },

    /// The response carried neither data nor errors.
    #[error("GraphQL response carried no data while reading {context}")]
    MissingData {
        /// What the adapter was trying to read.
        context: String,
    },

    /// The response decoded but violated the shape the audit relies on.
    #[error("unexpected GitHub response shape: {context}")]
    InvalidResponse {
        /// What the adapter was decoding when the shape check failed.
        context: String,
    },
}

impl From<GithubError> for report::ReportError {
    fn from(error: GithubError) -> Self {
        report::ReportError::Browse {
            message: error.to_string(),
        }
    }
}
