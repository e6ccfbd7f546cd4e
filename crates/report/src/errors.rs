//! Top-level error type for the audit domain.
//!
//! Every failure aborts the run; nothing is retried or downgraded to a
//! warning. A failure mid-run leaves the output file with only the rows
//! written so far — the file is truncated at open, so a rerun overwrites any
//! partial output.

use thiserror::Error;

/// Errors that abort an audit run.
///
/// Adapter-specific detail (HTTP status codes, GraphQL problem lists) is
/// flattened into [`ReportError::Browse`] at the port boundary; the domain
/// only needs to know that the remote side failed.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A remote query issued through [`crate::OrganizationBrowser`] failed.
    ///
    /// Covers transport errors, authentication rejections, and GraphQL-level
    /// query failures alike.
    #[error("organization query failed: {message}")]
    Browse {
        /// Human-readable description of the underlying failure.
        message: String,
    },

    /// Appending to or finishing the report sink failed.
    #[error("report output failed")]
    Sink {
        /// The I/O error raised by the sink.
        #[source]
        source: std::io::Error,
    },

    /// A remote response decoded successfully but violated the shape the
    /// audit relies on (e.g. an empty repository name).
    #[error("malformed remote response: {context}")]
    MalformedResponse {
        /// What was being decoded when the shape check failed.
        context: String,
    },
}
