//! Runtime configuration, loaded from the environment.
//!
//! Exactly two inputs exist: the access token and the output file name.
//! Both are validated up front so a missing credential fails before any
//! request is made instead of as a rejected query. The organization login is
//! fixed; the audit is purpose-built for one organization.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// The organization every query is scoped to.
pub const ORGANIZATION: &str = "byu-oit";

/// Environment variable carrying the GitHub access token.
const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Environment variable carrying the output file name.
const OUTPUT_VAR: &str = "AUDIT_OUTPUT_FILE";

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for every GraphQL query.
    pub token: String,

    /// Where the CSV report is written, relative to the working directory.
    pub output_path: PathBuf,
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = required(&lookup, TOKEN_VAR)?;
        let output = required(&lookup, OUTPUT_VAR)?;
        Ok(Self {
            token,
            output_path: PathBuf::from(output),
        })
    }
}

fn required(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    lookup(name)
        .filter(|value| !value.is_empty())
        .with_context(|| format!("environment variable {name} must be set and non-empty"))
}
