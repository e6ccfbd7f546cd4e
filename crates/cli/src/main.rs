//! Branch-audit CLI entry point.
//!
//! This binary is the composition root for the whole audit. Responsibilities:
//!
//! 1. **Parse configuration** — the access token and output file name from
//!    the environment, validated before anything else runs.
//! 2. **Wire observability** — configure `tracing-subscriber` with an env
//!    filter; all `tracing` events from every crate in the workspace flow
//!    through it, correlated by a per-invocation [`report::RunId`].
//! 3. **Construct infrastructure** — the [`github::GithubClient`] adapter
//!    and the file-backed [`sink::FileSink`].
//! 4. **Drive the run** — open the output file, walk the repository listing,
//!    then inspect and report every registered branch, strictly one remote
//!    query at a time.
//!
//! Any failure aborts the run with a non-zero exit; the output file then
//! holds only the rows written before the failure.

mod config;
mod sink;

use anyhow::Result;
use tracing::{info, Instrument};
use tracing_subscriber::EnvFilter;

use github::GithubClient;
use report::{discover_repositories, write_report, RepositoryRegistry, RunId};

use crate::config::{Config, ORGANIZATION};
use crate::sink::FileSink;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    let run_id = RunId::new_random();
    let span = tracing::info_span!("audit_run", run_id = %run_id, organization = ORGANIZATION);
    run(config).instrument(span).await
}

async fn run(config: Config) -> Result<()> {
    let browser = GithubClient::new(&config.token, ORGANIZATION)?;

    // The file is opened (and truncated) before the first remote query, so a
    // rerun never leaves a previous run's rows behind.
    let mut sink = FileSink::create(&config.output_path).await?;

    let mut registry = RepositoryRegistry::new();
    discover_repositories(&browser, &mut registry).await?;
    info!(repositories = registry.len(), "discovery complete");

    write_report(&browser, &registry, &mut sink).await?;
    info!(output = %config.output_path.display(), "report written");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
