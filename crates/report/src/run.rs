//! The reporting loop that drains the registry.
//!
//! Strictly sequential: branches are inspected one at a time in registry
//! order, and each qualifying row is fully appended before the next
//! inspection is issued. Any query or sink failure propagates and aborts the
//! run, leaving the rows written so far.

use tracing::{info, warn};

use crate::{
    OrganizationBrowser, ReportError, ReportRow, ReportSink, RepositoryRegistry, REPORT_HEADER,
};

/// Writes the audit report for every registered (repository, branch) pair.
///
/// Emits the header first, then one row per branch where at least one of the
/// two manifests exists at the tip. Branches with no reachable commit are
/// logged and skipped rather than aborting the run; a ref normally always
/// has at least one commit, but an unborn branch should not discard an
/// otherwise complete report.
pub async fn write_report(
    browser: &dyn OrganizationBrowser,
    registry: &RepositoryRegistry,
    sink: &mut dyn ReportSink,
) -> Result<(), ReportError> {
    sink.append(REPORT_HEADER).await?;

    for (repository, branches) in registry.iter() {
        info!(repository = %repository, branches = branches.len(), "inspecting repository");

        for branch in branches {
            let check = browser.inspect_branch(repository, branch).await?;
            if !check.qualifies() {
                continue;
            }
            let Some(commit) = &check.last_commit else {
                warn!(
                    repository = %repository,
                    branch = %branch,
                    "branch has no reachable commits, skipping"
                );
                continue;
            };
            let row = ReportRow {
                repository,
                branch,
                handel: check.handel,
                pipeline: check.pipeline,
                commit,
            };
            sink.append(&row.to_line()).await?;
        }
    }

    sink.finish().await
}
