//! CSV rendering for the audit report.
//!
//! One fixed header, one row per qualifying branch. Fields containing a
//! delimiter, quote, or line break are quoted with embedded quotes doubled;
//! everything else is emitted verbatim, so well-behaved output matches naive
//! comma joining byte for byte.

use std::borrow::Cow;

use chrono::SecondsFormat;

use crate::{BranchName, CommitInfo, RepositoryName};

/// The report's single header line.
pub const REPORT_HEADER: &str =
    "Repository,Branch,handel.yml,handel-codepipeline.yml,last commit date,author,email";

/// One report row, borrowed from the registry entry and inspection result
/// that produced it.
#[derive(Debug, Clone, Copy)]
pub struct ReportRow<'a> {
    /// Repository the branch belongs to.
    pub repository: &'a RepositoryName,
    /// The inspected branch.
    pub branch: &'a BranchName,
    /// Whether `handel.yml` exists at the branch tip.
    pub handel: bool,
    /// Whether `handel-codepipeline.yml` exists at the branch tip.
    pub pipeline: bool,
    /// The branch tip's most recent commit.
    pub commit: &'a CommitInfo,
}

impl ReportRow<'_> {
    /// Renders the row as a CSV line (without terminator).
    pub fn to_line(&self) -> String {
        let date = self
            .commit
            .committed_date
            .to_rfc3339_opts(SecondsFormat::Secs, true);
        [
            encode_field(self.repository.as_str()),
            encode_field(self.branch.as_str()),
            Cow::Borrowed(marker(self.handel)),
            Cow::Borrowed(marker(self.pipeline)),
            encode_field(&date),
            encode_field(&self.commit.author_name),
            encode_field(&self.commit.author_email),
        ]
        .join(",")
    }
}

fn marker(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "no"
    }
}

/// Quotes a field if it contains a comma, quote, or line break.
fn encode_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    fn commit(date: &str, name: &str, email: &str) -> CommitInfo {
        CommitInfo {
            committed_date: date.parse::<DateTime<Utc>>().unwrap(),
            author_name: name.to_owned(),
            author_email: email.to_owned(),
        }
    }

    #[test]
    fn renders_the_documented_example_row() {
        let repository = RepositoryName::new("svc-b").unwrap();
        let branch = BranchName::new("main").unwrap();
        let commit = commit("2023-01-01T00:00:00Z", "A", "a@x.com");
        let row = ReportRow {
            repository: &repository,
            branch: &branch,
            handel: true,
            pipeline: true,
            commit: &commit,
        };
        assert_eq!(row.to_line(), "svc-b,main,yes,yes,2023-01-01T00:00:00Z,A,a@x.com");
    }

    #[test]
    fn marks_each_manifest_independently() {
        let repository = RepositoryName::new("svc-a").unwrap();
        let branch = BranchName::new("main").unwrap();
        let commit = commit("2023-01-01T00:00:00Z", "A", "a@x.com");
        let row = ReportRow {
            repository: &repository,
            branch: &branch,
            handel: true,
            pipeline: false,
            commit: &commit,
        };
        assert_eq!(row.to_line(), "svc-a,main,yes,no,2023-01-01T00:00:00Z,A,a@x.com");
    }

    #[test]
    fn quotes_fields_containing_delimiters() {
        let repository = RepositoryName::new("svc-a").unwrap();
        let branch = BranchName::new("main").unwrap();
        let commit = commit(
            "2023-01-01T00:00:00Z",
            "Doe, Jane \"JD\"",
            "jane@example.com",
        );
        let row = ReportRow {
            repository: &repository,
            branch: &branch,
            handel: false,
            pipeline: true,
            commit: &commit,
        };
        assert_eq!(
            row.to_line(),
            "svc-a,main,no,yes,2023-01-01T00:00:00Z,\"Doe, Jane \"\"JD\"\"\",jane@example.com"
        );
    }

    #[test]
    fn quotes_fields_containing_line_breaks() {
        assert_eq!(encode_field("a\nb"), "\"a\nb\"");
        assert_eq!(encode_field("plain"), "plain");
    }

    #[test]
    fn normalises_commit_dates_to_utc_seconds() {
        let commit = commit("2023-01-01T01:30:00+01:00", "A", "a@x.com");
        let repository = RepositoryName::new("svc-a").unwrap();
        let branch = BranchName::new("main").unwrap();
        let row = ReportRow {
            repository: &repository,
            branch: &branch,
            handel: true,
            pipeline: false,
            commit: &commit,
        };
        assert!(row.to_line().contains("2023-01-01T00:30:00Z"));
    }
}
