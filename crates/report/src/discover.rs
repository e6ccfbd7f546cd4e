//! The pagination walk that fills the repository registry.
//!
//! One listing request per loop iteration, strictly sequential: each
//! response's `end_cursor` becomes the next request's cursor, and the loop
//! stops as soon as a response declares no further page. Any query failure
//! propagates and aborts the run.

use tracing::debug;

use crate::{OrganizationBrowser, ReportError, RepositoryPage, RepositoryRegistry};

/// Walks every page of the organization's repository listing, recording each
/// repository into `registry`.
///
/// For N repositories and a page size of 100 this issues exactly
/// `ceil(N / 100)` requests (one for an empty organization).
pub async fn discover_repositories(
    browser: &dyn OrganizationBrowser,
    registry: &mut RepositoryRegistry,
) -> Result<(), ReportError> {
    let mut cursor: Option<String> = None;
    let mut pages: u32 = 0;

    loop {
        let RepositoryPage {
            has_next_page,
            end_cursor,
            repositories,
        } = browser.repository_page(cursor.as_deref()).await?;
        pages += 1;

        debug!(
            page = pages,
            repositories = repositories.len(),
            has_next_page,
            "recorded repository listing page"
        );

        for listing in repositories {
            registry.record(listing);
        }

        if !has_next_page {
            break;
        }
        cursor = end_cursor;
    }

    debug!(pages, repositories = registry.len(), "discovery complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::{BranchCheck, BranchName, RepositoryListing, RepositoryName};

    /// Serves a scripted sequence of listing pages and records the cursor of
    /// every request it receives.
    struct ScriptedBrowser {
        pages: Mutex<Vec<RepositoryPage>>,
        seen_cursors: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedBrowser {
        fn new(pages: Vec<RepositoryPage>) -> Self {
            let mut pages = pages;
            pages.reverse();
            Self {
                pages: Mutex::new(pages),
                seen_cursors: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl OrganizationBrowser for ScriptedBrowser {
        async fn repository_page(
            &self,
            cursor: Option<&str>,
        ) -> Result<RepositoryPage, ReportError> {
            self.seen_cursors
                .lock()
                .unwrap()
                .push(cursor.map(str::to_owned));
            self.pages
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| ReportError::Browse {
                    message: "requested a page past the end".to_owned(),
                })
        }

        async fn inspect_branch(
            &self,
            _repository: &RepositoryName,
            _branch: &BranchName,
        ) -> Result<BranchCheck, ReportError> {
            unreachable!("discovery never inspects branches")
        }
    }

    fn page(
        has_next_page: bool,
        end_cursor: Option<&str>,
        repos: &[&str],
    ) -> RepositoryPage {
        RepositoryPage {
            has_next_page,
            end_cursor: end_cursor.map(str::to_owned),
            repositories: repos
                .iter()
                .map(|name| RepositoryListing {
                    name: RepositoryName::new(*name).unwrap(),
                    archived: false,
                    branches: vec![BranchName::new("main").unwrap()],
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn walks_until_no_next_page_threading_cursors() {
        let browser = ScriptedBrowser::new(vec![
            page(true, Some("cursor-1"), &["a"]),
            page(true, Some("cursor-2"), &["b"]),
            page(false, Some("cursor-3"), &["c"]),
        ]);
        let mut registry = RepositoryRegistry::new();

        discover_repositories(&browser, &mut registry).await.unwrap();

        assert_eq!(registry.len(), 3);
        let cursors = browser.seen_cursors.lock().unwrap().clone();
        assert_eq!(
            cursors,
            vec![
                None,
                Some("cursor-1".to_owned()),
                Some("cursor-2".to_owned())
            ]
        );
    }

    #[tokio::test]
    async fn single_page_listing_issues_exactly_one_request() {
        let browser = ScriptedBrowser::new(vec![page(false, None, &["only"])]);
        let mut registry = RepositoryRegistry::new();

        discover_repositories(&browser, &mut registry).await.unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(browser.seen_cursors.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn query_failure_aborts_the_walk() {
        // Declares a next page but has nothing scripted behind it, so the
        // second request fails.
        let browser = ScriptedBrowser::new(vec![page(true, Some("cursor-1"), &["a"])]);
        let mut registry = RepositoryRegistry::new();

        let result = discover_repositories(&browser, &mut registry).await;

        assert!(matches!(result, Err(ReportError::Browse { .. })));
    }
}
