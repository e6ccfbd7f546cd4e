//! The repository registry built during discovery.
//!
//! Maps each non-archived repository to the set of its audit-relevant
//! branches. The two insertion filters live here so the registry's
//! invariants hold no matter who feeds it: archived repositories are never
//! inserted, and branch names containing `dependabot` are never inserted.

use std::collections::{BTreeMap, BTreeSet};

use crate::{BranchName, RepositoryListing, RepositoryName};

/// Substring marking machine-generated dependency-update branches, which are
/// excluded from the audit.
const BOT_BRANCH_MARKER: &str = "dependabot";

/// In-memory mapping from repository name to its relevant branch names.
///
/// Backed by ordered collections, so iteration is deterministic and
/// name-ascending — the same order the remote listing pages arrive in.
#[derive(Debug, Default)]
pub struct RepositoryRegistry {
    entries: BTreeMap<RepositoryName, BTreeSet<BranchName>>,
}

impl RepositoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one repository listing, applying both insertion filters.
    ///
    /// A non-archived repository always gets an entry, even when every one
    /// of its branches is filtered out; it then simply produces no report
    /// rows.
    pub fn record(&mut self, listing: RepositoryListing) {
        if listing.archived {
            return;
        }
        let branches = self.entries.entry(listing.name).or_default();
        for branch in listing.branches {
            if branch.as_str().contains(BOT_BRANCH_MARKER) {
                continue;
            }
            branches.insert(branch);
        }
    }

    /// Number of registered repositories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no repository has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates repositories name-ascending, each with its ordered branch set.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&RepositoryName, &BTreeSet<BranchName>)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(name: &str, archived: bool, branches: &[&str]) -> RepositoryListing {
        RepositoryListing {
            name: RepositoryName::new(name).unwrap(),
            archived,
            branches: branches
                .iter()
                .map(|b| BranchName::new(*b).unwrap())
                .collect(),
        }
    }

    fn branches_of<'a>(registry: &'a RepositoryRegistry, name: &str) -> Vec<&'a str> {
        let key = RepositoryName::new(name).unwrap();
        registry
            .iter()
            .find(|(repo, _)| **repo == key)
            .map(|(_, branches)| branches.iter().map(BranchName::as_str).collect())
            .unwrap()
    }

    #[test]
    fn archived_repositories_are_never_registered() {
        let mut registry = RepositoryRegistry::new();
        registry.record(listing("svc-old", true, &["main", "develop"]));
        assert!(registry.is_empty());
    }

    #[test]
    fn dependabot_branches_are_filtered_out() {
        let mut registry = RepositoryRegistry::new();
        registry.record(listing(
            "svc-a",
            false,
            &["main", "dependabot/bump-x", "fix/dependabot-config"],
        ));
        // Substring match, so both the npm-style prefix and any other name
        // containing the marker are dropped.
        assert_eq!(branches_of(&registry, "svc-a"), vec!["main"]);
    }

    #[test]
    fn repositories_with_only_filtered_branches_keep_an_empty_entry() {
        let mut registry = RepositoryRegistry::new();
        registry.record(listing("svc-b", false, &["dependabot/bump-y"]));
        assert_eq!(registry.len(), 1);
        assert!(branches_of(&registry, "svc-b").is_empty());
    }

    #[test]
    fn branches_are_unique_across_pages() {
        let mut registry = RepositoryRegistry::new();
        registry.record(listing("svc-c", false, &["main"]));
        registry.record(listing("svc-c", false, &["main", "develop"]));
        assert_eq!(registry.len(), 1);
        assert_eq!(branches_of(&registry, "svc-c"), vec!["develop", "main"]);
    }

    #[test]
    fn iteration_is_name_ascending() {
        let mut registry = RepositoryRegistry::new();
        registry.record(listing("zebra", false, &["main"]));
        registry.record(listing("alpha", false, &["main"]));
        let names: Vec<&str> = registry.iter().map(|(repo, _)| repo.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zebra"]);
    }
}
