//! The two fixed GraphQL documents issued by the adapter.
//!
//! Both are organization-scoped. The listing query takes a nullable cursor,
//! so the first page and every following page share one document (`after:
//! null` means "from the start").

/// Lists one page of repositories, name-ascending, with up to 100 `refs/heads/`
/// refs each.
pub const REPOSITORY_PAGE_QUERY: &str = r#"
query repositoryPage($organization: String!, $endCursor: String) {
    organization(login: $organization) {
        repositories(first: 100, after: $endCursor, orderBy: { field: NAME, direction: ASC }) {
            pageInfo {
                hasNextPage
                endCursor
            }
            nodes {
                name
                isArchived
                refs(refPrefix: "refs/heads/", first: 100) {
                    nodes {
                        name
                    }
                }
            }
        }
    }
}
"#;

/// Resolves, in one round trip, the two manifest blobs at a branch tip and
/// the tip's most recent commit.
///
/// `$handelFile` and `$pipelineFile` are `<branch>:<path>` expressions; a
/// null object means the file does not exist at that revision.
pub const BRANCH_CHECK_QUERY: &str = r#"
query branchCheck($organization: String!, $repository: String!, $branch: String!, $handelFile: String!, $pipelineFile: String!) {
    organization(login: $organization) {
        repository(name: $repository) {
            commit: object(expression: $branch) {
                ... on Commit {
                    history(first: 1) {
                        nodes {
                            author {
                                name
                                email
                            }
                            committedDate
                        }
                    }
                }
            }
            handel: object(expression: $handelFile) {
                ... on Blob {
                    oid
                }
            }
            pipeline: object(expression: $pipelineFile) {
                ... on Blob {
                    oid
                }
            }
        }
    }
}
"#;
