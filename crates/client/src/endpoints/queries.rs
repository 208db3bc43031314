//! GraphQL query documents.
//!
//! Caller-supplied values always travel as variables, never interpolated
//! into the document text.

/// Identity check: a non-null `viewer` means the key is accepted.
pub const VIEWER_QUERY: &str = r#"query Viewer {
    viewer {
        id
        username
    }
}"#;

/// The viewer's own projects, newest first.
pub const PROJECTS_QUERY: &str = r#"query Projects {
    viewer {
        projects(order: "-createdAt") {
            pageInfo {
                hasNextPage
                hasPreviousPage
                startCursor
                endCursor
            }
            edges {
                node {
                    id
                    name
                    createdAt
                    entityName
                }
            }
        }
    }
}"#;

/// Runs of one project, newest first.
pub const RUNS_QUERY: &str = r#"query Runs($entityName: String!, $projectName: String!) {
    project(entityName: $entityName, name: $projectName) {
        runs(order: "-createdAt") {
            edges {
                node {
                    id
                    name
                    state
                    createdAt
                }
            }
        }
    }
}"#;

/// History of one run. `$runId` is the run's name, not its opaque id.
pub const RUN_HISTORY_QUERY: &str = r#"query RunHistory($runId: String!, $projectName: String!, $entityName: String!) {
    project(name: $projectName, entityName: $entityName) {
        run(name: $runId) {
            history
        }
    }
}"#;
