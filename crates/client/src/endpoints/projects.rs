//! Project listing.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::Credential;
use crate::endpoints::queries::PROJECTS_QUERY;
use crate::endpoints::response::{array, data_object, edge_node, object, opt_str};
use crate::endpoints::{graphql, require_credential};
use crate::error::{FetchError, Result};
use crate::metrics::MetricsCollector;
use crate::models::Project;

const OPERATION: &str = "list_projects";

/// List the viewer's projects, newest first as ordered by the service.
///
/// Edges without a `node`, `node.id` or `node.name` are dropped. A missing
/// `entityName` falls back to the credential's entity.
pub async fn list_projects(
    client: &Client,
    endpoint: &str,
    credential: &Credential,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Project>> {
    require_credential(credential)?;

    let data = graphql::execute(
        client,
        endpoint,
        credential,
        OPERATION,
        PROJECTS_QUERY,
        None,
        metrics,
    )
    .await?;

    let (projects, skipped) = decode_projects(&data, credential.entity())?;

    if skipped > 0 {
        warn!(skipped, "Dropped malformed project edges");
        if let Some(m) = metrics {
            m.record_skipped(OPERATION, skipped);
        }
    }
    debug!(count = projects.len(), "Fetched projects");

    Ok(projects)
}

/// Reshape the `data` object of a projects response.
///
/// Returns the decoded projects and the number of dropped edges.
pub(crate) fn decode_projects(
    data: &Value,
    fallback_entity: &str,
) -> Result<(Vec<Project>, usize)> {
    let data = data_object(data)?;

    let viewer = match data.get("viewer") {
        None => return Err(FetchError::malformed("data.viewer is missing")),
        Some(Value::Null) => return Err(FetchError::Unauthenticated),
        Some(_) => object(data, "viewer", "data.viewer")?,
    };
    let projects = object(viewer, "projects", "data.viewer.projects")?;
    let edges = array(projects, "edges", "data.viewer.projects.edges")?;

    let decoded: Vec<Project> = edges
        .iter()
        .filter_map(|edge| {
            let node = edge_node(edge)?;
            Some(Project {
                id: opt_str(node, "id")?,
                name: opt_str(node, "name")?,
                entity: opt_str(node, "entityName")
                    .unwrap_or_else(|| fallback_entity.to_string()),
                created_at: opt_str(node, "createdAt"),
            })
        })
        .collect();

    let skipped = edges.len() - decoded.len();
    Ok((decoded, skipped))
}
