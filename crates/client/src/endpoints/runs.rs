//! Run listing.

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::auth::Credential;
use crate::endpoints::queries::RUNS_QUERY;
use crate::endpoints::response::{array, data_object, edge_node, object, opt_str};
use crate::endpoints::{graphql, require_credential};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::Run;

const OPERATION: &str = "list_runs";

/// List the runs of a project, newest first as ordered by the service.
///
/// Edges whose node lacks a string `id`, `name` or `state` are dropped.
pub async fn list_runs(
    client: &Client,
    endpoint: &str,
    credential: &Credential,
    entity: &str,
    project: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Run>> {
    require_credential(credential)?;

    let mut variables = Map::new();
    variables.insert("entityName".to_string(), Value::from(entity));
    variables.insert("projectName".to_string(), Value::from(project));

    let data = graphql::execute(
        client,
        endpoint,
        credential,
        OPERATION,
        RUNS_QUERY,
        Some(&variables),
        metrics,
    )
    .await?;

    let (runs, skipped) = decode_runs(&data)?;

    if skipped > 0 {
        warn!(entity, project, skipped, "Dropped malformed run edges");
        if let Some(m) = metrics {
            m.record_skipped(OPERATION, skipped);
        }
    }
    debug!(entity, project, count = runs.len(), "Fetched runs");

    Ok(runs)
}

/// Reshape the `data` object of a runs response.
pub(crate) fn decode_runs(data: &Value) -> Result<(Vec<Run>, usize)> {
    let data = data_object(data)?;
    let project = object(data, "project", "data.project")?;
    let runs = object(project, "runs", "data.project.runs")?;
    let edges = array(runs, "edges", "data.project.runs.edges")?;

    let decoded: Vec<Run> = edges
        .iter()
        .filter_map(|edge| {
            let node = edge_node(edge)?;
            Some(Run {
                id: opt_str(node, "id")?.into(),
                name: opt_str(node, "name")?.into(),
                state: opt_str(node, "state")?,
                created_at: opt_str(node, "createdAt"),
            })
        })
        .collect();

    let skipped = edges.len() - decoded.len();
    Ok((decoded, skipped))
}
