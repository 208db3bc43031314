//! Run history retrieval.
//!
//! The run is looked up by its name, not by the opaque id returned from run
//! listings. A run that does not exist yet, or has no history, is not an
//! error: it yields no series.

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::debug;

use crate::auth::Credential;
use crate::endpoints::queries::RUN_HISTORY_QUERY;
use crate::endpoints::response::{data_object, object};
use crate::endpoints::{graphql, require_credential};
use crate::error::{FetchError, Result};
use crate::history::{HistoryDecode, decode_history};
use crate::metrics::MetricsCollector;
use crate::models::{MetricSeries, RunName};

const OPERATION: &str = "get_run_metrics";

/// Fetch a run's history and decode it into metric series.
///
/// Undecodable history entries are skipped and counted in metrics.
pub async fn get_run_metrics(
    client: &Client,
    endpoint: &str,
    credential: &Credential,
    entity: &str,
    project: &str,
    run: &RunName,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<MetricSeries>> {
    require_credential(credential)?;

    let mut variables = Map::new();
    variables.insert("runId".to_string(), Value::from(run.as_str()));
    variables.insert("projectName".to_string(), Value::from(project));
    variables.insert("entityName".to_string(), Value::from(entity));

    let data = graphql::execute(
        client,
        endpoint,
        credential,
        OPERATION,
        RUN_HISTORY_QUERY,
        Some(&variables),
        metrics,
    )
    .await?;

    let decoded = decode_run_history(&data)?;

    if decoded.skipped > 0
        && let Some(m) = metrics
    {
        m.record_skipped(OPERATION, decoded.skipped);
    }
    debug!(
        entity,
        project,
        run = %run,
        series = decoded.series.len(),
        skipped = decoded.skipped,
        "Fetched run metrics"
    );

    Ok(decoded.series)
}

/// Reshape the `data` object of a run history response.
pub(crate) fn decode_run_history(data: &Value) -> Result<HistoryDecode> {
    let data = data_object(data)?;
    let project = object(data, "project", "data.project")?;

    let run = match project.get("run") {
        None | Some(Value::Null) => return Ok(HistoryDecode::default()),
        Some(Value::Object(run)) => run,
        Some(_) => return Err(FetchError::malformed("data.project.run is not an object")),
    };

    match run.get("history") {
        None | Some(Value::Null) => Ok(HistoryDecode::default()),
        Some(Value::Array(entries)) => Ok(decode_history(entries)),
        Some(_) => Err(FetchError::malformed(
            "data.project.run.history is not an array",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_run_yields_no_series() {
        let decoded = decode_run_history(&json!({"project": {"run": null}})).unwrap();
        assert!(decoded.series.is_empty());
    }

    #[test]
    fn test_null_history_yields_no_series() {
        let decoded =
            decode_run_history(&json!({"project": {"run": {"history": null}}})).unwrap();
        assert!(decoded.series.is_empty());
        let decoded = decode_run_history(&json!({"project": {"run": {}}})).unwrap();
        assert!(decoded.series.is_empty());
    }

    #[test]
    fn test_missing_project_is_malformed() {
        assert!(matches!(
            decode_run_history(&json!({})),
            Err(FetchError::MalformedResponse(_))
        ));
        assert!(matches!(
            decode_run_history(&json!({"project": null})),
            Err(FetchError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_unexpected_run_or_history_shape_is_malformed() {
        assert!(matches!(
            decode_run_history(&json!({"project": {"run": "abc"}})),
            Err(FetchError::MalformedResponse(_))
        ));
        assert!(matches!(
            decode_run_history(&json!({"project": {"run": {"history": "[]"}}})),
            Err(FetchError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_history_is_decoded() {
        let data = json!({"project": {"run": {"history": [
            "{\"_step\":0,\"loss\":0.5}",
            42,
            {"_step": 1, "loss": 0.25}
        ]}}});
        let decoded = decode_run_history(&data).unwrap();
        assert_eq!(decoded.skipped, 1);
        assert_eq!(decoded.series.len(), 1);
        assert_eq!(decoded.series[0].points.len(), 2);
    }
}
