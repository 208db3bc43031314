//! JSON formatter implementation.
//!
//! Pretty-printed serde output of the client's records. Metric series are
//! always printed in full; the `points` flag only affects tables.

use anyhow::Result;
use wandb_client::{MetricSeries, Project, Run};

use crate::formatters::{Formatter, VerifyOutput};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_verify(&self, output: &VerifyOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(output)?)
    }

    fn format_projects(&self, projects: &[Project]) -> Result<String> {
        Ok(serde_json::to_string_pretty(projects)?)
    }

    fn format_runs(&self, runs: &[Run]) -> Result<String> {
        Ok(serde_json::to_string_pretty(runs)?)
    }

    fn format_metrics(&self, series: &[MetricSeries], _points: bool) -> Result<String> {
        Ok(serde_json::to_string_pretty(series)?)
    }
}
