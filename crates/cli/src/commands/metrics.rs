//! Metrics command implementation.

use anyhow::{Context, Result};
use tracing::info;
use wandb_client::{MetricSeries, RunName};

use crate::commands::{CommandContext, print_output};

pub async fn run(
    ctx: &CommandContext,
    project: &str,
    run: &str,
    keys: &[String],
    points: bool,
) -> Result<()> {
    let entity = ctx.entity();
    let run = RunName::from(run);

    let series = ctx
        .client
        .fetch_metrics(&ctx.credential, entity, project, &run)
        .await
        .with_context(|| format!("Failed to fetch metrics of {entity}/{project}/{run}"))?;

    let series = select_keys(series, keys);

    info!(entity, project, run = %run, series = series.len(), "Fetched metrics");
    print_output(ctx.format, |f| f.format_metrics(&series, points))
}

/// Keep only the requested keys; no keys means keep everything.
fn select_keys(series: Vec<MetricSeries>, keys: &[String]) -> Vec<MetricSeries> {
    if keys.is_empty() {
        return series;
    }
    series
        .into_iter()
        .filter(|s| keys.iter().any(|k| k == &s.name))
        .collect()
}
