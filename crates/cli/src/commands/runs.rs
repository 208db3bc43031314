//! Runs command implementation.

use anyhow::{Context, Result};
use tracing::info;

use crate::commands::{CommandContext, print_output};

pub async fn run(ctx: &CommandContext, project: &str) -> Result<()> {
    let entity = ctx.entity();

    let runs = ctx
        .client
        .fetch_runs(&ctx.credential, entity, project)
        .await
        .with_context(|| format!("Failed to list runs of {entity}/{project}"))?;

    info!(entity, project, count = runs.len(), "Listed runs");
    print_output(ctx.format, |f| f.format_runs(&runs))
}
