//! Projects command implementation.

use anyhow::{Context, Result};
use tracing::info;

use crate::commands::{CommandContext, print_output};

pub async fn run(ctx: &CommandContext) -> Result<()> {
    let projects = ctx
        .client
        .fetch_projects(&ctx.credential)
        .await
        .context("Failed to list projects")?;

    info!(count = projects.len(), "Listed projects");
    print_output(ctx.format, |f| f.format_projects(&projects))
}
