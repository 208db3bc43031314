//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the command handlers.
//! - Resolve configuration for commands that talk to the service.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Signal handling (see `main()`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands::{self, CommandContext};
use crate::config_context::load_config;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
///
/// `record_metrics` is true when a Prometheus exporter is running.
pub(crate) async fn run_command(cli: Cli, record_metrics: bool) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;

    match &cli.command {
        Commands::Login { no_verify } => return commands::login::run(&cli, *no_verify).await,
        Commands::Logout => return commands::logout::run(),
        _ => {}
    }

    let config = load_config(&cli)?;
    let ctx = CommandContext::new(&config, format, record_metrics)?;

    match &cli.command {
        Commands::Verify => commands::verify::run(&ctx).await,
        Commands::Projects => commands::projects::run(&ctx).await,
        Commands::Runs { project } => commands::runs::run(&ctx, project).await,
        Commands::Metrics {
            project,
            run,
            keys,
            points,
        } => commands::metrics::run(&ctx, project, run, keys, *points).await,
        Commands::Login { .. } | Commands::Logout => Ok(()),
    }
}
