//! W&B CLI - Command-line interface for the Weights & Biases GraphQL API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run queries through the shared client library.
//! - Format and display results as tables or JSON.
//!
//! Does NOT handle:
//! - GraphQL transport or response decoding (see `crates/client`).
//! - Credential validation rules (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{Cancelled, ExitCode, ExitCodeExt};
use wandb_client::MetricsExporter;
use wandb_client::tracing::{LogFormat, TracingConfig};
use wandb_config::ConfigLoader;

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let mut tracing_config = TracingConfig::new()
        .with_service_name("wandb-cli")
        .with_service_version(env!("CARGO_PKG_VERSION"));
    if let Some(ref endpoint) = cli.otlp_endpoint {
        tracing_config = tracing_config.with_otlp_endpoint(endpoint);
    }
    if cli.log_json {
        tracing_config = tracing_config.with_log_format(Some(LogFormat::Json));
    }
    let tracing_guard = match tracing_config.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize tracing: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    // Initialize metrics exporter if --metrics-bind is provided
    let metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!("Metrics exporter started on http://{}/metrics", exporter.bind_addr());
                Some(exporter)
            }
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let result = tokio::select! {
        result = run_command(cli, metrics_exporter.is_some()) => result,
        _ = tokio::signal::ctrl_c() => Err(Cancelled.into()),
    };

    let exit_code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    // Shutdown tracing to ensure all spans are flushed
    tracing_guard.shutdown();

    std::process::exit(exit_code.as_i32());
}
