//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Bind global options to their `WANDB_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not merge configuration layers (see `config_context` module).

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wandb-cli")]
#[command(about = "W&B CLI - Browse Weights & Biases projects, runs and metrics", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  wandb-cli login\n  wandb-cli projects\n  wandb-cli runs mnist-baseline\n  wandb-cli metrics mnist-baseline k3m9q2vx --key train/loss\n  wandb-cli -o json runs shared-llm-evals --entity research-org\n"
)]
pub struct Cli {
    /// API key (from https://wandb.ai/authorize)
    #[arg(short = 'k', long, global = true, env = "WANDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Entity (user or team) the key acts as
    #[arg(short, long, global = true, env = "WANDB_ENTITY")]
    pub entity: Option<String>,

    /// Base URL of the W&B API server (e.g., https://api.wandb.ai)
    #[arg(short, long, global = true, env = "WANDB_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "WANDB_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    /// Export traces to this OTLP gRPC endpoint (e.g., http://localhost:4317)
    #[arg(long, global = true, env = "WANDB_OTLP_ENDPOINT", value_name = "URL")]
    pub otlp_endpoint: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the API key is accepted by the service
    Verify,

    /// List your projects, newest first
    Projects,

    /// List the runs of a project, newest first
    Runs {
        /// Project name
        project: String,
    },

    /// Show the metric series recorded by a run
    Metrics {
        /// Project name
        project: String,

        /// Run name as shown by `runs` (not the run id)
        run: String,

        /// Only show these metric keys (repeatable)
        #[arg(long = "key", value_name = "KEY")]
        keys: Vec<String>,

        /// Print every point instead of a summary (table output only)
        #[arg(long)]
        points: bool,
    },

    /// Verify an API key and store it in the system keyring
    Login {
        /// Store the key without checking it against the service
        #[arg(long)]
        no_verify: bool,
    },

    /// Remove the stored API key and entity from the system keyring
    Logout,
}
