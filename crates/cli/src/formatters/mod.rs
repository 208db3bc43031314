//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the table and JSON output formats.
//! - Implement the `Formatter` trait for projects, runs, metric series and
//!   verification results.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Tables are tab-separated with a header row.
//! - Empty results: JSON prints `[]`, tables print a human message.
//! - Missing values print as `N/A` in tables and `null` (or are omitted) in JSON.

use anyhow::Result;
use serde::Serialize;
use wandb_client::{MetricSeries, Project, Run};

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Placeholder for absent values in table output.
pub const MISSING_VALUE: &str = "N/A";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Result of `verify`.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyOutput {
    pub valid: bool,
    pub entity: String,
    pub key_preview: String,
}

/// Formatter trait for different output types.
pub trait Formatter {
    fn format_verify(&self, output: &VerifyOutput) -> Result<String>;

    fn format_projects(&self, projects: &[Project]) -> Result<String>;

    fn format_runs(&self, runs: &[Run]) -> Result<String>;

    /// Format metric series; `points` asks for every sample rather than a summary.
    fn format_metrics(&self, series: &[MetricSeries], points: bool) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}
