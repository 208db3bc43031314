//! CLI command implementations.

pub mod login;
pub mod logout;
pub mod metrics;
pub mod projects;
pub mod runs;
pub mod verify;

use anyhow::Result;
use wandb_client::{Credential, MetricsCollector, WandbClient};
use wandb_config::Config;

use crate::formatters::{OutputFormat, get_formatter};

/// Everything a service-facing command needs.
pub struct CommandContext {
    pub client: WandbClient,
    pub credential: Credential,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Build the client and credential for `config`.
    ///
    /// `record_metrics` attaches a collector, used when an exporter is running.
    pub fn new(config: &Config, format: OutputFormat, record_metrics: bool) -> Result<Self> {
        let client = build_client(config, record_metrics)?;
        Ok(Self {
            client,
            credential: Credential::from_config(config),
            format,
        })
    }

    /// Entity that owns the projects being queried.
    pub fn entity(&self) -> &str {
        self.credential.entity()
    }
}

/// Build a client from connection settings.
pub fn build_client(config: &Config, record_metrics: bool) -> Result<WandbClient> {
    let mut builder = WandbClient::builder().from_config(config);
    if record_metrics {
        builder = builder.metrics(MetricsCollector::new());
    }
    Ok(builder.build()?)
}

/// Format with the context's formatter and print to stdout.
pub fn print_output(
    format: OutputFormat,
    render: impl FnOnce(&dyn crate::formatters::Formatter) -> Result<String>,
) -> Result<()> {
    let formatter = get_formatter(format);
    let output = render(formatter.as_ref())?;
    print!("{output}");
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
