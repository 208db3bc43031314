//! Verify command implementation.

use anyhow::{Context, Result};
use tracing::info;
use wandb_client::FetchError;

use crate::commands::{CommandContext, print_output};
use crate::formatters::VerifyOutput;

pub async fn run(ctx: &CommandContext) -> Result<()> {
    info!(endpoint = %ctx.client.endpoint(), "Verifying API key");

    let valid = ctx
        .client
        .verify(&ctx.credential)
        .await
        .context("Could not verify the API key")?;

    let output = VerifyOutput {
        valid,
        entity: ctx.credential.entity().to_string(),
        key_preview: ctx.credential.key_preview(),
    };
    print_output(ctx.format, |f| f.format_verify(&output))?;

    if !valid {
        return Err(FetchError::Unauthenticated.into());
    }
    Ok(())
}
