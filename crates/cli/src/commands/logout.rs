//! Logout command implementation.

use anyhow::{Context, Result};

pub fn run() -> Result<()> {
    wandb_config::CredentialStore::new()?
        .delete()
        .context("Failed to remove credentials from the keyring")?;
    eprintln!("Removed stored credentials");
    Ok(())
}
