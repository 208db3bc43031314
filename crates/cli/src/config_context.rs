//! Configuration resolution for commands that talk to the service.
//!
//! Responsibilities:
//! - Merge environment, CLI flags and the keyring into a validated `Config`.
//!
//! Does NOT handle:
//! - `.env` loading (done in `main()` before clap parses).
//! - Writing credentials (see `commands::login`).
//!
//! Invariants:
//! - Precedence: CLI flags > environment > keyring > defaults.
//! - The keyring is only opened when the key or entity is still missing.

use anyhow::Result;
use std::time::Duration;
use tracing::warn;
use wandb_config::{Config, ConfigLoader, CredentialStore};

use crate::args::Cli;

/// Build the effective configuration for `cli`.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref key) = cli.api_key {
        loader = loader.with_api_key(key.clone());
    }
    if let Some(ref entity) = cli.entity {
        loader = loader.with_entity(entity.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }

    if !loader.has_api_key() || !loader.has_entity() {
        match CredentialStore::new() {
            Ok(store) => loader = loader.from_keyring(&store),
            Err(e) => warn!(error = %e, "Keyring unavailable"),
        }
    }

    Ok(loader.build()?)
}
