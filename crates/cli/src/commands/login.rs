//! Login command implementation.
//!
//! Validates the key locally, optionally checks it against the service, and
//! stores key and entity in the system keyring.

use anyhow::{Context, Result};
use secrecy::SecretString;
use tracing::info;
use wandb_client::{Credential, FetchError};
use wandb_config::{ConfigError, CredentialStore, normalize_entity, validate_api_key};

use crate::args::Cli;
use crate::commands::build_client;
use crate::config_context::load_config;

pub async fn run(cli: &Cli, no_verify: bool) -> Result<()> {
    let raw_key = cli.api_key.as_deref().ok_or(ConfigError::MissingApiKey)?;
    let api_key = validate_api_key(raw_key)?;
    let entity = cli
        .entity
        .as_deref()
        .and_then(normalize_entity)
        .ok_or(ConfigError::MissingEntity)?;

    let credential = Credential::new(api_key.clone(), entity.clone());

    if !no_verify {
        let client = build_client(&load_config(cli)?, false)?;
        let valid = client
            .verify(&credential)
            .await
            .context("Could not verify the API key")?;
        if !valid {
            return Err(FetchError::Unauthenticated.into());
        }
    }

    CredentialStore::new()?
        .save(&SecretString::new(api_key.into()), &entity)
        .context("Failed to store credentials in the keyring")?;

    info!(entity = %entity, "Stored credentials");
    eprintln!("Logged in as {} (key {})", entity, credential.key_preview());
    Ok(())
}
