//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Invariants:
//! - Error messages never include the API key or raw `.env` line contents.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("API key is required. Set WANDB_API_KEY or run `wandb-cli login`.")]
    MissingApiKey,

    #[error("Entity is required. Set WANDB_ENTITY or pass --entity.")]
    MissingEntity,

    #[error("Rejected API key: {reason}")]
    InvalidApiKey { reason: String },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the parse failure is reported, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file")]
    DotenvUnknown,
}

impl ConfigError {
    /// Whether the error concerns the credential rather than connection settings.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey | Self::MissingEntity | Self::InvalidApiKey { .. }
        )
    }
}
