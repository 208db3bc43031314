//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from environment variables, the keyring, and direct builder methods.
//! - Validate the credential and connection settings when building the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Writing to the keyring (see `CredentialStore`).
//!
//! Invariants / Assumptions:
//! - Later layers override earlier ones; the keyring only fills values still unset.
//! - `build()` never yields a `Config` whose API key fails `validate_api_key`.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::warn;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::credential_store::CredentialStore;
use crate::types::{AuthConfig, Config, ConnectionConfig};
use crate::validation::{normalize_entity, validate_api_key};

/// Configuration loader that builds config from environment variables and the keyring.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    entity: Option<String>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Fill the credential from the keyring where it is still unset.
    ///
    /// Keyring failures are logged and treated as absent values, so an
    /// unavailable keyring surfaces as a missing credential at `build()`.
    pub fn from_keyring(mut self, store: &CredentialStore) -> Self {
        if self.api_key.is_none() {
            self.api_key = store.load_api_key().unwrap_or_else(|e| {
                warn!(error = %e, "Failed to read API key from keyring");
                None
            });
        }
        if self.entity.is_none() {
            self.entity = store.load_entity().unwrap_or_else(|e| {
                warn!(error = %e, "Failed to read entity from keyring");
                None
            });
        }
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the entity.
    pub fn with_entity(mut self, entity: String) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(super) fn set_base_url(&mut self, url: String) {
        self.base_url = Some(url);
    }

    pub(super) fn set_api_key(&mut self, key: SecretString) {
        self.api_key = Some(key);
    }

    pub(super) fn set_entity(&mut self, entity: String) {
        self.entity = Some(entity);
    }

    pub(super) fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    /// Whether an API key has been provided by any layer so far.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Whether an entity has been provided by any layer so far.
    pub fn has_entity(&self) -> bool {
        self.entity.is_some()
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Fails when the API key or entity is missing, the API key is rejected
    /// by [`validate_api_key`], or the base URL or timeout is invalid.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = validate_and_normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let api_key = self.api_key.ok_or(ConfigError::MissingApiKey)?;
        let api_key = validate_api_key(api_key.expose_secret())?;

        let entity = self
            .entity
            .as_deref()
            .and_then(normalize_entity)
            .ok_or(ConfigError::MissingEntity)?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        Ok(Config {
            connection: ConnectionConfig { base_url, timeout },
            auth: AuthConfig {
                api_key: SecretString::new(api_key.into()),
                entity,
            },
        })
    }
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!("must not exceed {MAX_TIMEOUT_SECS} seconds (got {secs})"),
        });
    }
    Ok(())
}

/// Validate and normalize a base URL.
///
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slash
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://api.wandb.ai): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. https://api.wandb.ai)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
