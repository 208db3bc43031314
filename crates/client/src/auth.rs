//! Credential type and Authorization header construction.
//!
//! The service expects HTTP Basic auth with the fixed user `api` and the
//! API key as password: `Basic base64("api:" + key)`.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use secrecy::{ExposeSecret, SecretString};
use wandb_config::Config;

/// User name the service expects in the Basic auth pair.
const BASIC_AUTH_USER: &str = "api";

/// An API key plus the entity the caller acts as.
///
/// Passed explicitly to every operation; the client never stores one.
/// `Debug` output redacts the key.
#[derive(Debug, Clone)]
pub struct Credential {
    api_key: SecretString,
    entity: String,
}

impl Credential {
    /// Create a credential from a raw key and entity.
    pub fn new(api_key: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into().into()),
            entity: entity.into(),
        }
    }

    /// Create a credential from an already-wrapped secret.
    pub fn from_secret(api_key: SecretString, entity: impl Into<String>) -> Self {
        Self {
            api_key,
            entity: entity.into(),
        }
    }

    /// Take the credential out of a loaded (and therefore validated) config.
    pub fn from_config(config: &Config) -> Self {
        Self::from_secret(config.auth.api_key.clone(), config.auth.entity.clone())
    }

    /// The entity (account or organization) this credential acts as.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// True when the key is empty after trimming.
    pub fn is_empty(&self) -> bool {
        self.api_key.expose_secret().trim().is_empty()
    }

    /// A loggable preview of the key: first and last four characters.
    ///
    /// Keys of eight characters or fewer are fully masked.
    pub fn key_preview(&self) -> String {
        let key = self.api_key.expose_secret().trim();
        let chars: Vec<char> = key.chars().collect();
        if chars.len() <= 8 {
            return "****".to_string();
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }

    /// The `Authorization` header value for this credential.
    pub fn auth_header(&self) -> String {
        build_auth_header(self.api_key.expose_secret())
    }
}

/// Build the `Authorization` header value for a raw API key.
///
/// The key is trimmed first. An empty key still yields a well-formed
/// (but useless) header; rejecting empty keys is the caller's job.
pub fn build_auth_header(raw: &str) -> String {
    let pair = format!("{BASIC_AUTH_USER}:{}", raw.trim());
    format!("Basic {}", STANDARD.encode(pair.as_bytes()))
}
