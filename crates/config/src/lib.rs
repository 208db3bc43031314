//! Configuration management for the W&B client.
//!
//! This crate provides types and loaders for the connection settings and
//! the API credential, sourced from environment variables, `.env` files,
//! and the system keyring. It is also the place where stored credentials
//! are validated before the client ever sees them.

pub mod constants;
mod credential_store;
mod loader;
pub mod types;
mod validation;

pub use credential_store::CredentialStore;
pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
pub use validation::{normalize_entity, validate_api_key};
