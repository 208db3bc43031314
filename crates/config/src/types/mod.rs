//! Configuration type definitions for the W&B client.
//!
//! Responsibilities:
//! - Define the connection settings and the credential configuration.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from the environment or keyring (see `loader` module).
//! - Credential validation (see `validation` module).
//!
//! Invariants:
//! - The API key is always held as a `secrecy::SecretString`.

mod auth;
pub(crate) mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
