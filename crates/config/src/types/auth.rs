//! Credential configuration types.
//!
//! Responsibilities:
//! - Hold the API key and the entity the user acts as.
//! - Handle serialization of the secret key.
//!
//! Does NOT handle:
//! - Building the Authorization header (see client crate).
//! - Keyring access (see `credential_store`).
//!
//! Invariants:
//! - The API key uses `secrecy::SecretString` to prevent accidental logging.
//! - Serialization includes the secret; secrecy is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// W&B API key (already validated when produced by `ConfigLoader`).
    #[serde(with = "secret_string")]
    pub api_key: SecretString,
    /// Account or organization namespace the user acts as.
    pub entity: String,
}
