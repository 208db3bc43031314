//! Keyring-backed credential storage.
//!
//! Responsibilities:
//! - Save, load, and delete the API key and entity in the system keyring.
//! - Discard stored keys that fail validation instead of handing them out.
//!
//! Does NOT handle:
//! - Environment or `.env` credentials (see `loader`).
//!
//! Invariants:
//! - Keys are validated before they are saved and again when they are loaded.
//! - A missing keyring entry is `Ok(None)`, not an error.

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::constants::{KEYRING_API_KEY_ACCOUNT, KEYRING_ENTITY_ACCOUNT, KEYRING_SERVICE};
use crate::loader::ConfigError;
use crate::validation::{normalize_entity, validate_api_key};

/// Keyring entries holding the stored credential.
pub struct CredentialStore {
    api_key: keyring::Entry,
    entity: keyring::Entry,
}

impl CredentialStore {
    /// Open the entries under the default keyring service.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_service(KEYRING_SERVICE)
    }

    /// Open the entries under a custom keyring service name.
    pub fn with_service(service: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: keyring::Entry::new(service, KEYRING_API_KEY_ACCOUNT)?,
            entity: keyring::Entry::new(service, KEYRING_ENTITY_ACCOUNT)?,
        })
    }

    /// Validate and store a credential.
    pub fn save(&self, api_key: &SecretString, entity: &str) -> Result<(), ConfigError> {
        let key = validate_api_key(api_key.expose_secret())?;
        let entity = normalize_entity(entity).ok_or(ConfigError::MissingEntity)?;

        self.api_key.set_password(&key)?;
        self.entity.set_password(&entity)?;
        debug!("Stored credential in keyring");
        Ok(())
    }

    /// Load the stored API key.
    ///
    /// A stored value that fails validation is deleted and reported as absent.
    pub fn load_api_key(&self) -> Result<Option<SecretString>, ConfigError> {
        let Some(raw) = read_entry(&self.api_key)? else {
            return Ok(None);
        };

        match validate_api_key(&raw) {
            Ok(key) => Ok(Some(SecretString::new(key.into()))),
            Err(e) => {
                warn!(error = %e, "Stored API key appears corrupted, clearing it");
                self.delete()?;
                Ok(None)
            }
        }
    }

    /// Load the stored entity name.
    pub fn load_entity(&self) -> Result<Option<String>, ConfigError> {
        Ok(read_entry(&self.entity)?.and_then(|e| normalize_entity(&e)))
    }

    /// Remove both entries. Missing entries are ignored.
    pub fn delete(&self) -> Result<(), ConfigError> {
        for entry in [&self.api_key, &self.entity] {
            match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

fn read_entry(entry: &keyring::Entry) -> Result<Option<String>, ConfigError> {
    match entry.get_password() {
        Ok(value) => Ok(Some(value)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
