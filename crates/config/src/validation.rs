//! Credential validation at the storage boundary.
//!
//! Responsibilities:
//! - Reject API keys that are empty, oversized, or look like a saved error message.
//! - Normalize the entity name.
//!
//! Does NOT handle:
//! - Verifying the key against the service (see `verify` in the client crate).
//!
//! Invariants:
//! - Validated keys are returned trimmed.
//! - Short keys are accepted with a warning; only the checks above reject.

use tracing::warn;

use crate::constants::{API_KEY_SENTINELS, MAX_API_KEY_LEN, MIN_EXPECTED_API_KEY_LEN};
use crate::loader::ConfigError;

/// Validate a raw API key and return its trimmed form.
///
/// # Errors
///
/// Returns [`ConfigError::MissingApiKey`] for an empty key and
/// [`ConfigError::InvalidApiKey`] when the key is too long or contains
/// one of [`API_KEY_SENTINELS`].
pub fn validate_api_key(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingApiKey);
    }

    if trimmed.chars().count() > MAX_API_KEY_LEN {
        return Err(ConfigError::InvalidApiKey {
            reason: format!("longer than {MAX_API_KEY_LEN} characters"),
        });
    }

    let lowered = trimmed.to_lowercase();
    if let Some(sentinel) = API_KEY_SENTINELS.iter().find(|s| lowered.contains(*s)) {
        // The sentinel is not secret; the key itself is never echoed.
        return Err(ConfigError::InvalidApiKey {
            reason: format!("looks like an error message (contains '{sentinel}')"),
        });
    }

    if trimmed.chars().count() < MIN_EXPECTED_API_KEY_LEN {
        warn!(
            length = trimmed.chars().count(),
            "API key is shorter than expected"
        );
    }

    Ok(trimmed.to_string())
}

/// Trim the entity name, returning `None` when nothing remains.
pub fn normalize_entity(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
