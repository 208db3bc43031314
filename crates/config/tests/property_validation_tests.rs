//! Property-based tests for credential validation and config building.
//!
//! Test coverage:
//! - validate_api_key: trimming, sentinel rejection, length cap
//! - normalize_entity: blank names are absent
//! - ConfigLoader::build: base URL normalization

use proptest::prelude::*;
use secrecy::ExposeSecret;

use wandb_config::constants::{API_KEY_SENTINELS, MAX_API_KEY_LEN};
use wandb_config::{ConfigError, ConfigLoader, normalize_entity, validate_api_key};

/// Hex keys like the ones the service issues. Hex digits cannot spell a sentinel.
fn api_key_strategy() -> impl Strategy<Value = String> {
    "[0-9a-f]{20,60}"
}

fn whitespace_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,3}"
}

proptest! {
    #[test]
    fn valid_key_comes_back_trimmed(
        key in api_key_strategy(),
        left in whitespace_strategy(),
        right in whitespace_strategy(),
    ) {
        let validated = validate_api_key(&format!("{left}{key}{right}")).unwrap();
        prop_assert_eq!(validated, key);
    }

    #[test]
    fn key_containing_sentinel_is_rejected(
        prefix in "[0-9a-f]{0,20}",
        suffix in "[0-9a-f]{0,20}",
        idx in 0..API_KEY_SENTINELS.len(),
        upper in any::<bool>(),
    ) {
        let sentinel = if upper {
            API_KEY_SENTINELS[idx].to_uppercase()
        } else {
            API_KEY_SENTINELS[idx].to_string()
        };
        let result = validate_api_key(&format!("{prefix}{sentinel}{suffix}"));
        let is_invalid = matches!(result, Err(ConfigError::InvalidApiKey { .. }));
        prop_assert!(is_invalid);
    }

    #[test]
    fn oversized_key_is_rejected(extra in 1usize..50) {
        let key = "a".repeat(MAX_API_KEY_LEN + extra);
        let is_invalid = matches!(validate_api_key(&key), Err(ConfigError::InvalidApiKey { .. }));
        prop_assert!(is_invalid);
    }

    #[test]
    fn blank_entity_is_absent(blank in whitespace_strategy()) {
        prop_assert_eq!(normalize_entity(&blank), None);
    }

    #[test]
    fn base_url_trailing_slashes_removed(
        host in "[a-z]{3,10}",
        port in 1024u16..=65535u16,
        slashes in 0usize..4,
    ) {
        let raw = format!("https://{host}.example:{port}{}", "/".repeat(slashes));
        let config = ConfigLoader::new()
            .with_base_url(raw)
            .with_api_key("0123456789abcdef0123456789abcdef01234567".to_string())
            .with_entity("ada".to_string())
            .build()
            .unwrap();

        prop_assert_eq!(config.connection.base_url, format!("https://{host}.example:{port}"));
        prop_assert_eq!(
            config.auth.api_key.expose_secret(),
            "0123456789abcdef0123456789abcdef01234567"
        );
    }
}
