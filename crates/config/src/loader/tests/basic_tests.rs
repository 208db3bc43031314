//! Basic loader tests for the configuration loader builder.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;
use std::time::Duration;

use super::GOOD_KEY;

#[test]
fn test_build_with_defaults() {
    let config = ConfigLoader::new()
        .with_api_key(GOOD_KEY.to_string())
        .with_entity("team".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "https://api.wandb.ai");
    assert_eq!(config.connection.timeout, Duration::from_secs(30));
    assert_eq!(config.auth.api_key.expose_secret(), GOOD_KEY);
    assert_eq!(config.auth.entity, "team");
}

#[test]
fn test_build_trims_credential() {
    let config = ConfigLoader::new()
        .with_api_key(format!("  {GOOD_KEY}\t"))
        .with_entity("  team  ".to_string())
        .build()
        .unwrap();

    assert_eq!(config.auth.api_key.expose_secret(), GOOD_KEY);
    assert_eq!(config.auth.entity, "team");
}

#[test]
fn test_missing_api_key() {
    let result = ConfigLoader::new()
        .with_entity("team".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingApiKey)));
}

#[test]
fn test_blank_entity_is_missing() {
    let result = ConfigLoader::new()
        .with_api_key(GOOD_KEY.to_string())
        .with_entity("   ".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingEntity)));
}

#[test]
fn test_sentinel_api_key_rejected() {
    let result = ConfigLoader::new()
        .with_api_key("viewer: null".to_string())
        .with_entity("team".to_string())
        .build();

    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::InvalidApiKey { .. }));
    assert!(err.is_credential_error());
}

#[test]
fn test_base_url_normalized() {
    let config = ConfigLoader::new()
        .with_api_key(GOOD_KEY.to_string())
        .with_entity("team".to_string())
        .with_base_url("https://wandb.example.com/".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "https://wandb.example.com");
}

#[test]
fn test_base_url_rejects_non_http_scheme() {
    let result = ConfigLoader::new()
        .with_api_key(GOOD_KEY.to_string())
        .with_entity("team".to_string())
        .with_base_url("ftp://wandb.example.com".to_string())
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_zero_timeout_rejected() {
    let result = ConfigLoader::new()
        .with_api_key(GOOD_KEY.to_string())
        .with_entity("team".to_string())
        .with_timeout(Duration::from_secs(0))
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_excessive_timeout_rejected() {
    let result = ConfigLoader::new()
        .with_api_key(GOOD_KEY.to_string())
        .with_entity("team".to_string())
        .with_timeout(Duration::from_secs(7200))
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}
