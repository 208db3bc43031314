//! Centralized constants for the W&B workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default base URL of the hosted W&B API.
pub const DEFAULT_BASE_URL: &str = "https://api.wandb.ai";

/// Path of the GraphQL endpoint relative to the base URL.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Credential Validation
// =============================================================================

/// Keys longer than this are rejected as corrupted.
pub const MAX_API_KEY_LEN: usize = 200;

/// Keys shorter than this are accepted but logged as suspicious.
pub const MIN_EXPECTED_API_KEY_LEN: usize = 20;

/// Substrings that indicate an error message was saved in place of a key.
///
/// Matched case-insensitively.
pub const API_KEY_SENTINELS: &[&str] = &["viewer", "error", "null"];

// =============================================================================
// Keyring
// =============================================================================

/// Service name used for keyring storage.
pub const KEYRING_SERVICE: &str = "wandb-cli";

/// Keyring account holding the API key.
pub const KEYRING_API_KEY_ACCOUNT: &str = "wandb_api_key";

/// Keyring account holding the entity name.
pub const KEYRING_ENTITY_ACCOUNT: &str = "wandb_entity";
