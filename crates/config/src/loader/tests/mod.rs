//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and `build()` validation.
//! - Test environment variable handling and precedence.
//! - Test keyring fallback for the credential.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;

pub mod basic_tests;

/// A key that passes validation.
pub const GOOD_KEY: &str = "0123456789abcdef0123456789abcdef01234567";

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
