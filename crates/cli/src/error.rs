//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map client and config errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use std::fmt;

use wandb_client::{AuthError, BuildError, FetchError, TransportError};
use wandb_config::ConfigError;

/// Structured exit codes for wandb-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Missing, malformed or rejected API key.
    ///
    /// Scripts should run `wandb-cli login` or fix `WANDB_API_KEY`.
    AuthenticationFailed = 2,

    /// Network, timeout, or DNS failure; or an unusable base URL.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// The service answered with GraphQL errors (unknown project, bad arguments).
    QueryRejected = 4,

    /// The response could not be understood.
    InvalidResponse = 5,

    /// HTTP 502/503/504.
    ServiceUnavailable = 8,

    /// SIGINT/Ctrl+C.
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&TransportError> for ExitCode {
    fn from(err: &TransportError) -> Self {
        match err {
            TransportError::NetworkFailure(_) => ExitCode::ConnectionError,
            TransportError::HttpStatus(401 | 403) => ExitCode::AuthenticationFailed,
            TransportError::HttpStatus(502..=504) => ExitCode::ServiceUnavailable,
            TransportError::HttpStatus(_) => ExitCode::GeneralError,
            TransportError::MalformedPayload(_) => ExitCode::InvalidResponse,
            TransportError::GraphQLErrors(_) => ExitCode::QueryRejected,
        }
    }
}

impl From<&FetchError> for ExitCode {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::MissingCredential | FetchError::Unauthenticated => {
                ExitCode::AuthenticationFailed
            }
            FetchError::MalformedResponse(_) => ExitCode::InvalidResponse,
            FetchError::Transport(inner) => Self::from(inner),
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        if err.is_credential_error() {
            ExitCode::AuthenticationFailed
        } else {
            ExitCode::GeneralError
        }
    }
}

/// Marker error for user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Operation cancelled by user")
    }
}

impl std::error::Error for Cancelled {}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(e) = cause.downcast_ref::<FetchError>() {
                return ExitCode::from(e);
            }
            if let Some(e) = cause.downcast_ref::<TransportError>() {
                return ExitCode::from(e);
            }
            if cause.is::<AuthError>() {
                return ExitCode::AuthenticationFailed;
            }
            if let Some(e) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(e);
            }
            if cause.is::<BuildError>() {
                return ExitCode::ConnectionError;
            }
            if cause.is::<Cancelled>() {
                return ExitCode::Interrupted;
            }
        }
        ExitCode::GeneralError
    }
}
