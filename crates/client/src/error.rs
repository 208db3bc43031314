//! Error types for the W&B client.
//!
//! Three layers, matching the three kinds of callers:
//! - [`TransportError`]: raised by the GraphQL transport.
//! - [`AuthError`]: the single yes/no failure signal of credential verification.
//! - [`FetchError`]: raised by the resource fetchers, wrapping or replacing
//!   transport failures depending on context.

use thiserror::Error;

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Failures of a single GraphQL POST.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, timeout, or body read failure.
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The service answered with a status other than 200.
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),

    /// The body was not JSON, or had neither `errors` nor `data`.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// The payload carried a non-empty `errors` array.
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQLErrors(Vec<String>),
}

impl TransportError {
    /// Check if this error happened before a response was received.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::NetworkFailure(_))
    }

    /// Check if the service rejected the credential at the HTTP layer.
    pub fn is_auth_status(&self) -> bool {
        matches!(self, Self::HttpStatus(401 | 403))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest errors carry the URL but never request headers.
        Self::NetworkFailure(err.to_string())
    }
}

/// Failures while constructing a [`crate::WandbClient`].
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Invalid base URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Credential verification failed, for whatever reason.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication failed")]
    Failed,
}

/// Errors returned by the resource fetchers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The API key was empty; no request was sent.
    #[error("API key is missing")]
    MissingCredential,

    /// The service answered with a null viewer.
    #[error("Not authenticated: the service did not recognise the API key")]
    Unauthenticated,

    /// The response did not have the expected overall shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The transport failed and the failure was not reinterpreted.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl FetchError {
    /// Check if this error indicates a credential problem.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::MissingCredential | Self::Unauthenticated => true,
            Self::Transport(e) => e.is_auth_status(),
            Self::MalformedResponse(_) => false,
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}
