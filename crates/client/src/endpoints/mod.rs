//! GraphQL endpoint implementations.
//!
//! Every function takes the HTTP client, the full GraphQL endpoint URL, and
//! the credential for that single call. [`crate::WandbClient`] wraps them.

pub mod graphql;
mod metrics;
mod projects;
pub mod queries;
mod response;
mod runs;
mod viewer;

pub use graphql::{GraphQLRequest, execute, parse_payload};
pub use metrics::get_run_metrics;
pub use projects::list_projects;
pub use runs::list_runs;
pub use viewer::verify_credential;

use crate::auth::Credential;
use crate::error::FetchError;

/// Fail fast when the credential carries no key.
fn require_credential(credential: &Credential) -> Result<(), FetchError> {
    if credential.is_empty() {
        return Err(FetchError::MissingCredential);
    }
    Ok(())
}
