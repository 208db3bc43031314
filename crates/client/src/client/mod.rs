//! Main W&B GraphQL client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `verify`: Credential verification
//! - `projects`, `runs`, `metrics`: Resource fetchers
//!
//! # What this module does NOT handle:
//! - Request construction and response reshaping (delegated to [`crate::endpoints`])
//! - Credential storage and validation (handled by `wandb_config`)
//! - Retries (callers decide whether to repeat a call)
//!
//! # Invariants
//! - The client holds no credential. Every call takes a [`crate::Credential`],
//!   so one client can serve several credentials concurrently.
//! - Every call issues exactly one GraphQL POST, or none when the key is empty.

pub mod builder;

mod metrics;
mod projects;
mod runs;
mod verify;

use crate::metrics::MetricsCollector;

/// W&B GraphQL API client.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use wandb_client::{Credential, WandbClient};
///
/// let client = WandbClient::builder().build()?;
/// let credential = Credential::new("0123456789abcdef0123456789abcdef01234567", "my-team");
/// let projects = client.fetch_projects(&credential).await?;
/// ```
#[derive(Debug, Clone)]
pub struct WandbClient {
    pub(crate) http: reqwest::Client,
    pub(crate) endpoint: String,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl WandbClient {
    /// Create a new client builder.
    pub fn builder() -> builder::WandbClientBuilder {
        builder::WandbClientBuilder::new()
    }

    /// Full URL of the GraphQL endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
