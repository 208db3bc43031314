//! Client builder for constructing [`WandbClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL and deriving the GraphQL endpoint from it
//! - Configuring the underlying HTTP client (timeout, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`WandbClient`] methods)
//! - Credentials (passed per call, never stored on the client)
//!
//! # Invariants
//! - The base URL is always normalized to have no trailing slashes
//! - The endpoint is always `<base_url>/graphql`

use std::time::Duration;

use crate::client::WandbClient;
use crate::error::BuildError;
use crate::metrics::MetricsCollector;
use wandb_config::{
    Config,
    constants::{DEFAULT_BASE_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, GRAPHQL_PATH},
};

/// Builder for creating a new [`WandbClient`].
///
/// Every option has a default, so `WandbClient::builder().build()` yields a
/// client for the hosted service.
///
/// # Example
///
/// ```rust,ignore
/// use wandb_client::WandbClient;
///
/// let client = WandbClient::builder()
///     .base_url("https://wandb.internal.example.com".to_string())
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct WandbClientBuilder {
    base_url: String,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for WandbClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl WandbClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the W&B API server.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the metrics collector for API call performance tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Take connection settings from a loaded configuration.
    ///
    /// The credential in `config` is not captured; build one with
    /// [`crate::Credential::from_config`] and pass it per call.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.connection.base_url.clone();
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// # Examples
    ///
    /// - `"https://api.wandb.ai/"` -> `"https://api.wandb.ai"`
    /// - `"https://api.wandb.ai"` -> `"https://api.wandb.ai"`
    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`WandbClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidUrl`] if the base URL does not parse.
    /// Returns [`BuildError::Http`] if the HTTP client fails to build.
    pub fn build(self) -> Result<WandbClient, BuildError> {
        let base_url = Self::normalize_base_url(&self.base_url);
        let endpoint = format!("{base_url}{GRAPHQL_PATH}");

        reqwest::Url::parse(&endpoint).map_err(|e| BuildError::InvalidUrl {
            url: base_url.clone(),
            message: e.to_string(),
        })?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(WandbClient {
            http,
            endpoint,
            metrics: self.metrics,
        })
    }
}
