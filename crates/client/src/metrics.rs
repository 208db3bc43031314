//! Metrics collection for API call performance.
//!
//! This module provides metrics collection for W&B GraphQL calls, including:
//! - Request latency histograms
//! - Request and error counters
//! - Counters for records dropped by best-effort decoding
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (see [`crate::metrics_exporter`])
//!
//! # Invariants
//! - All metrics use consistent label names: `operation`, `status`, `error_category`
//! - Metric recording is infallible
//! - Zero-cost when no metrics recorder is installed

use crate::error::TransportError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "wandb_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "wandb_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "wandb_api_errors_total";

/// Metric name for records dropped while decoding a response.
pub const METRIC_SKIPPED_RECORDS: &str = "wandb_api_skipped_records_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connection, timeout, or body read failures
    Network,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Errors reported in the GraphQL `errors` array
    GraphQL,
    /// Unparseable or incomplete payloads
    Payload,
    /// Anything else
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::GraphQL => "graphql",
            ErrorCategory::Payload => "payload",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&TransportError> for ErrorCategory {
    fn from(error: &TransportError) -> Self {
        match error {
            TransportError::NetworkFailure(_) => ErrorCategory::Network,
            TransportError::HttpStatus(status) if (400..500).contains(status) => {
                ErrorCategory::Http4xx
            }
            TransportError::HttpStatus(status) if (500..600).contains(status) => {
                ErrorCategory::Http5xx
            }
            TransportError::HttpStatus(_) => ErrorCategory::Unknown,
            TransportError::GraphQLErrors(_) => ErrorCategory::GraphQL,
            TransportError::MalformedPayload(_) => ErrorCategory::Payload,
        }
    }
}

/// Metrics collector for W&B API calls.
///
/// A lightweight wrapper around the `metrics` crate macros with consistent labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create a new, enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of a GraphQL request.
    ///
    /// `status` is None if the request failed before receiving a response.
    pub fn record_request_duration(
        &self,
        operation: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "operation" => operation.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, operation: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "operation" => operation.to_string(),
        )
        .increment(1);
    }

    /// Record a transport error.
    pub fn record_error(&self, operation: &str, error: &TransportError) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "operation" => operation.to_string(),
            "error_category" => ErrorCategory::from(error).as_str(),
        )
        .increment(1);
    }

    /// Record records dropped by best-effort decoding.
    ///
    /// # Arguments
    /// * `operation` - The fetch that dropped them (e.g., "projects")
    /// * `count` - Number of dropped records; zero is not recorded
    pub fn record_skipped(&self, operation: &str, count: usize) {
        if !self.enabled || count == 0 {
            return;
        }

        metrics::counter!(METRIC_SKIPPED_RECORDS,
            "operation" => operation.to_string(),
        )
        .increment(count as u64);
    }
}
