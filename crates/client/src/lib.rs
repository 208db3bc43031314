//! W&B GraphQL API client.
//!
//! This crate authenticates against the W&B GraphQL API and fetches the
//! resource hierarchy projects → runs → metric series, reconstructing
//! numeric time series from a run's loosely typed history payload.
//!
//! Credentials are passed to every call; a [`WandbClient`] holds only
//! connection settings and can be shared freely across tasks.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod history;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod tracing;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{Credential, build_auth_header};
pub use client::WandbClient;
pub use client::builder::WandbClientBuilder;
pub use error::{AuthError, BuildError, FetchError, Result, TransportError};
pub use history::{HistoryDecode, SnapshotSource, decode_history};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{MetricPoint, MetricSeries, Project, Run, RunId, RunName, RunState};
