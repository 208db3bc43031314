//! Domain records built from W&B GraphQL responses.
//!
//! All records are immutable values constructed once per fetch response.

pub mod metrics;
pub mod projects;
pub mod runs;

pub use metrics::{MetricPoint, MetricSeries};
pub use projects::Project;
pub use runs::{Run, RunId, RunName, RunState};
