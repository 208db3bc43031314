//! Metric series reconstructed from run history.

use serde::{Deserialize, Serialize};

/// One sample of a metric.
///
/// `step` is the position of the history snapshot the sample came from,
/// not a step number reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub step: u64,
    pub value: f64,
}

/// All numeric samples of one metric key, in history order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub name: String,
    pub points: Vec<MetricPoint>,
}

impl MetricSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent sample.
    pub fn latest(&self) -> Option<MetricPoint> {
        self.points.last().copied()
    }

    /// Smallest value in the series.
    pub fn min(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::min)
    }

    /// Largest value in the series.
    pub fn max(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }
}
