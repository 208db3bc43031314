//! Decoding of run history into metric series.
//!
//! A run's `history` is a list of per-step snapshots. Depending on the
//! service version each snapshot arrives either as a JSON-encoded string or
//! as an already decoded JSON object. Both are accepted; anything else is
//! skipped without aborting the batch.
//!
//! # Invariants
//! - Snapshot positions are counted over successfully decoded snapshots only,
//!   starting at zero. That position is the `step` of every sample taken from
//!   the snapshot.
//! - Points within a series are strictly increasing by `step`.
//! - Keys that never carried a number produce no series at all.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{MetricPoint, MetricSeries};

/// Bookkeeping keys written by the tracking library, not user metrics.
pub const RESERVED_KEYS: [&str; 3] = ["_step", "_runtime", "_timestamp"];

/// The two accepted encodings of a history snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapshotSource<'a> {
    /// A string holding a JSON object.
    EncodedString(&'a str),
    /// A JSON object delivered as-is.
    DecodedObject(&'a Map<String, Value>),
}

/// Why a history entry was skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("entry is a JSON {0}, expected a string or an object")]
    UnsupportedEntry(&'static str),

    #[error("encoded snapshot is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("encoded snapshot is a JSON {0}, expected an object")]
    NotAnObject(&'static str),
}

impl<'a> SnapshotSource<'a> {
    /// Classify a raw history entry.
    pub fn classify(entry: &'a Value) -> Result<Self, SnapshotError> {
        match entry {
            Value::String(text) => Ok(Self::EncodedString(text)),
            Value::Object(map) => Ok(Self::DecodedObject(map)),
            other => Err(SnapshotError::UnsupportedEntry(json_kind(other))),
        }
    }

    /// Normalize to a key/value map, parsing encoded snapshots.
    pub fn normalize(self) -> Result<Cow<'a, Map<String, Value>>, SnapshotError> {
        match self {
            Self::DecodedObject(map) => Ok(Cow::Borrowed(map)),
            Self::EncodedString(text) => {
                match serde_json::from_str::<Value>(text)
                    .map_err(|e| SnapshotError::InvalidJson(e.to_string()))?
                {
                    Value::Object(map) => Ok(Cow::Owned(map)),
                    other => Err(SnapshotError::NotAnObject(json_kind(&other))),
                }
            }
        }
    }
}

/// Result of decoding a history list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryDecode {
    /// One series per metric key, ordered by key name.
    pub series: Vec<MetricSeries>,
    /// Number of entries that could not be decoded.
    pub skipped: usize,
}

/// Decode a run's history entries into metric series.
pub fn decode_history(entries: &[Value]) -> HistoryDecode {
    let mut accumulated: BTreeMap<String, Vec<MetricPoint>> = BTreeMap::new();
    let mut step: u64 = 0;
    let mut skipped = 0;

    for (index, entry) in entries.iter().enumerate() {
        let snapshot = match SnapshotSource::classify(entry).and_then(SnapshotSource::normalize) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(index, error = %e, "Skipping undecodable history entry");
                skipped += 1;
                continue;
            }
        };

        for (key, value) in snapshot.iter() {
            if is_reserved(key) {
                continue;
            }
            if let Some(value) = numeric_value(value) {
                accumulated
                    .entry(key.clone())
                    .or_default()
                    .push(MetricPoint { step, value });
            }
        }

        step += 1;
    }

    debug!(
        entries = entries.len(),
        decoded = step,
        skipped,
        series = accumulated.len(),
        "Decoded run history"
    );

    HistoryDecode {
        series: accumulated
            .into_iter()
            .map(|(name, points)| MetricSeries { name, points })
            .collect(),
        skipped,
    }
}

fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// The sample value of a snapshot field, if it is numeric.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Null | Value::Bool(_) | Value::String(_) | Value::Array(_) | Value::Object(_) => {
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
