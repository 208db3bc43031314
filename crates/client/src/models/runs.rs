//! Run model and run identifiers.
//!
//! The service addresses runs two ways: the opaque `id` returned by run
//! listings, and the human-readable `name` used by run lookups such as the
//! history query. The two newtypes keep them from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque run identifier as listed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub String);

/// Run name used to look a run up within a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunName(pub String);

macro_rules! string_newtype {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_newtype!(RunId);
string_newtype!(RunName);

/// A tracked run within a project.
///
/// `state` is passed through exactly as the service reported it. Use
/// [`Run::run_state`] to classify it for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub id: RunId,
    pub name: RunName,
    pub state: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Run {
    /// Classified state, for presentation.
    pub fn run_state(&self) -> RunState {
        RunState::from_raw(&self.state)
    }
}

/// Known run states. Anything unrecognised is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Running,
    Finished,
    Failed,
    Crashed,
    Other,
}

impl RunState {
    /// Classify a raw state string, ignoring case and surrounding whitespace.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "running" => Self::Running,
            "finished" => Self::Finished,
            "failed" => Self::Failed,
            "crashed" => Self::Crashed,
            _ => Self::Other,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Finished => "finished",
            Self::Failed => "failed",
            Self::Crashed => "crashed",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
