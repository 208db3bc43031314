//! Project model.

use serde::{Deserialize, Serialize};

/// A project visible to the credential's viewer.
///
/// `entity` may differ from the caller's own entity when an organization
/// shares the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub entity: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
