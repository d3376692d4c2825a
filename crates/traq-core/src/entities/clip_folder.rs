//! Clip folder entity - a per-user folder of bookmarked messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Clip folder entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipFolder {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ClipFolder {
    /// Create a new clip folder
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>, owner_id: Uuid) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            owner_id,
            created_at: Utc::now(),
        }
    }
}
