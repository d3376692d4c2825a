//! Stamp entity - a named reusable image usable inline in message text

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stamp entity
///
/// `name` is the lookup key for `:name:` shorthand in message text; the
/// remaining fields are display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stamp {
    pub id: Uuid,
    pub name: String,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub file_id: Uuid,
    pub is_unicode: bool,
    pub has_thumbnail: bool,
}

impl Stamp {
    /// Create a new custom (non-Unicode) stamp
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>, creator_id: Uuid, file_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            creator_id,
            created_at: now,
            updated_at: now,
            file_id,
            is_unicode: false,
            has_thumbnail: false,
        }
    }

    /// Server path of this stamp's full-size image
    #[must_use]
    pub fn image_path(&self) -> String {
        format!("/stamps/{}/image", self.id)
    }
}
