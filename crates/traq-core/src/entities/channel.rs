//! Channel entity - a named, hierarchical discussion topic

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Channel entity as delivered by the channel listing endpoint.
///
/// `children` is informational only: the server includes the ids of direct
/// children, but tree construction derives the hierarchy from `parent_id`
/// alone so that a partially consistent snapshot cannot produce a forest
/// that disagrees with the parent links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub archived: bool,
    pub force: bool,
    pub topic: String,
    pub name: String,
    pub children: Vec<Uuid>,
}

impl Channel {
    /// Create a new top-level channel
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            parent_id: None,
            archived: false,
            force: false,
            topic: String::new(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create a new channel under the given parent
    #[must_use]
    pub fn new_child(id: Uuid, name: impl Into<String>, parent_id: Uuid) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::new(id, name)
        }
    }

    /// Check if this channel sits at the top level of the hierarchy
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if the server reported any direct children
    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
