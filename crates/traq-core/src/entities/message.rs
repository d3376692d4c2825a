//! Message entity - represents a chat message

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message entity
///
/// `content` is raw traQ markup; rendering it to markdown is the job of
/// [`crate::markup::MarkupRenderer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub user_id: Uuid,
    pub channel_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pinned: bool,
}

impl Message {
    /// Create a new Message
    #[must_use]
    pub fn new(id: Uuid, user_id: Uuid, channel_id: Uuid, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            channel_id,
            content,
            created_at: now,
            updated_at: now,
            pinned: false,
        }
    }

    /// Check if the message has been edited since posting
    #[inline]
    #[must_use]
    pub fn is_edited(&self) -> bool {
        self.updated_at > self.created_at
    }

    /// Check if message content is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Get a truncated preview of the message (for notifications)
    #[must_use]
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.content[..end]
        }
    }
}
