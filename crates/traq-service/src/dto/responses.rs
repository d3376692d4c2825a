//! Response DTOs handed to the presentation layer

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A message prepared for display
///
/// Everything the message row needs: resolved author, markdown-rendered
/// body, and a shareable permalink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMessage {
    pub id: Uuid,
    /// `@name` handle shown next to the display name
    pub author_handle: String,
    pub author_display_name: String,
    /// Server path of the author's icon file
    pub author_icon_path: String,
    /// Message content rewritten to markdown
    pub markdown: String,
    /// Shareable link to the message on the configured server
    pub permalink: String,
    pub created_at: DateTime<Utc>,
    pub edited: bool,
}
