//! Message service
//!
//! Fetches a channel's messages, joins authors, and renders markup.

use std::collections::HashMap;

use tracing::instrument;
use uuid::Uuid;

use traq_core::entities::{Message, User};
use traq_core::traits::{MessageOrder, MessageQuery};
use traq_core::DomainError;

use crate::dto::RenderedMessage;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::stamp::StampService;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch a channel's messages, oldest first
    ///
    /// The endpoint is queried newest-first (its cheapest order for a chat
    /// pane) and the snapshot re-sorted ascending for display.
    #[instrument(skip(self))]
    pub async fn channel_messages(&self, channel_id: Uuid) -> ServiceResult<Vec<Message>> {
        let query = MessageQuery {
            order: MessageOrder::Descending,
            ..MessageQuery::default()
        };
        let mut messages = self
            .ctx
            .message_provider()
            .fetch_messages(channel_id, query)
            .await?;

        messages.sort_by_key(|message| message.created_at);

        Ok(messages)
    }

    /// Fetch a channel's messages and prepare them for display: author
    /// resolved, content rendered to markdown, permalink attached
    #[instrument(skip(self))]
    pub async fn rendered_messages(&self, channel_id: Uuid) -> ServiceResult<Vec<RenderedMessage>> {
        let messages = self.channel_messages(channel_id).await?;
        let users = self.ctx.user_provider().fetch_users(true).await?;
        let users_by_id: HashMap<Uuid, &User> =
            users.iter().map(|user| (user.id, user)).collect();
        let stamps = StampService::new(self.ctx).load_catalogue().await?;

        messages
            .iter()
            .map(|message| {
                let author = users_by_id
                    .get(&message.user_id)
                    .ok_or(DomainError::UserNotFound(message.user_id))?;

                Ok(RenderedMessage {
                    id: message.id,
                    author_handle: author.handle(),
                    author_display_name: author.display_name.clone(),
                    author_icon_path: author.icon_path(),
                    markdown: self.ctx.renderer().render(&message.content, &stamps),
                    permalink: self.permalink(message.id),
                    created_at: message.created_at,
                    edited: message.is_edited(),
                })
            })
            .collect()
    }

    /// Shareable link to a single message on the configured server
    #[must_use]
    pub fn permalink(&self, message_id: Uuid) -> String {
        format!("{}/messages/{message_id}", self.ctx.server_prefix())
    }
}
