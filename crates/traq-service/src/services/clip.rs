//! Clip service
//!
//! Resolves the user's default clip folder and bookmarks messages into it.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use traq_core::entities::ClipFolder;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Clip service
pub struct ClipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClipService<'a> {
    /// Create a new ClipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The folder clips land in: the first folder of the user's listing
    #[instrument(skip(self))]
    pub async fn default_folder(&self) -> ServiceResult<Option<ClipFolder>> {
        let folders = self.ctx.clip_provider().fetch_clip_folders().await?;
        Ok(folders.into_iter().next())
    }

    /// Clip a message into the default folder
    ///
    /// Returns the folder the message was clipped into.
    #[instrument(skip(self))]
    pub async fn clip_message(&self, message_id: Uuid) -> ServiceResult<Uuid> {
        let Some(folder) = self.default_folder().await? else {
            warn!("No clip folder available");
            return Err(ServiceError::not_found("ClipFolder", "default"));
        };

        self.ctx
            .clip_provider()
            .clip_message(folder.id, message_id)
            .await?;

        info!(folder_id = %folder.id, message_id = %message_id, "Message clipped");

        Ok(folder.id)
    }
}
