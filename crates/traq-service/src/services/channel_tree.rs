//! Channel tree service
//!
//! Fetches the channel listing and reconstructs the navigable hierarchy.

use tracing::{info, instrument};
use uuid::Uuid;

use traq_core::tree::{build_channel_tree, ChannelTreeNode};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Channel tree service
pub struct ChannelTreeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChannelTreeService<'a> {
    /// Create a new ChannelTreeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch the channel listing and build the top-level forest
    ///
    /// DM channels are excluded from the fetch; archived channels and
    /// orphans disappear during construction.
    #[instrument(skip(self))]
    pub async fn load_forest(&self) -> ServiceResult<Vec<ChannelTreeNode>> {
        let channels = self.ctx.channel_provider().fetch_channels(false).await?;
        let forest = build_channel_tree(&channels, None)?;

        info!(
            fetched = channels.len(),
            roots = forest.len(),
            "Channel tree built"
        );

        Ok(forest)
    }

    /// Fetch the channel listing and build the forest under `root_id`
    #[instrument(skip(self))]
    pub async fn load_subtree(&self, root_id: Uuid) -> ServiceResult<Vec<ChannelTreeNode>> {
        let channels = self.ctx.channel_provider().fetch_channels(false).await?;
        let forest = build_channel_tree(&channels, Some(root_id))?;
        Ok(forest)
    }

    /// Render a tree path as a screen title: `/general/dev` becomes
    /// `#general/dev`
    #[must_use]
    pub fn channel_title(path: &str) -> String {
        path.replacen('/', "#", 1)
    }
}
