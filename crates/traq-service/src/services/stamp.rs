//! Stamp service
//!
//! Fetches the stamp listing and builds the lookup catalogue.

use tracing::{info, instrument};

use traq_core::markup::StampCatalogue;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Stamp service
pub struct StampService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StampService<'a> {
    /// Create a new StampService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch the stamp snapshot and build the name lookup table
    #[instrument(skip(self))]
    pub async fn load_catalogue(&self) -> ServiceResult<StampCatalogue> {
        let stamps = self.ctx.stamp_provider().fetch_stamps().await?;
        let catalogue = StampCatalogue::new(stamps);

        info!(stamps = catalogue.len(), "Stamp catalogue loaded");

        Ok(catalogue)
    }
}
