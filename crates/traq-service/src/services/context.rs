//! Service context - dependency container for services
//!
//! Holds the provider ports and the configured server identity. This is the
//! explicit replacement for ambient shared state: every service receives the
//! context from its caller, and nothing in the workspace reaches for a
//! global.

use std::sync::Arc;

use url::Url;

use traq_core::markup::MarkupRenderer;
use traq_core::traits::{
    ChannelProvider, ClipProvider, MessageProvider, SessionProvider, StampProvider, UserProvider,
};

/// Service context containing all dependencies
///
/// Cloning is cheap; the providers and renderer are shared behind `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    server_base: Url,
    renderer: Arc<MarkupRenderer>,

    // Provider ports
    channel_provider: Arc<dyn ChannelProvider>,
    stamp_provider: Arc<dyn StampProvider>,
    user_provider: Arc<dyn UserProvider>,
    message_provider: Arc<dyn MessageProvider>,
    clip_provider: Arc<dyn ClipProvider>,
    session_provider: Arc<dyn SessionProvider>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        server_base: Url,
        channel_provider: Arc<dyn ChannelProvider>,
        stamp_provider: Arc<dyn StampProvider>,
        user_provider: Arc<dyn UserProvider>,
        message_provider: Arc<dyn MessageProvider>,
        clip_provider: Arc<dyn ClipProvider>,
        session_provider: Arc<dyn SessionProvider>,
    ) -> Self {
        let renderer = Arc::new(MarkupRenderer::new(server_base.clone()));
        Self {
            server_base,
            renderer,
            channel_provider,
            stamp_provider,
            user_provider,
            message_provider,
            clip_provider,
            session_provider,
        }
    }

    /// The configured server base URL
    #[must_use]
    pub fn server_base(&self) -> &Url {
        &self.server_base
    }

    /// The configured server base as a prefix for path concatenation
    #[must_use]
    pub fn server_prefix(&self) -> &str {
        self.server_base.as_str().trim_end_matches('/')
    }

    /// The markup renderer bound to the configured server
    #[must_use]
    pub fn renderer(&self) -> &MarkupRenderer {
        &self.renderer
    }

    pub fn channel_provider(&self) -> &dyn ChannelProvider {
        self.channel_provider.as_ref()
    }

    pub fn stamp_provider(&self) -> &dyn StampProvider {
        self.stamp_provider.as_ref()
    }

    pub fn user_provider(&self) -> &dyn UserProvider {
        self.user_provider.as_ref()
    }

    pub fn message_provider(&self) -> &dyn MessageProvider {
        self.message_provider.as_ref()
    }

    pub fn clip_provider(&self) -> &dyn ClipProvider {
        self.clip_provider.as_ref()
    }

    pub fn session_provider(&self) -> &dyn SessionProvider {
        self.session_provider.as_ref()
    }
}
