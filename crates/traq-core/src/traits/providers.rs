//! Provider traits (ports) - define the interface to the hosted service
//!
//! The domain layer defines what it needs from the outside world; the
//! surrounding application supplies the implementation (an HTTP client in
//! production, in-memory fakes in tests). Each fetch returns a snapshot as
//! of one point in time - the core never refetches or pages internally.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Channel, ClipFolder, Message, Stamp, User};
use crate::error::DomainError;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, DomainError>;

// ============================================================================
// Channel Provider
// ============================================================================

#[async_trait]
pub trait ChannelProvider: Send + Sync {
    /// Fetch the full channel listing
    ///
    /// The client passes `include_dm = false`; DM channels have no place in
    /// the public hierarchy.
    async fn fetch_channels(&self, include_dm: bool) -> ProviderResult<Vec<Channel>>;
}

// ============================================================================
// Stamp Provider
// ============================================================================

#[async_trait]
pub trait StampProvider: Send + Sync {
    /// Fetch the full stamp listing
    async fn fetch_stamps(&self) -> ProviderResult<Vec<Stamp>>;
}

// ============================================================================
// User Provider
// ============================================================================

#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Fetch the full user listing
    async fn fetch_users(&self, include_suspended: bool) -> ProviderResult<Vec<User>>;
}

// ============================================================================
// Message Provider
// ============================================================================

/// Sort order requested from the message listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageOrder {
    /// Newest first
    #[default]
    Descending,
    /// Oldest first
    Ascending,
}

/// Query options for message listing
#[derive(Debug, Clone, Default)]
pub struct MessageQuery {
    pub order: MessageOrder,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[async_trait]
pub trait MessageProvider: Send + Sync {
    /// List messages in a channel
    async fn fetch_messages(
        &self,
        channel_id: Uuid,
        query: MessageQuery,
    ) -> ProviderResult<Vec<Message>>;
}

// ============================================================================
// Clip Provider
// ============================================================================

#[async_trait]
pub trait ClipProvider: Send + Sync {
    /// List the current user's clip folders
    async fn fetch_clip_folders(&self) -> ProviderResult<Vec<ClipFolder>>;

    /// Add a message to a clip folder
    async fn clip_message(&self, folder_id: Uuid, message_id: Uuid) -> ProviderResult<()>;
}

// ============================================================================
// Session Provider
// ============================================================================

#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Authenticate with name and password
    async fn login(&self, name: &str, password: &str) -> ProviderResult<()>;

    /// Fetch the currently authenticated user, if any
    async fn current_user(&self) -> ProviderResult<Option<User>>;
}
