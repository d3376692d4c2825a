//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Channel not found: {0}")]
    ChannelNotFound(Uuid),

    #[error("Message not found: {0}")]
    MessageNotFound(Uuid),

    #[error("Clip folder not found: {0}")]
    ClipFolderNotFound(Uuid),

    // =========================================================================
    // Hierarchy Errors
    // =========================================================================
    #[error("Channel hierarchy contains a cycle through {channel_id}")]
    MalformedHierarchy { channel_id: Uuid },

    // =========================================================================
    // Session Errors
    // =========================================================================
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // =========================================================================
    // Provider Errors (wrapped)
    // =========================================================================
    #[error("Provider error: {0}")]
    ProviderError(String),
}

impl DomainError {
    /// Get an error code string for logs and UI surfaces
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ChannelNotFound(_) => "UNKNOWN_CHANNEL",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::ClipFolderNotFound(_) => "UNKNOWN_CLIP_FOLDER",
            Self::MalformedHierarchy { .. } => "MALFORMED_HIERARCHY",
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::ProviderError(_) => "PROVIDER_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ChannelNotFound(_)
                | Self::MessageNotFound(_)
                | Self::ClipFolderNotFound(_)
        )
    }

    /// Check if this is an authentication error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::NotAuthenticated | Self::InvalidCredentials)
    }
}
