//! User entity - represents a traQ user account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account state enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum UserAccountState {
    /// Deactivated account
    Deactivated = 0,
    /// Active account
    #[default]
    Active = 1,
    /// Suspended account
    Suspended = 2,
}

impl From<i16> for UserAccountState {
    fn from(value: i16) -> Self {
        match value {
            0 => Self::Deactivated,
            2 => Self::Suspended,
            _ => Self::Active, // Default for 1 and unknown values
        }
    }
}

impl From<UserAccountState> for i16 {
    fn from(state: UserAccountState) -> Self {
        state as i16
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub display_name: String,
    pub icon_file_id: Uuid,
    pub bot: bool,
    pub state: UserAccountState,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            display_name: display_name.into(),
            icon_file_id: Uuid::nil(),
            bot: false,
            state: UserAccountState::Active,
            updated_at: Utc::now(),
        }
    }

    /// The `@name` handle shown next to the display name
    #[must_use]
    pub fn handle(&self) -> String {
        format!("@{}", self.name)
    }

    /// Server path of this user's icon file
    #[must_use]
    pub fn icon_path(&self) -> String {
        format!("/files/{}", self.icon_file_id)
    }

    /// Check if the account can log in and post
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, UserAccountState::Active)
    }

    /// Check if this is a bot account
    #[inline]
    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.bot
    }
}
