//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Duration, Utc};
use uuid::Uuid;

use traq_core::entities::{Channel, ClipFolder, Message, Stamp, User};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A top-level channel with the given name
pub fn channel(name: &str) -> Channel {
    Channel::new(Uuid::new_v4(), name)
}

/// A channel under the given parent
pub fn child_channel(name: &str, parent: &Channel) -> Channel {
    Channel::new_child(Uuid::new_v4(), name, parent.id)
}

/// An archived top-level channel
pub fn archived_channel(name: &str) -> Channel {
    Channel {
        archived: true,
        ..Channel::new(Uuid::new_v4(), name)
    }
}

/// A custom stamp with the given name
pub fn stamp(name: &str) -> Stamp {
    Stamp::new(Uuid::new_v4(), name, Uuid::new_v4(), Uuid::new_v4())
}

/// An active user with a unique handle based on `name`
pub fn user(name: &str) -> User {
    let mut user = User::new(Uuid::new_v4(), name, format!("{name} (display)"));
    user.icon_file_id = Uuid::new_v4();
    user
}

/// A message posted `minutes_ago` minutes before now
pub fn message_at(author: &User, channel: &Channel, content: &str, minutes_ago: i64) -> Message {
    let at = Utc::now() - Duration::minutes(minutes_ago);
    let mut message = Message::new(Uuid::new_v4(), author.id, channel.id, content.to_string());
    message.created_at = at;
    message.updated_at = at;
    message
}

/// A clip folder owned by the given user
pub fn clip_folder(name: &str, owner: &User) -> ClipFolder {
    ClipFolder::new(Uuid::new_v4(), name, owner.id)
}
