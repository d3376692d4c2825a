//! Domain entities - records delivered by the traQ API

mod channel;
mod clip_folder;
mod message;
mod stamp;
mod user;

pub use channel::Channel;
pub use clip_folder::ClipFolder;
pub use message::Message;
pub use stamp::Stamp;
pub use user::{User, UserAccountState};
