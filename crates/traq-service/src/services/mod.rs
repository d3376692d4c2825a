//! Client services

mod channel_tree;
mod clip;
mod context;
mod error;
mod message;
mod session;
mod stamp;

pub use channel_tree::ChannelTreeService;
pub use clip::ClipService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use session::{SessionService, SessionState};
pub use stamp::StampService;
