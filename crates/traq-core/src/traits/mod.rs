//! Provider traits (ports) for the surrounding application

mod providers;

pub use providers::{
    ChannelProvider, ClipProvider, MessageOrder, MessageProvider, MessageQuery, ProviderResult,
    SessionProvider, StampProvider, UserProvider,
};
