//! Data transfer objects for the presentation layer

mod responses;

pub use responses::RenderedMessage;
