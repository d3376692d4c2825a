//! Message markup - rewrites raw message text into renderable markdown

mod catalogue;
mod renderer;

pub use catalogue::StampCatalogue;
pub use renderer::MarkupRenderer;
