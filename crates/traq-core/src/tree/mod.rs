//! Channel tree - reconstructs the channel hierarchy from a flat listing

mod builder;
mod node;

pub use builder::build_channel_tree;
pub use node::ChannelTreeNode;
