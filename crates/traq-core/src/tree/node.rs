//! Channel tree node - one channel plus its materialized path and subtree

use std::sync::Arc;

use crate::entities::Channel;

/// A node of the reconstructed channel forest.
///
/// The forest exclusively owns its nodes and nodes hold no parent
/// back-pointers, so reference cycles are impossible by construction. Each
/// snapshot is built once by [`super::build_channel_tree`] and never mutated;
/// the next fetch replaces the forest wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelTreeNode {
    /// Shared, read-only handle to the source record
    pub channel: Arc<Channel>,
    /// Ancestor names and own name joined by `/`, e.g. `/general/dev`
    pub path: String,
    /// Direct children in sibling order; empty for leaves
    pub children: Vec<ChannelTreeNode>,
}

impl ChannelTreeNode {
    /// The channel's own name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.channel.name
    }

    /// Check if this node has no children
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this node
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ChannelTreeNode::subtree_len)
            .sum::<usize>()
    }

    /// Depth-first search for a node by its materialized path
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<&ChannelTreeNode> {
        if self.path == path {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_path(path))
    }
}
