//! Channel tree construction from a flat channel listing

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use uuid::Uuid;

use crate::entities::Channel;
use crate::error::DomainError;

use super::node::ChannelTreeNode;

/// Build the channel forest reachable from `root_id` out of a flat listing.
///
/// `root_id = None` produces the top-level forest. Archived channels are
/// excluded before building, so the entire subtree under an archived channel
/// disappears; a non-archived channel whose parent was filtered out (or was
/// never in the snapshot) becomes an orphan and is silently dropped. Siblings
/// are ordered by case-insensitive name.
///
/// Each node's `path` is its ancestor names and own name joined by `/`,
/// starting from an empty prefix at the root boundary - a child `dev` under a
/// top-level `general` gets the path `/general/dev`. With an explicit
/// `root_id`, paths are relative to that root in the same way.
///
/// # Errors
///
/// Returns [`DomainError::MalformedHierarchy`] if the parent links reachable
/// from `root_id` contain a cycle. A cycle not reachable from the root is
/// indistinguishable from a group of orphans and is dropped silently.
pub fn build_channel_tree(
    channels: &[Channel],
    root_id: Option<Uuid>,
) -> Result<Vec<ChannelTreeNode>, DomainError> {
    let mut visible: Vec<Arc<Channel>> = channels
        .iter()
        .filter(|channel| !channel.archived)
        .cloned()
        .map(Arc::new)
        .collect();

    // Case-insensitive sort makes sibling order deterministic; the grouping
    // below preserves it per parent.
    visible.sort_by_key(|channel| channel.name.to_lowercase());

    let mut by_parent: HashMap<Option<Uuid>, Vec<Arc<Channel>>> = HashMap::new();
    for channel in visible {
        by_parent.entry(channel.parent_id).or_default().push(channel);
    }

    let mut ancestors = HashSet::new();
    build_subtrees(&by_parent, root_id, "", &mut ancestors)
}

/// Recursively materialize the subtrees under `parent_id`.
///
/// `ancestors` holds the ids on the current descent path; revisiting one
/// means the listing's parent links loop back on themselves.
fn build_subtrees(
    by_parent: &HashMap<Option<Uuid>, Vec<Arc<Channel>>>,
    parent_id: Option<Uuid>,
    parent_path: &str,
    ancestors: &mut HashSet<Uuid>,
) -> Result<Vec<ChannelTreeNode>, DomainError> {
    let Some(children) = by_parent.get(&parent_id) else {
        return Ok(Vec::new());
    };

    let mut nodes = Vec::with_capacity(children.len());
    for channel in children {
        if !ancestors.insert(channel.id) {
            return Err(DomainError::MalformedHierarchy {
                channel_id: channel.id,
            });
        }

        let path = format!("{parent_path}/{}", channel.name);
        let subtree = build_subtrees(by_parent, Some(channel.id), &path, ancestors)?;
        ancestors.remove(&channel.id);

        nodes.push(ChannelTreeNode {
            channel: Arc::clone(channel),
            path,
            children: subtree,
        });
    }

    Ok(nodes)
}
