//! Nested tree views emitted as `snapshot` payloads

use super::node::{Link, NodeArena, TreeNodeId};
use serde::Serialize;

/// A node and its subtree.
///
/// `children` lists only the children that exist, left before right, and is
/// omitted for a leaf. `height` and `balance_factor` are the stored values,
/// which are only maintained in AVL mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeSnapshot {
    pub id: TreeNodeId,
    pub value: i64,
    pub height: i32,
    #[serde(rename = "balanceFactor")]
    pub balance_factor: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSnapshot>,
}

impl TreeSnapshot {
    pub(super) fn build(arena: &NodeArena, link: Link) -> Option<Self> {
        let node = &arena[link?];
        let stored = |child: Link| child.map_or(0, |index| arena[index].height);

        let children = [node.left, node.right]
            .into_iter()
            .filter_map(|child| Self::build(arena, child))
            .collect();

        Some(Self {
            id: node.id,
            value: node.value,
            height: node.height,
            balance_factor: stored(node.left) - stored(node.right),
            children,
        })
    }

    /// Number of nodes in this subtree
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeSnapshot::size).sum::<usize>()
    }
}
