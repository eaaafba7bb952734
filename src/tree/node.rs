//! Tree nodes and the arena that owns them
//!
//! Child links are arena indices. Freed slots go on a free list and are
//! reused by later allocations; the public node id is separate and comes
//! from the engine's monotonic allocator.

/// Public identifier of a tree node, as seen in payloads
pub type TreeNodeId = u32;

/// Position of a node inside a [`NodeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIndex(usize);

/// A possibly empty subtree
pub type Link = Option<NodeIndex>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: TreeNodeId,
    pub value: i64,
    pub left: Link,
    pub right: Link,
    /// Only kept current while AVL mode is on
    pub height: i32,
}

impl TreeNode {
    pub fn leaf(id: TreeNodeId, value: i64) -> Self {
        Self {
            id,
            value,
            left: None,
            right: None,
            height: 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    slots: Vec<TreeNode>,
    free: Vec<NodeIndex>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, node: TreeNode) -> NodeIndex {
        match self.free.pop() {
            Some(index) => {
                self.slots[index.0] = node;
                index
            }
            None => {
                self.slots.push(node);
                NodeIndex(self.slots.len() - 1)
            }
        }
    }

    /// Return a slot to the free list. The caller must already have unlinked it.
    pub fn free(&mut self, index: NodeIndex) {
        debug_assert!(!self.free.contains(&index));
        self.free.push(index);
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl std::ops::Index<NodeIndex> for NodeArena {
    type Output = TreeNode;

    fn index(&self, index: NodeIndex) -> &TreeNode {
        &self.slots[index.0]
    }
}

impl std::ops::IndexMut<NodeIndex> for NodeArena {
    fn index_mut(&mut self, index: NodeIndex) -> &mut TreeNode {
        &mut self.slots[index.0]
    }
}
