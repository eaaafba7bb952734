//! BalancedTreeEngine: binary search tree with an optional AVL mode

use super::node::{Link, NodeArena, NodeIndex, TreeNode, TreeNodeId};
use super::snapshot::TreeSnapshot;
use crate::event::{Event, EventKind, EventLog, EventSink, Notification, Payload, Signal};
use tracing::debug;

const TREE_UPDATED: &str = "Tree Updated";
const REBALANCING: &str = "Rebalancing...";

/// Binary search tree over unique `i64` keys.
///
/// In plain mode it never rebalances and stored heights go stale. Switching
/// AVL on rebuilds the whole tree by re-inserting every key in order, which
/// also renumbers node ids from zero.
#[derive(Debug, Default)]
pub struct BalancedTreeEngine<S: EventSink = EventLog> {
    pub(super) arena: NodeArena,
    pub(super) root: Link,
    next_id: TreeNodeId,
    avl: bool,
    pub(super) sink: S,
}

impl BalancedTreeEngine<EventLog> {
    /// Create an empty plain BST buffering its events in an [`EventLog`].
    pub fn new() -> Self {
        Self::with_sink(EventLog::new())
    }

    pub fn drain_events(&mut self) -> Vec<Notification> {
        self.sink.drain()
    }
}

impl<S: EventSink> BalancedTreeEngine<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
            next_id: 0,
            avl: false,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn is_avl(&self) -> bool {
        self.avl
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Switch AVL mode. Turning it on (even when already on) rebuilds the
    /// tree, emitting one snapshot per re-inserted key.
    pub fn set_avl(&mut self, enabled: bool) {
        debug!(enabled, "tree: set avl");
        self.avl = enabled;
        if enabled {
            self.rebuild();
        }
    }

    /// Insert `value`. Returns `false` for a duplicate.
    ///
    /// A duplicate leaves the tree untouched but still emits the final
    /// snapshot.
    pub fn insert(&mut self, value: i64) -> bool {
        debug!(value, avl = self.avl, "tree: insert");
        let inserted = !self.contains(value);
        let root = self.insert_at(self.root, value);
        self.root = Some(root);
        self.emit_snapshot(TREE_UPDATED);
        inserted
    }

    /// Delete `value`. Returns `false` if it was absent.
    ///
    /// The final snapshot is emitted either way.
    pub fn delete(&mut self, value: i64) -> bool {
        debug!(value, avl = self.avl, "tree: delete");
        let present = self.contains(value);
        self.root = self.delete_at(self.root, value);
        self.emit_snapshot(TREE_UPDATED);
        present
    }

    /// Descend from the root looking for `value`, returning every node id
    /// visited. The path is also sent as a `highlight_path` signal. Whether
    /// the search succeeded is only visible from the last visited node.
    pub fn search(&mut self, value: i64) -> Vec<TreeNodeId> {
        let mut path = Vec::new();
        let mut current = self.root;
        while let Some(index) = current {
            let node = &self.arena[index];
            path.push(node.id);
            current = if value == node.value {
                None
            } else if value < node.value {
                node.left
            } else {
                node.right
            };
        }
        debug!(value, hops = path.len(), "tree: search");

        self.sink.signal(Signal::HighlightPath { ids: path.clone() });
        path
    }

    /// Drop every node and reset the id allocator. The mode is kept.
    pub fn clear(&mut self) {
        debug!("tree: clear");
        self.arena.clear();
        self.root = None;
        self.next_id = 0;
        self.emit_snapshot(TREE_UPDATED);
    }

    pub fn contains(&self, value: i64) -> bool {
        self.find(value).is_some()
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.arena.len());
        let mut stack: Vec<NodeIndex> = Vec::new();
        let mut current = self.root;
        while current.is_some() || !stack.is_empty() {
            while let Some(index) = current {
                stack.push(index);
                current = self.arena[index].left;
            }
            if let Some(index) = stack.pop() {
                values.push(self.arena[index].value);
                current = self.arena[index].right;
            }
        }
        values
    }

    /// Nested view of the whole tree, `None` when empty.
    pub fn snapshot(&self) -> Option<TreeSnapshot> {
        TreeSnapshot::build(&self.arena, self.root)
    }

    fn find(&self, value: i64) -> Option<NodeIndex> {
        let mut current = self.root;
        while let Some(index) = current {
            let node = &self.arena[index];
            if value == node.value {
                return Some(index);
            }
            current = if value < node.value { node.left } else { node.right };
        }
        None
    }

    fn rebuild(&mut self) {
        let values = self.in_order();
        self.arena.clear();
        self.root = None;
        self.next_id = 0;

        for value in values {
            let root = self.insert_at(self.root, value);
            self.root = Some(root);
            self.emit_snapshot(TREE_UPDATED);
        }
    }

    fn insert_at(&mut self, link: Link, value: i64) -> NodeIndex {
        let Some(index) = link else {
            let id = self.next_id;
            self.next_id += 1;
            return self.arena.alloc(TreeNode::leaf(id, value));
        };

        let key = self.arena[index].value;
        if value < key {
            let left = self.insert_at(self.arena[index].left, value);
            self.arena[index].left = Some(left);
            self.rebalancing_snapshot();
        } else if value > key {
            let right = self.insert_at(self.arena[index].right, value);
            self.arena[index].right = Some(right);
            self.rebalancing_snapshot();
        } else {
            return index;
        }

        if !self.avl {
            return index;
        }

        self.update_height(index);
        let balance = self.balance(Some(index));
        let left = self.arena[index].left;
        let right = self.arena[index].right;
        let left_key = left.map(|l| self.arena[l].value);
        let right_key = right.map(|r| self.arena[r].value);

        match (left_key, right_key) {
            // left-left
            (Some(lk), _) if balance > 1 && value < lk => self.right_rotate(index),
            // right-right
            (_, Some(rk)) if balance < -1 && value > rk => self.left_rotate(index),
            // left-right
            (Some(lk), _) if balance > 1 && value > lk => {
                if let Some(l) = left {
                    let pivot = self.left_rotate(l);
                    self.arena[index].left = Some(pivot);
                }
                self.right_rotate(index)
            }
            // right-left
            (_, Some(rk)) if balance < -1 && value < rk => {
                if let Some(r) = right {
                    let pivot = self.right_rotate(r);
                    self.arena[index].right = Some(pivot);
                }
                self.left_rotate(index)
            }
            _ => index,
        }
    }

    fn delete_at(&mut self, link: Link, value: i64) -> Link {
        let index = link?;

        let key = self.arena[index].value;
        if value < key {
            let left = self.delete_at(self.arena[index].left, value);
            self.arena[index].left = left;
            self.rebalancing_snapshot();
        } else if value > key {
            let right = self.delete_at(self.arena[index].right, value);
            self.arena[index].right = right;
            self.rebalancing_snapshot();
        } else {
            let node = &self.arena[index];
            match (node.left, node.right) {
                (None, only) | (only, None) => {
                    self.arena.free(index);
                    return only;
                }
                (Some(_), Some(right)) => {
                    // Two children: take the in-order successor's key, keep this node's id
                    let successor = self.min_value(right);
                    self.arena[index].value = successor;
                    let right = self.delete_at(Some(right), successor);
                    self.arena[index].right = right;
                    self.rebalancing_snapshot();
                }
            }
        }

        if !self.avl {
            return Some(index);
        }

        self.update_height(index);
        let balance = self.balance(Some(index));
        let left = self.arena[index].left;
        let right = self.arena[index].right;

        let rebalanced = if balance > 1 && self.balance(left) >= 0 {
            self.right_rotate(index)
        } else if balance > 1 {
            if let Some(l) = left {
                let pivot = self.left_rotate(l);
                self.arena[index].left = Some(pivot);
            }
            self.right_rotate(index)
        } else if balance < -1 && self.balance(right) <= 0 {
            self.left_rotate(index)
        } else if balance < -1 {
            if let Some(r) = right {
                let pivot = self.right_rotate(r);
                self.arena[index].right = Some(pivot);
            }
            self.left_rotate(index)
        } else {
            index
        };
        Some(rebalanced)
    }

    fn min_value(&self, mut index: NodeIndex) -> i64 {
        while let Some(left) = self.arena[index].left {
            index = left;
        }
        self.arena[index].value
    }

    fn rebalancing_snapshot(&mut self) {
        if self.avl {
            self.emit_snapshot(REBALANCING);
        }
    }

    fn emit_snapshot(&mut self, message: &str) {
        let snapshot = self.snapshot();
        self.sink
            .emit(Event::new(EventKind::Snapshot, Payload::Tree(snapshot), message));
    }
}
