//! Height bookkeeping and single rotations
//!
//! Each rotation touches only the pivot, its child and the child's inner
//! subtree, then recomputes the two affected heights.

use super::engine::BalancedTreeEngine;
use super::node::{Link, NodeIndex};
use crate::event::{Event, EventKind, EventSink, Payload};

impl<S: EventSink> BalancedTreeEngine<S> {
    pub(super) fn height(&self, link: Link) -> i32 {
        link.map_or(0, |index| self.arena[index].height)
    }

    /// `height(left) - height(right)` from stored heights
    pub(super) fn balance(&self, link: Link) -> i32 {
        match link {
            Some(index) => {
                let node = &self.arena[index];
                self.height(node.left) - self.height(node.right)
            }
            None => 0,
        }
    }

    pub(super) fn update_height(&mut self, index: NodeIndex) {
        let node = &self.arena[index];
        let height = 1 + self.height(node.left).max(self.height(node.right));
        self.arena[index].height = height;
    }

    /// Rotate `y` right around its left child and return the new subtree root.
    pub(super) fn right_rotate(&mut self, y: NodeIndex) -> NodeIndex {
        let Some(x) = self.arena[y].left else {
            return y;
        };
        self.highlight_pivot(y, x, "Right Rotating...");

        let inner = self.arena[x].right;
        self.arena[x].right = Some(y);
        self.arena[y].left = inner;

        self.update_height(y);
        self.update_height(x);
        x
    }

    /// Rotate `x` left around its right child and return the new subtree root.
    pub(super) fn left_rotate(&mut self, x: NodeIndex) -> NodeIndex {
        let Some(y) = self.arena[x].right else {
            return x;
        };
        self.highlight_pivot(x, y, "Left Rotating...");

        let inner = self.arena[y].left;
        self.arena[y].left = Some(x);
        self.arena[x].right = inner;

        self.update_height(x);
        self.update_height(y);
        y
    }

    fn highlight_pivot(&mut self, pivot: NodeIndex, child: NodeIndex, message: &str) {
        let ids = vec![self.arena[pivot].id, self.arena[child].id];
        self.sink
            .emit(Event::new(EventKind::Highlight, Payload::NodeIds(ids), message));
    }
}
