//! Singly linked list that reports where each new node is drawn

use crate::event::{EventLog, EventSink, Notification, Signal};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Horizontal row layout for list placements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListLayout {
    pub origin_x: i64,
    pub spacing: i64,
    pub row_y: i64,
}

impl Default for ListLayout {
    fn default() -> Self {
        Self {
            origin_x: 100,
            spacing: 120,
            row_y: 150,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ListNode {
    value: i64,
    next: Option<usize>,
}

/// Prepend-only singly linked list over an index arena.
///
/// Placement follows push order, not list order: the n-th push is drawn at
/// column n even though it becomes the new head.
#[derive(Debug, Default)]
pub struct LinkedListEngine<S: EventSink = EventLog> {
    nodes: Vec<ListNode>,
    head: Option<usize>,
    layout: ListLayout,
    sink: S,
}

impl LinkedListEngine<EventLog> {
    pub fn new(layout: ListLayout) -> Self {
        Self::with_sink(layout, EventLog::new())
    }

    pub fn drain_events(&mut self) -> Vec<Notification> {
        self.sink.drain()
    }
}

impl<S: EventSink> LinkedListEngine<S> {
    pub fn with_sink(layout: ListLayout, sink: S) -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            layout,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Make `value` the new head and signal its placement.
    pub fn push_front(&mut self, value: i64) {
        let column = self.nodes.len();
        self.nodes.push(ListNode {
            value,
            next: self.head,
        });
        self.head = Some(column);

        let count = self.nodes.len();
        let x = self.layout.origin_x + column as i64 * self.layout.spacing;
        debug!(value, count, "list: push front");
        self.sink.signal(Signal::ListNodePlaced {
            value,
            x,
            y: self.layout.row_y,
            count,
        });
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Values from head to tail.
    pub fn values(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.nodes.len());
        let mut current = self.head;
        while let Some(index) = current {
            let node = self.nodes[index];
            values.push(node.value);
            current = node.next;
        }
        values
    }

    /// Drop every node and restart placement at the first column.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_front_prepends() {
        let mut list = LinkedListEngine::new(ListLayout::default());
        for value in [1, 2, 3] {
            list.push_front(value);
        }
        assert_eq!(list.values(), vec![3, 2, 1]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn placements_advance_by_spacing() {
        let mut list = LinkedListEngine::new(ListLayout::default());
        list.push_front(7);
        list.push_front(8);

        let signals: Vec<_> = list.drain_events();
        assert_eq!(
            signals,
            vec![
                Notification::Signal(Signal::ListNodePlaced { value: 7, x: 100, y: 150, count: 1 }),
                Notification::Signal(Signal::ListNodePlaced { value: 8, x: 220, y: 150, count: 2 }),
            ]
        );
    }

    #[test]
    fn clear_restarts_layout() {
        let layout = ListLayout {
            origin_x: 0,
            spacing: 10,
            row_y: 5,
        };
        let mut list = LinkedListEngine::new(layout);
        list.push_front(1);
        list.clear();
        list.drain_events();

        list.push_front(2);
        assert_eq!(
            list.drain_events(),
            vec![Notification::Signal(Signal::ListNodePlaced { value: 2, x: 0, y: 5, count: 1 })]
        );
        assert!(!list.is_empty());
    }
}
