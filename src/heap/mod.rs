//! Array-backed binary heap switchable between min and max ordering

use crate::event::{Event, EventKind, EventLog, EventSink, Notification, Payload};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which end of the ordering sits at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeapMode {
    Min,
    #[default]
    Max,
}

impl HeapMode {
    /// Whether `child` must move above `parent`
    fn displaces(self, parent: i64, child: i64) -> bool {
        match self {
            Self::Min => child < parent,
            Self::Max => child > parent,
        }
    }
}

impl std::fmt::Display for HeapMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Min => f.write_str("min-heap"),
            Self::Max => f.write_str("max-heap"),
        }
    }
}

/// Binary heap stored as a dense array (`parent(i) = (i - 1) / 2`).
///
/// Every mutation emits a single snapshot of the final array; sifting is
/// not animated.
#[derive(Debug, Default)]
pub struct BinaryHeapEngine<S: EventSink = EventLog> {
    values: Vec<i64>,
    mode: HeapMode,
    sink: S,
}

impl BinaryHeapEngine<EventLog> {
    pub fn new(mode: HeapMode) -> Self {
        Self::with_sink(mode, EventLog::new())
    }

    pub fn drain_events(&mut self) -> Vec<Notification> {
        self.sink.drain()
    }
}

impl<S: EventSink> BinaryHeapEngine<S> {
    pub fn with_sink(mode: HeapMode, sink: S) -> Self {
        Self {
            values: Vec::new(),
            mode,
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

    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn peek(&self) -> Option<i64> {
        self.values.first().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn insert(&mut self, value: i64) {
        debug!(value, mode = %self.mode, "heap: insert");
        self.values.push(value);
        self.sift_up(self.values.len() - 1);
        self.emit_snapshot(format!("Inserted {}", value));
    }

    /// Remove and return the root. An empty heap does nothing.
    pub fn extract_root(&mut self) -> Option<i64> {
        let last = self.values.pop()?;
        let root = if self.values.is_empty() {
            last
        } else {
            let root = std::mem::replace(&mut self.values[0], last);
            self.sift_down(0);
            root
        };
        debug!(root, "heap: extract root");
        self.emit_snapshot(format!("Extracted {}", root));
        Some(root)
    }

    /// Switch ordering and re-heapify bottom-up.
    pub fn set_mode(&mut self, mode: HeapMode) {
        debug!(%mode, "heap: set mode");
        self.mode = mode;
        for index in (0..self.values.len() / 2).rev() {
            self.sift_down(index);
        }
        self.emit_snapshot(format!("Switched to {}", mode));
    }

    /// `true` selects min ordering, `false` max.
    pub fn toggle_mode(&mut self, make_min: bool) {
        self.set_mode(if make_min { HeapMode::Min } else { HeapMode::Max });
    }

    pub fn clear(&mut self) {
        debug!("heap: clear");
        self.values.clear();
        self.emit_snapshot("Heap Cleared");
    }

    /// Whether every parent-child pair satisfies the active ordering
    pub fn is_valid(&self) -> bool {
        (1..self.values.len())
            .all(|i| !self.mode.displaces(self.values[(i - 1) / 2], self.values[i]))
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.mode.displaces(self.values[parent], self.values[index]) {
                break;
            }
            self.values.swap(parent, index);
            index = parent;
        }
    }

    /// Swap downward with the more extreme child until neither child displaces.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.values.len();
        loop {
            let mut target = index;
            for child in [2 * index + 1, 2 * index + 2] {
                if child < len && self.mode.displaces(self.values[target], self.values[child]) {
                    target = child;
                }
            }
            if target == index {
                break;
            }
            self.values.swap(index, target);
            index = target;
        }
    }

    fn emit_snapshot(&mut self, message: impl Into<String>) {
        let values = self.values.clone();
        self.sink
            .emit(Event::new(EventKind::Snapshot, Payload::Heap(values), message));
    }
}
