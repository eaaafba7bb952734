//! HashTableEngine: fixed-capacity open addressing with linear probing

use super::slot::{HashSlot, TableView};
use crate::event::{
    Event, EventKind, EventLog, EventSink, Notification, Payload, ProbeAnimation, ProbeStep,
    ProbeStepKind, Signal,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Capacity used when nothing else is configured
pub const DEFAULT_CAPACITY: usize = 20;

/// Why a hash table operation was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashTableError {
    #[error("key {0} is already in the table")]
    Duplicate(i64),

    #[error("table is full (capacity {capacity})")]
    TableFull { capacity: usize },

    #[error("capacity must be at least 1")]
    ZeroCapacity,
}

/// Open-addressing table whose slot count never changes.
///
/// A key's home slot is `key mod capacity` (Euclidean, so negative keys
/// land in range). Removal leaves a tombstone so keys placed past it stay
/// reachable.
#[derive(Debug)]
pub struct HashTableEngine<S: EventSink = EventLog> {
    slots: Vec<HashSlot>,
    sink: S,
}

impl HashTableEngine<EventLog> {
    /// Create a table of `capacity` empty slots. Emits the initial snapshot.
    pub fn new(capacity: usize) -> Result<Self, HashTableError> {
        Self::with_sink(capacity, EventLog::new())
    }

    pub fn drain_events(&mut self) -> Vec<Notification> {
        self.sink.drain()
    }
}

impl<S: EventSink> HashTableEngine<S> {
    pub fn with_sink(capacity: usize, sink: S) -> Result<Self, HashTableError> {
        if capacity == 0 {
            return Err(HashTableError::ZeroCapacity);
        }
        debug!(capacity, "hash: init");
        let mut engine = Self {
            slots: vec![HashSlot::Empty; capacity],
            sink,
        };
        engine.emit_snapshot("Table Initialized");
        Ok(engine)
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

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.key().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn slots(&self) -> &[HashSlot] {
        &self.slots
    }

    pub fn view(&self) -> TableView {
        TableView {
            table: self.slots.clone(),
            size: self.slots.len(),
        }
    }

    /// Insert `key`, returning the slot it landed in.
    ///
    /// Probing stops at the first empty or tombstoned slot. Every occupied
    /// slot passed on the way is recorded as a collision step; the emitted
    /// `probe_steps` event lists those steps followed by the placement.
    /// Nothing is emitted when the key is a duplicate or the table is full.
    pub fn insert(&mut self, key: i64) -> Result<usize, HashTableError> {
        if self.locate(key).is_some() {
            warn!(key, "hash: duplicate insert rejected");
            return Err(HashTableError::Duplicate(key));
        }

        let capacity = self.capacity();
        let home = self.home(key);
        let mut index = home;
        let mut steps = Vec::new();

        while let HashSlot::Occupied(_) = self.slots[index] {
            steps.push(ProbeStep {
                index,
                kind: ProbeStepKind::Collision,
                existing: Some(self.slots[index]),
            });
            index = (index + 1) % capacity;
            if index == home {
                warn!(key, capacity, "hash: table full");
                return Err(HashTableError::TableFull { capacity });
            }
        }

        steps.push(ProbeStep {
            index,
            kind: ProbeStepKind::Insert,
            existing: None,
        });
        self.slots[index] = HashSlot::Occupied(key);
        debug!(key, index, collisions = steps.len() - 1, "hash: insert");

        let animation = ProbeAnimation {
            table: self.view(),
            steps,
        };
        self.sink.emit(Event::new(
            EventKind::ProbeSteps,
            Payload::Probe(animation),
            format!("Inserted {} at {}", key, index),
        ));
        Ok(index)
    }

    /// Replace `key` with a tombstone. Returns `false` if it was absent.
    pub fn remove(&mut self, key: i64) -> bool {
        let Some(index) = self.locate(key) else {
            return false;
        };
        debug!(key, index, "hash: remove");
        self.slots[index] = HashSlot::Deleted;
        self.emit_snapshot(format!("Removed {}", key));
        true
    }

    /// Find the slot holding `key`. A hit is also sent as a `highlight_item`
    /// signal; a miss emits nothing.
    pub fn search(&mut self, key: i64) -> Option<usize> {
        let index = self.locate(key)?;
        self.sink.signal(Signal::HighlightItem { index });
        Some(index)
    }

    /// Reset every slot to empty, keeping the capacity.
    pub fn clear(&mut self) {
        debug!("hash: clear");
        self.slots.fill(HashSlot::Empty);
        self.emit_snapshot("Table Cleared");
    }

    fn home(&self, key: i64) -> usize {
        // capacity fits in i64 for any table that can be allocated
        key.rem_euclid(self.slots.len() as i64) as usize
    }

    /// Probe from the home slot past tombstones until an empty slot, a
    /// match, or a full wrap.
    fn locate(&self, key: i64) -> Option<usize> {
        let capacity = self.capacity();
        let home = self.home(key);
        let mut index = home;
        while !self.slots[index].is_empty() {
            if self.slots[index] == HashSlot::Occupied(key) {
                return Some(index);
            }
            index = (index + 1) % capacity;
            if index == home {
                break;
            }
        }
        None
    }

    fn emit_snapshot(&mut self, message: impl Into<String>) {
        let view = self.view();
        self.sink
            .emit(Event::new(EventKind::Snapshot, Payload::Table(view), message));
    }
}
