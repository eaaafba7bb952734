//! dsviz: Instrumented Data-Structure Engines
//!
//! Four independent engines (graph, balanced tree, hash table, binary heap)
//! plus a small linked list. Each one executes its algorithms step by step
//! and narrates every internal state change as an ordered stream of plain,
//! serializable notifications, so a renderer can animate exactly what
//! happened.
//!
//! # Core Concepts
//!
//! - **Engines** own their state exclusively and take `&mut self` for every
//!   operation. Nothing is shared between engines.
//! - **Events** carry a stable [`EventKind`] tag, a [`Payload`] and a message.
//! - **Signals** are single-value results (a search path, a slot index).
//! - **Sinks** receive both synchronously. [`EventLog`] buffers them until
//!   the caller drains it.
//! - **Absent ids are no-ops**: removing or traversing from a node that does
//!   not exist changes nothing and emits nothing.
//!
//! # Example
//!
//! ```
//! use dsviz::{EventKind, GraphEngine};
//!
//! let mut graph = GraphEngine::new();
//! graph.add_edge(1, 2, 5);
//! graph.add_edge(1, 3, 2);
//! assert_eq!(graph.traverse_bfs(1), vec![1, 2, 3]);
//!
//! let events = graph.drain_events();
//! assert_eq!(events.last().and_then(|n| n.kind()), Some(EventKind::Finished));
//! ```

pub mod config;
mod error;
pub mod event;
mod graph;
mod hash;
mod heap;
mod list;
pub mod logging;
pub mod script;
mod tree;

pub use config::{ConfigError, EngineConfig};
pub use error::{DsvizError, DsvizResult};
pub use event::{Event, EventKind, EventLog, EventSink, Notification, Payload, Signal};
pub use graph::{
    Adjacent, EdgeTriple, GraphEngine, GraphSnapshot, NodeId, NodeView, PathResult, Weight,
};
pub use hash::{HashSlot, HashTableEngine, HashTableError, TableView, DEFAULT_CAPACITY};
pub use heap::{BinaryHeapEngine, HeapMode};
pub use list::{LinkedListEngine, ListLayout};
pub use script::{Command, Workbench};
pub use tree::{BalancedTreeEngine, TreeNodeId, TreeSnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
