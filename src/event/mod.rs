//! Step-level notifications emitted by the engines
//!
//! Every engine narrates its internal state changes through an
//! [`EventSink`]. Two channels exist:
//!
//! - **Events** carry a discriminated [`EventKind`] tag, a plain-data
//!   [`Payload`] and a human-readable message. Consumers pattern-match on
//!   the tag, so the serialized tag strings are stable.
//! - **Signals** are single-value results with no discriminated kind
//!   (a tree probe path, a hash slot index, a list placement).
//!
//! Emission is synchronous and in-band: a notification pushed during an
//! operation is ordered before anything pushed later in the same call.

mod payload;
mod sink;

pub use payload::{
    Frontier, Payload, ProbeAnimation, ProbeStep, ProbeStepKind, Relaxation, VisitedDistance,
};
pub use sink::{EventLog, EventSink, Notification};

use serde::{Deserialize, Serialize};

/// Stable tag identifying what an [`Event`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Full structure state after a mutation
    Snapshot,
    /// Nodes currently being worked on (traversal frontier, rotation pivot)
    Highlight,
    /// Terminal marker of an algorithm run
    Finished,
    /// Edge accepted into a minimum spanning tree
    MstEdge,
    /// Node settled by Dijkstra
    VisitNode,
    /// Edge whose target distance improved
    RelaxEdge,
    /// Reconstructed shortest path
    ShortestPath,
    /// Hash insert animation: collisions followed by the final placement
    ProbeSteps,
}

impl EventKind {
    /// The wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snapshot => "snapshot",
            Self::Highlight => "highlight",
            Self::Finished => "finished",
            Self::MstEdge => "mst_edge",
            Self::VisitNode => "visit_node",
            Self::RelaxEdge => "relax_edge",
            Self::ShortestPath => "shortest_path",
            Self::ProbeSteps => "probe_steps",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discriminated notification emitted during an operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub kind: EventKind,
    pub payload: Payload,
    pub message: String,
}

impl Event {
    pub fn new(kind: EventKind, payload: Payload, message: impl Into<String>) -> Self {
        Self {
            kind,
            payload,
            message: message.into(),
        }
    }

    /// A terminal `finished` event with a null payload.
    pub fn finished(message: impl Into<String>) -> Self {
        Self::new(EventKind::Finished, Payload::Empty, message)
    }
}

/// Secondary channel for single-value results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum Signal {
    /// Tree node ids visited by a search, root first
    HighlightPath { ids: Vec<u32> },
    /// Slot index where a hash search found its key
    HighlightItem { index: usize },
    /// Layout placement of a freshly pushed list node
    ListNodePlaced {
        value: i64,
        x: i64,
        y: i64,
        count: usize,
    },
}
