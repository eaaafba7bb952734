//! Plain-data payloads carried by events

use crate::graph::{EdgeTriple, GraphSnapshot};
use crate::hash::{HashSlot, TableView};
use crate::tree::TreeSnapshot;
use serde::Serialize;

/// Payload of an [`Event`](super::Event).
///
/// Serialized untagged: consumers already know the shape from the event kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Serialized as `null`
    Empty,
    Graph(GraphSnapshot),
    Frontier(Frontier),
    Edge(EdgeTriple),
    Distance(VisitedDistance),
    Relaxation(Relaxation),
    /// Node ids of a reconstructed path, start first
    Path(Vec<i64>),
    /// `None` for an empty tree
    Tree(Option<TreeSnapshot>),
    /// Tree node ids involved in a rotation
    NodeIds(Vec<u32>),
    Table(TableView),
    Probe(ProbeAnimation),
    /// Heap array in index order
    Heap(Vec<i64>),
}

/// Node being visited plus the pending work list.
///
/// BFS fills `queue` (front to back), DFS fills `stack` (top to bottom).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frontier {
    pub node: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<Vec<i64>>,
}

impl Frontier {
    pub fn queue(node: i64, queue: Vec<i64>) -> Self {
        Self {
            node,
            queue: Some(queue),
            stack: None,
        }
    }

    pub fn stack(node: i64, stack: Vec<i64>) -> Self {
        Self {
            node,
            queue: None,
            stack: Some(stack),
        }
    }
}

/// A node settled by Dijkstra with its final distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisitedDistance {
    pub node: i64,
    pub dist: i64,
}

/// An edge that improved its target's tentative distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relaxation {
    pub source: i64,
    pub target: i64,
    #[serde(rename = "newDist")]
    pub new_dist: i64,
}

/// What happened at one probed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStepKind {
    Collision,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProbeStep {
    pub index: usize,
    #[serde(rename = "type")]
    pub kind: ProbeStepKind,
    /// What blocked the slot on a collision
    #[serde(rename = "existingValue", skip_serializing_if = "Option::is_none")]
    pub existing: Option<HashSlot>,
}

/// Table state after an insert plus the ordered probe steps that led there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeAnimation {
    #[serde(flatten)]
    pub table: TableView,
    pub steps: Vec<ProbeStep>,
}
