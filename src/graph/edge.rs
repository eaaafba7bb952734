//! Edge representation

use serde::{Deserialize, Serialize};

/// Identifier of a graph node
pub type NodeId = i64;

/// Edge weight. Shortest-path queries assume it is non-negative.
pub type Weight = i64;

/// One directed half of an undirected edge, stored in the source's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Adjacent {
    pub target: NodeId,
    pub weight: Weight,
}

/// A `{source, target, weight}` edge as it appears in payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeTriple {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: Weight,
}

impl std::fmt::Display for EdgeTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} ({})", self.source, self.target, self.weight)
    }
}
