//! Full-graph views emitted as `snapshot` payloads

use super::edge::{EdgeTriple, NodeId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: NodeId,
}

/// Every node plus every directed adjacency entry.
///
/// An undirected edge therefore appears twice in `links`, once per direction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeView>,
    pub links: Vec<EdgeTriple>,
}
