//! GraphEngine: undirected weighted graph with narrated mutations

use super::edge::{Adjacent, EdgeTriple, NodeId, Weight};
use super::snapshot::{GraphSnapshot, NodeView};
use crate::event::{Event, EventKind, EventLog, EventSink, Notification, Payload};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Undirected weighted graph.
///
/// Adjacency is stored symmetrically and each node's list keeps insertion
/// order, which decides discovery order in every traversal. References to
/// absent node ids are silent no-ops: nothing changes and nothing is emitted.
#[derive(Debug, Default)]
pub struct GraphEngine<S: EventSink = EventLog> {
    pub(super) nodes: BTreeSet<NodeId>,
    pub(super) adjacency: BTreeMap<NodeId, Vec<Adjacent>>,
    pub(super) sink: S,
}

impl GraphEngine<EventLog> {
    /// Create an empty graph buffering its events in an [`EventLog`].
    pub fn new() -> Self {
        Self::with_sink(EventLog::new())
    }

    /// Take every notification emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<Notification> {
        self.sink.drain()
    }
}

impl<S: EventSink> GraphEngine<S> {
    /// Create an empty graph that emits into `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            nodes: BTreeSet::new(),
            adjacency: BTreeMap::new(),
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

    /// Insert a node. Returns `false` (and emits nothing) if it already exists.
    pub fn add_node(&mut self, id: NodeId) -> bool {
        if !self.nodes.insert(id) {
            return false;
        }
        debug!(id, "graph: add node");
        self.emit_snapshot(format!("Added Node {}", id));
        true
    }

    /// Insert or reweight the undirected edge `{u, v}`.
    ///
    /// Missing endpoints are created first (each emitting its own snapshot).
    /// A self-loop is stored as a single adjacency entry on its node.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: Weight) {
        self.add_node(u);
        self.add_node(v);
        debug!(u, v, weight, "graph: add edge");

        self.detach(u, v);
        self.adjacency
            .entry(u)
            .or_default()
            .push(Adjacent { target: v, weight });
        if u != v {
            self.adjacency
                .entry(v)
                .or_default()
                .push(Adjacent { target: u, weight });
        }

        self.emit_snapshot(format!("Added Edge {}-{}", u, v));
    }

    /// Delete a node and every incident edge.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if !self.nodes.remove(&id) {
            return false;
        }
        debug!(id, "graph: remove node");

        self.adjacency.remove(&id);
        for list in self.adjacency.values_mut() {
            list.retain(|adj| adj.target != id);
        }

        self.emit_snapshot(format!("Removed Node {}", id));
        true
    }

    /// Delete the edge `{u, v}`. Emits only if an entry was actually removed.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        if !self.detach(u, v) {
            return false;
        }
        debug!(u, v, "graph: remove edge");
        self.emit_snapshot(format!("Removed Edge {}-{}", u, v));
        true
    }

    /// Empty the graph.
    pub fn clear(&mut self) {
        debug!("graph: clear");
        self.nodes.clear();
        self.adjacency.clear();
        self.emit_snapshot("Graph Cleared");
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// Neighbours of `id` in insertion order; empty for an absent node.
    pub fn neighbors(&self, id: NodeId) -> &[Adjacent] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges (a self-loop counts once).
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(source, list)| list.iter().filter(|adj| adj.target >= *source).count())
            .sum()
    }

    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<Weight> {
        self.neighbors(u)
            .iter()
            .find(|adj| adj.target == v)
            .map(|adj| adj.weight)
    }

    /// Full-graph view: nodes ascending, then every directed adjacency entry.
    pub fn snapshot(&self) -> GraphSnapshot {
        let nodes = self.nodes.iter().map(|&id| NodeView { id }).collect();
        let links = self
            .adjacency
            .iter()
            .flat_map(|(&source, list)| {
                list.iter().map(move |adj| EdgeTriple {
                    source,
                    target: adj.target,
                    weight: adj.weight,
                })
            })
            .collect();
        GraphSnapshot { nodes, links }
    }

    /// Drop the symmetric entries for `{u, v}`. Returns whether any existed.
    fn detach(&mut self, u: NodeId, v: NodeId) -> bool {
        let mut changed = false;
        if let Some(list) = self.adjacency.get_mut(&u) {
            let before = list.len();
            list.retain(|adj| adj.target != v);
            changed |= list.len() != before;
        }
        if let Some(list) = self.adjacency.get_mut(&v) {
            let before = list.len();
            list.retain(|adj| adj.target != u);
            changed |= list.len() != before;
        }
        changed
    }

    fn emit_snapshot(&mut self, message: impl Into<String>) {
        let snapshot = self.snapshot();
        self.sink
            .emit(Event::new(EventKind::Snapshot, Payload::Graph(snapshot), message));
    }
}
