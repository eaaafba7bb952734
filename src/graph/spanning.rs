//! Prim's minimum spanning tree

use super::edge::{EdgeTriple, NodeId, Weight};
use super::engine::GraphEngine;
use crate::event::{Event, EventKind, EventSink, Payload};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use tracing::debug;

impl<S: EventSink> GraphEngine<S> {
    /// Grow a minimum spanning tree from `start` with Prim's algorithm.
    ///
    /// Frontier entries are ordered by `(weight, target, parent)`; entries
    /// whose target is already settled are skipped when popped. Emits one
    /// `mst_edge` per accepted edge, then `finished`. On a disconnected
    /// graph only `start`'s component is spanned and nothing flags the
    /// result as partial.
    pub fn minimum_spanning_tree(&mut self, start: NodeId) -> Vec<EdgeTriple> {
        if !self.nodes.contains(&start) {
            return Vec::new();
        }
        debug!(start, "graph: prim");

        let mut accepted = Vec::new();
        let mut settled: HashSet<NodeId> = HashSet::new();
        let mut frontier: BinaryHeap<Reverse<(Weight, NodeId, Option<NodeId>)>> =
            BinaryHeap::new();
        frontier.push(Reverse((0, start, None)));

        while let Some(Reverse((weight, node, parent))) = frontier.pop() {
            if !settled.insert(node) {
                continue;
            }

            if let Some(parent) = parent {
                let edge = EdgeTriple {
                    source: parent,
                    target: node,
                    weight,
                };
                self.sink.emit(Event::new(
                    EventKind::MstEdge,
                    Payload::Edge(edge),
                    format!("Added to MST: {}-{}", parent, node),
                ));
                accepted.push(edge);
            }

            if let Some(list) = self.adjacency.get(&node) {
                for adj in list {
                    if !settled.contains(&adj.target) {
                        frontier.push(Reverse((adj.weight, adj.target, Some(node))));
                    }
                }
            }
        }

        self.sink.emit(Event::finished("Prim's Algorithm Completed"));
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Notification;

    #[test]
    fn test_prim_accepts_cheapest_edges_in_order() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 4);
        graph.add_edge(1, 3, 1);
        graph.add_edge(3, 2, 2);
        graph.add_edge(2, 4, 5);
        graph.add_edge(3, 4, 8);
        graph.drain_events();

        let mst = graph.minimum_spanning_tree(1);
        let pairs: Vec<_> = mst.iter().map(|e| (e.source, e.target, e.weight)).collect();
        assert_eq!(pairs, vec![(1, 3, 1), (3, 2, 2), (2, 4, 5)]);

        let events = graph.drain_events();
        let kinds: Vec<_> = events.iter().filter_map(Notification::kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::MstEdge,
                EventKind::MstEdge,
                EventKind::MstEdge,
                EventKind::Finished
            ]
        );
    }

    #[test]
    fn test_prim_ties_break_on_target_id() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 5, 3);
        graph.add_edge(1, 2, 3);

        let mst = graph.minimum_spanning_tree(1);
        let targets: Vec<_> = mst.iter().map(|e| e.target).collect();
        assert_eq!(targets, vec![2, 5]);
    }

    #[test]
    fn test_prim_on_disconnected_graph_spans_start_component() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 1);
        graph.add_edge(3, 4, 1);
        graph.drain_events();

        let mst = graph.minimum_spanning_tree(1);
        assert_eq!(mst.len(), 1);

        let events = graph.drain_events();
        assert_eq!(events.last().and_then(Notification::kind), Some(EventKind::Finished));
    }

    #[test]
    fn test_prim_from_absent_start_is_silent() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 1);
        graph.drain_events();

        assert!(graph.minimum_spanning_tree(9).is_empty());
        assert!(graph.sink().is_empty());
    }
}
