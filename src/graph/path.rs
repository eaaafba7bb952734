//! Dijkstra shortest path

use super::edge::{NodeId, Weight};
use super::engine::GraphEngine;
use crate::event::{Event, EventKind, EventSink, Payload, Relaxation, VisitedDistance};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use tracing::debug;

/// A reconstructed shortest path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// Node ids from start to end, inclusive
    pub path: Vec<NodeId>,
    /// Sum of edge weights along `path`
    pub total_weight: Weight,
}

impl PathResult {
    /// Number of hops
    pub fn length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl<S: EventSink> GraphEngine<S> {
    /// Dijkstra from `start` to `end`.
    ///
    /// Weights must be non-negative; this is not checked. The priority
    /// queue uses lazy deletion and the search stops as soon as `end` is
    /// settled. Emits `visit_node` per settled node and `relax_edge` per
    /// improving edge, then either `shortest_path` or a `finished`
    /// "No path found". An absent start does nothing.
    pub fn shortest_path(&mut self, start: NodeId, end: NodeId) -> Option<PathResult> {
        if !self.nodes.contains(&start) {
            return None;
        }
        debug!(start, end, "graph: dijkstra");

        let mut dist: HashMap<NodeId, Weight> =
            self.nodes.iter().map(|&id| (id, Weight::MAX)).collect();
        let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
        let mut queue: BinaryHeap<Reverse<(Weight, NodeId)>> = BinaryHeap::new();

        dist.insert(start, 0);
        queue.push(Reverse((0, start)));

        while let Some(Reverse((d, node))) = queue.pop() {
            if d > dist.get(&node).copied().unwrap_or(Weight::MAX) {
                continue;
            }

            self.sink.emit(Event::new(
                EventKind::VisitNode,
                Payload::Distance(VisitedDistance { node, dist: d }),
                format!("Relaxing Node {}", node),
            ));

            if node == end {
                break;
            }

            if let Some(list) = self.adjacency.get(&node) {
                for adj in list {
                    let candidate = d.saturating_add(adj.weight);
                    let best = dist.entry(adj.target).or_insert(Weight::MAX);
                    if candidate < *best {
                        *best = candidate;
                        parent.insert(adj.target, node);
                        queue.push(Reverse((candidate, adj.target)));

                        self.sink.emit(Event::new(
                            EventKind::RelaxEdge,
                            Payload::Relaxation(Relaxation {
                                source: node,
                                target: adj.target,
                                new_dist: candidate,
                            }),
                            format!("Updated distance to {}", adj.target),
                        ));
                    }
                }
            }
        }

        let total_weight = match dist.get(&end) {
            Some(&d) if d != Weight::MAX => d,
            _ => {
                self.sink.emit(Event::finished("No path found"));
                return None;
            }
        };

        let mut path = vec![end];
        let mut current = end;
        while current != start {
            match parent.get(&current) {
                Some(&previous) => {
                    path.push(previous);
                    current = previous;
                }
                None => break,
            }
        }
        path.reverse();

        self.sink.emit(Event::new(
            EventKind::ShortestPath,
            Payload::Path(path.clone()),
            "Shortest Path Found",
        ));
        Some(PathResult { path, total_weight })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Notification;

    const A: NodeId = 1;
    const B: NodeId = 2;
    const C: NodeId = 3;

    #[test]
    fn test_dijkstra_prefers_cheaper_detour() {
        let mut graph = GraphEngine::new();
        graph.add_edge(A, B, 4);
        graph.add_edge(A, C, 1);
        graph.add_edge(C, B, 1);

        let result = graph.shortest_path(A, B).unwrap();
        assert_eq!(result.path, vec![A, C, B]);
        assert_eq!(result.total_weight, 2);
        assert_eq!(result.length(), 2);
    }

    #[test]
    fn test_dijkstra_event_sequence() {
        let mut graph = GraphEngine::new();
        graph.add_edge(A, B, 4);
        graph.add_edge(A, C, 1);
        graph.add_edge(C, B, 1);
        graph.drain_events();

        graph.shortest_path(A, B);
        let events = graph.drain_events();
        let kinds: Vec<_> = events.iter().filter_map(Notification::kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::VisitNode,    // A
                EventKind::RelaxEdge,    // A->B = 4
                EventKind::RelaxEdge,    // A->C = 1
                EventKind::VisitNode,    // C
                EventKind::RelaxEdge,    // C->B = 2
                EventKind::VisitNode,    // B, stop
                EventKind::ShortestPath,
            ]
        );

        let path = events.last().and_then(Notification::as_event).unwrap();
        assert_eq!(path.payload, Payload::Path(vec![A, C, B]));
    }

    #[test]
    fn test_dijkstra_stops_once_end_settles() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 3, 1);
        graph.add_edge(3, 4, 1);
        graph.drain_events();

        graph.shortest_path(1, 2);
        let events = graph.drain_events();
        let visited: Vec<_> = events
            .iter()
            .filter_map(Notification::as_event)
            .filter_map(|e| match e.payload {
                Payload::Distance(v) => Some(v.node),
                _ => None,
            })
            .collect();
        assert_eq!(visited, vec![1, 2]);
    }

    #[test]
    fn test_unreachable_end_reports_no_path() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 1);
        graph.add_node(3);
        graph.drain_events();

        assert!(graph.shortest_path(1, 3).is_none());
        let events = graph.drain_events();
        let last = events.last().and_then(Notification::as_event).unwrap();
        assert_eq!(last.kind, EventKind::Finished);
        assert_eq!(last.message, "No path found");
    }

    #[test]
    fn test_absent_end_reports_no_path() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 1);
        assert!(graph.shortest_path(1, 99).is_none());
    }

    #[test]
    fn test_path_to_self_is_trivial() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 3);

        let result = graph.shortest_path(1, 1).unwrap();
        assert_eq!(result.path, vec![1]);
        assert_eq!(result.total_weight, 0);
    }

    #[test]
    fn test_absent_start_is_silent() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 3);
        graph.drain_events();

        assert!(graph.shortest_path(7, 1).is_none());
        assert!(graph.sink().is_empty());
    }
}
