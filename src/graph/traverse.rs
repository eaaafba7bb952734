//! Breadth-first and depth-first traversal

use super::edge::NodeId;
use super::engine::GraphEngine;
use crate::event::{Event, EventKind, EventSink, Frontier, Payload};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

impl<S: EventSink> GraphEngine<S> {
    /// Queue-based BFS from `start`, returning the visit order.
    ///
    /// Nodes are marked visited when enqueued. Neighbours are explored in
    /// adjacency insertion order. Emits one `highlight` per dequeue carrying
    /// the queue front to back, then `finished`. An absent start does nothing.
    pub fn traverse_bfs(&mut self, start: NodeId) -> Vec<NodeId> {
        if !self.nodes.contains(&start) {
            return Vec::new();
        }
        debug!(start, "graph: bfs");

        let mut order = Vec::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(current);

            let pending = queue.iter().copied().collect();
            self.sink.emit(Event::new(
                EventKind::Highlight,
                Payload::Frontier(Frontier::queue(current, pending)),
                format!("Visiting {}", current),
            ));

            if let Some(list) = self.adjacency.get(&current) {
                for adj in list {
                    if visited.insert(adj.target) {
                        queue.push_back(adj.target);
                    }
                }
            }
        }

        self.sink.emit(Event::finished("BFS Completed"));
        order
    }

    /// Stack-based DFS from `start`, returning the visit order.
    ///
    /// Nodes are settled on pop, so a node may sit in the stack several
    /// times; stale copies are skipped. Unvisited neighbours are pushed in
    /// adjacency insertion order, meaning the most recently added neighbour
    /// is explored first. Emits one `highlight` per settled node carrying the
    /// stack top to bottom, then `finished`.
    pub fn traverse_dfs(&mut self, start: NodeId) -> Vec<NodeId> {
        if !self.nodes.contains(&start) {
            return Vec::new();
        }
        debug!(start, "graph: dfs");

        let mut order = Vec::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut stack: Vec<NodeId> = vec![start];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            order.push(current);

            let pending = stack.iter().rev().copied().collect();
            self.sink.emit(Event::new(
                EventKind::Highlight,
                Payload::Frontier(Frontier::stack(current, pending)),
                format!("Visiting {}", current),
            ));

            if let Some(list) = self.adjacency.get(&current) {
                for adj in list {
                    if !visited.contains(&adj.target) {
                        stack.push(adj.target);
                    }
                }
            }
        }

        self.sink.emit(Event::finished("DFS Completed"));
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Notification;

    fn frontiers(events: &[Notification]) -> Vec<Frontier> {
        events
            .iter()
            .filter_map(Notification::as_event)
            .filter_map(|e| match &e.payload {
                Payload::Frontier(f) => Some(f.clone()),
                _ => None,
            })
            .collect()
    }

    fn sample_graph() -> GraphEngine {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 5);
        graph.add_edge(1, 3, 2);
        graph.add_edge(2, 4, 1);
        graph.drain_events();
        graph
    }

    #[test]
    fn test_bfs_follows_insertion_order() {
        let mut graph = sample_graph();
        assert_eq!(graph.traverse_bfs(1), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_bfs_reports_queue_front_to_back() {
        let mut graph = sample_graph();
        graph.traverse_bfs(1);
        let events = graph.drain_events();

        let seen = frontiers(&events);
        assert_eq!(seen[0], Frontier::queue(1, vec![]));
        assert_eq!(seen[1], Frontier::queue(2, vec![3]));
        assert_eq!(seen[2], Frontier::queue(3, vec![4]));
        assert_eq!(seen[3], Frontier::queue(4, vec![]));

        let last = events.last().and_then(Notification::as_event).unwrap();
        assert_eq!(last.kind, EventKind::Finished);
        assert_eq!(last.message, "BFS Completed");
    }

    #[test]
    fn test_bfs_never_enqueues_twice() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 1);
        graph.add_edge(1, 3, 1);
        graph.add_edge(2, 3, 1);

        assert_eq!(graph.traverse_bfs(1), vec![1, 2, 3]);
    }

    #[test]
    fn test_dfs_pushes_in_insertion_order() {
        let mut graph = sample_graph();
        // 1 pushes 2 then 3, so 3 is popped first
        assert_eq!(graph.traverse_dfs(1), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_dfs_reports_stack_top_first_and_skips_settled() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 1);
        graph.add_edge(1, 3, 1);
        graph.add_edge(3, 2, 1);
        graph.drain_events();

        assert_eq!(graph.traverse_dfs(1), vec![1, 3, 2]);
        let events = graph.drain_events();
        let seen = frontiers(&events);
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], Frontier::stack(1, vec![]));
        assert_eq!(seen[1], Frontier::stack(3, vec![2]));
        // 2 was pushed again from 3; the older copy is still below it
        assert_eq!(seen[2], Frontier::stack(2, vec![2]));
    }

    #[test]
    fn test_traversal_from_absent_start_is_silent() {
        let mut graph = sample_graph();
        assert!(graph.traverse_bfs(42).is_empty());
        assert!(graph.traverse_dfs(42).is_empty());
        assert!(graph.sink().is_empty());
    }

    #[test]
    fn test_traversal_stays_in_component() {
        let mut graph = sample_graph();
        graph.add_edge(10, 11, 1);
        assert_eq!(graph.traverse_bfs(10), vec![10, 11]);
    }
}
