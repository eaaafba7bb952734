//! Invariant checks over public engine views

use dsviz::{Event, EventKind, GraphEngine, Notification, TreeSnapshot};

/// Every adjacency entry has its mirror.
pub fn assert_symmetric(graph: &GraphEngine) {
    for u in graph.node_ids() {
        for adj in graph.neighbors(u) {
            assert!(
                graph.contains_node(adj.target),
                "edge {}-{} points at a missing node",
                u,
                adj.target
            );
            assert_eq!(
                graph.weight(adj.target, u),
                Some(adj.weight),
                "edge {}-{} has no mirror",
                u,
                adj.target
            );
        }
    }
}

/// Height recomputed from structure, ignoring stored values
pub fn recomputed_height(node: &TreeSnapshot) -> i32 {
    1 + node.children.iter().map(recomputed_height).max().unwrap_or(0)
}

/// Every node is balanced and carries its true height.
///
/// Only the present children are listed, so a single child is compared
/// against an empty side.
pub fn assert_avl_balanced(root: Option<&TreeSnapshot>) {
    fn check(node: &TreeSnapshot) -> i32 {
        let heights: Vec<i32> = node.children.iter().map(check).collect();
        let (a, b) = match heights.as_slice() {
            [] => (0, 0),
            [only] => (*only, 0),
            [left, right] => (*left, *right),
            _ => unreachable!("binary tree node with more than two children"),
        };
        assert!((a - b).abs() <= 1, "node {} is unbalanced", node.value);
        let height = 1 + a.max(b);
        assert_eq!(node.height, height, "node {} has a stale height", node.value);
        assert!(node.balance_factor.abs() <= 1);
        height
    }
    if let Some(root) = root {
        check(root);
    }
}

pub fn events_of_kind(notifications: &[Notification], kind: EventKind) -> Vec<&Event> {
    notifications
        .iter()
        .filter_map(Notification::as_event)
        .filter(|event| event.kind == kind)
        .collect()
}
