//! Serialization tests with wire-format fixtures
//!
//! Renderers pattern-match on these exact shapes, so any change here is a
//! breaking change for every consumer.

use serde_json::{json, Value};

/// Fixture: snapshot of the single edge 1-2 with weight 5
fn snapshot_fixture() -> Value {
    json!({
        "kind": "snapshot",
        "payload": {
            "nodes": [{ "id": 1 }, { "id": 2 }],
            "links": [
                { "source": 1, "target": 2, "weight": 5 },
                { "source": 2, "target": 1, "weight": 5 }
            ]
        },
        "message": "Added Edge 1-2"
    })
}

#[cfg(test)]
mod serialization_tests {
    use super::*;
    use crate::event::{Notification, Payload};
    use crate::graph::GraphEngine;

    fn last_event_json(graph: &mut GraphEngine) -> Value {
        let events = graph.drain_events();
        let last = events.last().and_then(Notification::as_event).unwrap();
        serde_json::to_value(last).unwrap()
    }

    #[test]
    fn snapshot_matches_fixture() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 5);
        assert_eq!(last_event_json(&mut graph), snapshot_fixture());
    }

    #[test]
    fn bfs_highlight_carries_queue_only() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 5);
        graph.add_edge(1, 3, 2);
        graph.drain_events();

        graph.traverse_bfs(1);
        let events = graph.drain_events();
        let first = serde_json::to_value(events[0].as_event().unwrap()).unwrap();
        assert_eq!(
            first,
            json!({
                "kind": "highlight",
                "payload": { "node": 1, "queue": [] },
                "message": "Visiting 1"
            })
        );
        let second = serde_json::to_value(events[1].as_event().unwrap()).unwrap();
        assert_eq!(second["payload"], json!({ "node": 2, "queue": [3] }));
    }

    #[test]
    fn dfs_highlight_carries_stack_only() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 5);
        graph.drain_events();

        graph.traverse_dfs(1);
        let events = graph.drain_events();
        let first = serde_json::to_value(events[0].as_event().unwrap()).unwrap();
        assert_eq!(first["payload"], json!({ "node": 1, "stack": [] }));
        assert!(first["payload"].get("queue").is_none());
    }

    #[test]
    fn mst_edge_is_weighted_triple() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 5);
        graph.drain_events();

        graph.minimum_spanning_tree(1);
        let events = graph.drain_events();
        let first = serde_json::to_value(events[0].as_event().unwrap()).unwrap();
        assert_eq!(
            first,
            json!({
                "kind": "mst_edge",
                "payload": { "source": 1, "target": 2, "weight": 5 },
                "message": "Added to MST: 1-2"
            })
        );
    }

    #[test]
    fn dijkstra_payloads() {
        let mut graph = GraphEngine::new();
        graph.add_edge(1, 2, 5);
        graph.drain_events();

        graph.shortest_path(1, 2);
        let events: Vec<Value> = graph
            .drain_events()
            .iter()
            .map(|n| serde_json::to_value(n.as_event().unwrap()).unwrap())
            .collect();

        assert_eq!(events[0]["kind"], json!("visit_node"));
        assert_eq!(events[0]["payload"], json!({ "node": 1, "dist": 0 }));
        assert_eq!(events[1]["kind"], json!("relax_edge"));
        assert_eq!(
            events[1]["payload"],
            json!({ "source": 1, "target": 2, "newDist": 5 })
        );
        assert_eq!(events[3]["kind"], json!("shortest_path"));
        assert_eq!(events[3]["payload"], json!([1, 2]));
    }

    #[test]
    fn notification_tags_its_channel() {
        let mut graph = GraphEngine::new();
        graph.add_node(3);
        let events = graph.drain_events();
        let json = serde_json::to_value(&events[0]).unwrap();
        assert_eq!(json["channel"], json!("event"));
        assert_eq!(json["kind"], json!("snapshot"));
    }

    #[test]
    fn empty_payload_is_null() {
        let json = serde_json::to_value(Payload::Empty).unwrap();
        assert_eq!(json, Value::Null);
    }
}
