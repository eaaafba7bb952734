//! Brute-force reference algorithms

use dsviz::{EdgeTriple, GraphEngine, NodeId, Weight};
use std::collections::{BTreeMap, HashMap};

/// Floyd-Warshall over the current graph. Missing pairs are unreachable.
pub fn all_pairs_distances(graph: &GraphEngine) -> HashMap<(NodeId, NodeId), Weight> {
    let ids: Vec<NodeId> = graph.node_ids().collect();
    let mut dist: HashMap<(NodeId, NodeId), Weight> = HashMap::new();
    for &u in &ids {
        dist.insert((u, u), 0);
        for adj in graph.neighbors(u) {
            let entry = dist.entry((u, adj.target)).or_insert(Weight::MAX);
            *entry = (*entry).min(adj.weight);
        }
    }
    for &k in &ids {
        for &i in &ids {
            for &j in &ids {
                let (Some(&ik), Some(&kj)) = (dist.get(&(i, k)), dist.get(&(k, j))) else {
                    continue;
                };
                let through = ik + kj;
                let entry = dist.entry((i, j)).or_insert(Weight::MAX);
                if through < *entry {
                    *entry = through;
                }
            }
        }
    }
    dist
}

/// Kruskal restricted to the component containing `start`; returns total weight.
pub fn kruskal_component_weight(graph: &GraphEngine, start: NodeId) -> Weight {
    let distances = all_pairs_distances(graph);
    let in_component = |id: NodeId| distances.contains_key(&(start, id));

    let mut edges: Vec<EdgeTriple> = graph
        .snapshot()
        .links
        .into_iter()
        .filter(|e| e.source < e.target && in_component(e.source))
        .collect();
    edges.sort_by_key(|e| (e.weight, e.source, e.target));

    let mut parent: BTreeMap<NodeId, NodeId> = graph.node_ids().map(|id| (id, id)).collect();
    fn find(parent: &mut BTreeMap<NodeId, NodeId>, id: NodeId) -> NodeId {
        let mut root = id;
        while parent[&root] != root {
            root = parent[&root];
        }
        parent.insert(id, root);
        root
    }

    let mut total = 0;
    for edge in edges {
        let a = find(&mut parent, edge.source);
        let b = find(&mut parent, edge.target);
        if a != b {
            parent.insert(a, b);
            total += edge.weight;
        }
    }
    total
}
