//! Shared fixtures and proptest strategies for the cross-crate tests.

use std::collections::{BTreeSet, VecDeque};

use mst_graph::{Graph, VertexId, WeightedGraph};
use proptest::prelude::*;
use proptest::sample::Index;

/// The six-vertex graph used throughout the docs. Its MST weighs 13.
pub fn example_graph() -> Graph {
    let mut graph = Graph::new();
    for (u, v, w) in [
        ("A", "B", 4.0),
        ("A", "C", 2.0),
        ("B", "C", 1.0),
        ("B", "D", 5.0),
        ("C", "D", 8.0),
        ("C", "E", 10.0),
        ("D", "E", 2.0),
        ("D", "F", 6.0),
        ("E", "F", 3.0),
    ] {
        // Fixed, valid edge list.
        let _ = graph.add_edge(u, v, w);
    }
    graph
}

/// Label of the `i`-th generated vertex.
pub fn vertex(i: usize) -> VertexId {
    VertexId::new(format!("v{i}"))
}

/// Whole-number weights keep sums exact regardless of addition order.
fn weight() -> impl Strategy<Value = f64> {
    (0u32..20).prop_map(f64::from)
}

fn build(n: usize, tree: &[(Index, f64)], extra: &[(usize, usize, f64)]) -> Graph {
    let mut graph = Graph::new();
    graph.add_vertex(vertex(0));
    for (i, (parent, w)) in tree.iter().enumerate() {
        let child = i + 1;
        let _ = graph.add_edge(vertex(parent.index(child)), vertex(child), *w);
    }
    for v in 0..n {
        graph.add_vertex(vertex(v));
    }
    for &(u, v, w) in extra {
        // Self-loops and duplicates are rejected by the graph and skipped.
        let _ = graph.add_edge(vertex(u), vertex(v), w);
    }
    graph
}

/// Connected graphs of 1 to 9 vertices: a random spanning tree plus extra edges.
pub fn connected_graph() -> impl Strategy<Value = Graph> {
    (1usize..10)
        .prop_flat_map(|n| {
            let tree = proptest::collection::vec((any::<Index>(), weight()), n - 1);
            let extra = proptest::collection::vec((0..n, 0..n, weight()), 0..n * 2);
            (Just(n), tree, extra)
        })
        .prop_map(|(n, tree, extra)| build(n, &tree, &extra))
}

/// Graphs of 1 to 9 vertices with arbitrary, possibly disconnected, edges.
pub fn any_graph() -> impl Strategy<Value = Graph> {
    (1usize..10)
        .prop_flat_map(|n| {
            let edges = proptest::collection::vec((0..n, 0..n, weight()), 0..n * 2);
            (Just(n), edges)
        })
        .prop_map(|(n, edges)| build(n, &[], &edges))
}

/// Vertices reachable from `root`, found by breadth-first search.
pub fn component<G: WeightedGraph>(graph: &G, root: &VertexId) -> BTreeSet<VertexId> {
    let mut seen = BTreeSet::from([root.clone()]);
    let mut queue = VecDeque::from([root.clone()]);
    while let Some(v) = queue.pop_front() {
        for (next, _) in graph.neighbors(&v) {
            if seen.insert(next.clone()) {
                queue.push_back(next.clone());
            }
        }
    }
    seen
}
