//! Reference minimum spanning forest via Kruskal's algorithm.
//!
//! Independent of the traced Prim run, so the two can check each other.
//! Union-find with path compression and union by rank.

use std::collections::HashMap;

use crate::{Edge, VertexId, Weight, WeightedGraph};

/// Edges of a spanning tree (or forest) and their summed weight.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
    pub total_weight: Weight,
}

impl SpanningTree {
    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the tree has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether the tree contains the undirected edge `a`-`b`.
    pub fn contains(&self, a: &VertexId, b: &VertexId) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }
}

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, x: usize, y: usize) -> bool {
        let px = self.find(x);
        let py = self.find(y);

        if px == py {
            return false;
        }

        if self.rank[px] < self.rank[py] {
            self.parent[px] = py;
        } else if self.rank[px] > self.rank[py] {
            self.parent[py] = px;
        } else {
            self.parent[py] = px;
            self.rank[px] += 1;
        }

        true
    }
}

/// Minimum spanning forest of `graph`.
///
/// For a connected graph this is a minimum spanning tree; otherwise it spans
/// every component.
pub fn kruskal<G: WeightedGraph>(graph: &G) -> SpanningTree {
    let index: HashMap<&VertexId, usize> = graph
        .vertices()
        .enumerate()
        .map(|(i, v)| (v, i))
        .collect();

    let mut edges = graph.edges();
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut sets = UnionFind::new(index.len());
    let mut tree = SpanningTree::default();

    for edge in edges {
        let (Some(&a), Some(&b)) = (index.get(&edge.from), index.get(&edge.to)) else {
            continue;
        };
        if sets.union(a, b) {
            tree.total_weight += edge.weight;
            tree.edges.push(edge);
        }
    }

    tree
}
