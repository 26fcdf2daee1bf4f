//! Vertex labels, weighted edges and the adjacency-list graph.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::{GraphError, Result};

/// Edge weight. Always finite and `>= 0` inside a [`Graph`].
pub type Weight = f64;

/// An opaque vertex label.
///
/// Labels order lexicographically; the tracer uses that order to break ties
/// between equal-weight candidate edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VertexId(String);

impl VertexId {
    /// Create a vertex label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VertexId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for VertexId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// A weighted edge.
///
/// The graph itself is undirected; `from`/`to` only carry meaning for tree
/// edges, where `from` is the endpoint that was already in the tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl Edge {
    /// Create an edge.
    pub fn new(from: impl Into<VertexId>, to: impl Into<VertexId>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Undirected endpoint match: `(a, b)` matches `(b, a)`.
    pub fn connects(&self, a: &VertexId, b: &VertexId) -> bool {
        (self.from == *a && self.to == *b) || (self.from == *b && self.to == *a)
    }
}

/// Read-only access to a weighted undirected graph.
///
/// This is everything the tracer and the renderers need; no mutation.
pub trait WeightedGraph {
    /// All vertices, in a stable order.
    fn vertices(&self) -> impl Iterator<Item = &VertexId>;

    /// Neighbors of `vertex` with the connecting edge weight, in adjacency order.
    ///
    /// Unknown vertices have no neighbors.
    fn neighbors(&self, vertex: &VertexId) -> impl Iterator<Item = (&VertexId, Weight)>;

    /// Weight of the edge joining `a` and `b`, if any.
    fn weight(&self, a: &VertexId, b: &VertexId) -> Option<Weight>;

    /// Whether `vertex` belongs to the graph.
    fn contains_vertex(&self, vertex: &VertexId) -> bool {
        self.vertices().any(|v| v == vertex)
    }

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Every edge exactly once.
    fn edges(&self) -> Vec<Edge> {
        let mut seen: HashSet<(&VertexId, &VertexId)> = HashSet::new();
        let mut edges = Vec::new();
        for u in self.vertices() {
            for (v, weight) in self.neighbors(u) {
                let key = if u <= v { (u, v) } else { (v, u) };
                if seen.insert(key) {
                    edges.push(Edge::new(u.clone(), v.clone(), weight));
                }
            }
        }
        edges
    }
}

/// In-memory adjacency-list graph.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GraphRepr", into = "GraphRepr"))]
pub struct Graph {
    vertices: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
    adjacency: Vec<Vec<(usize, Weight)>>,
    edges: Vec<(usize, usize, Weight)>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(u, v, weight)` triples, in order.
    pub fn from_edges<I, S>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S, Weight)>,
        S: Into<VertexId>,
    {
        let mut graph = Self::new();
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Add a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: impl Into<VertexId>) -> bool {
        let vertex = vertex.into();
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.intern(vertex);
        true
    }

    /// Add an undirected edge, creating missing endpoints.
    ///
    /// Nothing is modified when the edge is rejected.
    pub fn add_edge(
        &mut self,
        u: impl Into<VertexId>,
        v: impl Into<VertexId>,
        weight: Weight,
    ) -> Result<()> {
        let (u, v) = (u.into(), v.into());
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: u,
                to: v,
                weight,
            });
        }
        if self.weight(&u, &v).is_some() {
            return Err(GraphError::DuplicateEdge(u, v));
        }

        let a = self.intern(u);
        let b = self.intern(v);
        self.adjacency[a].push((b, weight));
        self.adjacency[b].push((a, weight));
        self.edges.push((a, b, weight));
        Ok(())
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Look up a vertex by label.
    pub fn vertex(&self, label: &str) -> Option<&VertexId> {
        self.index.get(label).map(|&i| &self.vertices[i])
    }

    fn intern(&mut self, vertex: VertexId) -> usize {
        if let Some(&i) = self.index.get(&vertex) {
            return i;
        }
        let i = self.vertices.len();
        self.index.insert(vertex.clone(), i);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        i
    }
}

impl WeightedGraph for Graph {
    fn vertices(&self) -> impl Iterator<Item = &VertexId> {
        self.vertices.iter()
    }

    fn neighbors(&self, vertex: &VertexId) -> impl Iterator<Item = (&VertexId, Weight)> {
        let adjacent = match self.index.get(vertex) {
            Some(&i) => self.adjacency[i].as_slice(),
            None => &[],
        };
        adjacent.iter().map(move |&(j, w)| (&self.vertices[j], w))
    }

    fn weight(&self, a: &VertexId, b: &VertexId) -> Option<Weight> {
        let (&i, &j) = (self.index.get(a)?, self.index.get(b)?);
        self.adjacency[i]
            .iter()
            .find(|&&(n, _)| n == j)
            .map(|&(_, w)| w)
    }

    fn contains_vertex(&self, vertex: &VertexId) -> bool {
        self.index.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Edges in insertion order.
    fn edges(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .map(|&(a, b, w)| Edge::new(self.vertices[a].clone(), self.vertices[b].clone(), w))
            .collect()
    }
}

/// Wire shape of a [`Graph`]: vertex list (keeps isolated vertices and order)
/// plus edge list.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GraphRepr {
    #[serde(default)]
    vertices: Vec<VertexId>,
    edges: Vec<Edge>,
}

#[cfg(feature = "serde")]
impl TryFrom<GraphRepr> for Graph {
    type Error = GraphError;

    fn try_from(repr: GraphRepr) -> Result<Self> {
        let mut graph = Graph::new();
        for vertex in repr.vertices {
            graph.add_vertex(vertex);
        }
        for edge in repr.edges {
            graph.add_edge(edge.from, edge.to, edge.weight)?;
        }
        Ok(graph)
    }
}

#[cfg(feature = "serde")]
impl From<Graph> for GraphRepr {
    fn from(graph: Graph) -> Self {
        let edges = graph.edges();
        GraphRepr {
            vertices: graph.vertices,
            edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(label: &str) -> VertexId {
        VertexId::from(label)
    }

    #[test]
    fn add_edge_creates_endpoints() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 3.0).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.contains_vertex(&v("A")));
        assert!(graph.contains_vertex(&v("B")));
        assert_eq!(graph.weight(&v("A"), &v("B")), Some(3.0));
        assert_eq!(graph.weight(&v("B"), &v("A")), Some(3.0));
    }

    #[test]
    fn rejects_self_loops() {
        let mut graph = Graph::new();
        let err = graph.add_edge("A", "A", 1.0).unwrap_err();
        assert_eq!(err, GraphError::SelfLoop(v("A")));
        assert!(graph.is_empty());
    }

    #[test]
    fn rejects_duplicate_edges_in_either_direction() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();

        assert!(matches!(
            graph.add_edge("B", "A", 2.0),
            Err(GraphError::DuplicateEdge(_, _))
        ));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight(&v("A"), &v("B")), Some(1.0));
    }

    #[test]
    fn rejects_negative_and_non_finite_weights() {
        let mut graph = Graph::new();
        assert!(graph.add_edge("A", "B", -1.0).is_err());
        assert!(graph.add_edge("A", "B", f64::NAN).is_err());
        assert!(graph.add_edge("A", "B", f64::INFINITY).is_err());
        assert!(graph.is_empty());

        graph.add_edge("A", "B", 0.0).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn neighbors_follow_insertion_order() {
        let graph = Graph::from_edges([("C", "A", 1.0), ("C", "B", 2.0), ("C", "D", 0.5)]).unwrap();

        let order: Vec<_> = graph
            .neighbors(&v("C"))
            .map(|(n, _)| n.as_str().to_string())
            .collect();
        assert_eq!(order, ["A", "B", "D"]);

        let vertices: Vec<_> = graph.vertices().map(VertexId::as_str).collect();
        assert_eq!(vertices, ["C", "A", "B", "D"]);
    }

    #[test]
    fn unknown_vertex_has_no_neighbors() {
        let graph = Graph::from_edges([("A", "B", 1.0)]).unwrap();
        assert_eq!(graph.neighbors(&v("Z")).count(), 0);
        assert_eq!(graph.weight(&v("A"), &v("Z")), None);
    }

    #[test]
    fn isolated_vertices_are_kept() {
        let mut graph = Graph::from_edges([("A", "B", 1.0)]).unwrap();
        assert!(graph.add_vertex("Z"));
        assert!(!graph.add_vertex("A"));
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn default_edges_visits_each_pair_once() {
        struct Triangle(Graph);

        impl WeightedGraph for Triangle {
            fn vertices(&self) -> impl Iterator<Item = &VertexId> {
                self.0.vertices()
            }
            fn neighbors(&self, vertex: &VertexId) -> impl Iterator<Item = (&VertexId, Weight)> {
                self.0.neighbors(vertex)
            }
            fn weight(&self, a: &VertexId, b: &VertexId) -> Option<Weight> {
                self.0.weight(a, b)
            }
        }

        let triangle = Triangle(
            Graph::from_edges([("A", "B", 1.0), ("B", "C", 2.0), ("C", "A", 3.0)]).unwrap(),
        );
        let edges = triangle.edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(triangle.vertex_count(), 3);
        assert!(triangle.contains_vertex(&v("C")));
        assert!(edges.iter().any(|e| e.connects(&v("A"), &v("C"))));
    }

    #[test]
    fn edge_connects_is_undirected() {
        let edge = Edge::new("A", "B", 1.0);
        assert!(edge.connects(&v("A"), &v("B")));
        assert!(edge.connects(&v("B"), &v("A")));
        assert!(!edge.connects(&v("A"), &v("C")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn graph_json_keeps_order_and_isolated_vertices() {
        let mut graph = Graph::from_edges([("B", "A", 1.5), ("A", "C", 2.0)]).unwrap();
        graph.add_vertex("Z");

        let json = serde_json::to_string(&graph).unwrap();
        let parsed: Graph = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.vertex_count(), 4);
        assert_eq!(parsed.edges(), graph.edges());
        let order: Vec<_> = parsed.vertices().map(VertexId::as_str).collect();
        assert_eq!(order, ["B", "A", "C", "Z"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn graph_json_rejects_invalid_edges() {
        let json = r#"{"edges":[{"from":"A","to":"A","weight":1.0}]}"#;
        assert!(serde_json::from_str::<Graph>(json).is_err());
    }
}
