//! Weighted Undirected Graphs
//!
//! The graph model consumed by the Prim step tracer, plus a reference
//! minimum spanning tree used to cross-check traced runs.
//!
//! # Model
//!
//! - Vertices are opaque labels ([`VertexId`]) ordered lexicographically.
//! - Edges are undirected, carry a finite non-negative [`Weight`], and at most
//!   one edge may join any unordered pair. Self-loops are rejected.
//! - Vertex order and per-vertex neighbor order follow insertion order, so
//!   algorithms that walk adjacency lists are deterministic.
//!
//! Consumers that only need read access program against [`WeightedGraph`];
//! [`Graph`] is the in-memory implementation.

mod error;
mod graph;
mod kruskal;

pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, VertexId, Weight, WeightedGraph};
pub use kruskal::{kruskal, SpanningTree};
