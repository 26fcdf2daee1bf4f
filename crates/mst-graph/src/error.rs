//! Error types for mst-graph.

use thiserror::Error;

use crate::{VertexId, Weight};

/// Result type for graph construction.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised while building a graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// An edge would connect a vertex to itself.
    #[error("self-loop on vertex {0}")]
    SelfLoop(VertexId),

    /// The unordered pair already has an edge.
    #[error("duplicate edge between {0} and {1}")]
    DuplicateEdge(VertexId, VertexId),

    /// Weights must be finite and non-negative.
    #[error("invalid weight {weight} on edge ({from}, {to})")]
    InvalidWeight {
        from: VertexId,
        to: VertexId,
        weight: Weight,
    },
}
