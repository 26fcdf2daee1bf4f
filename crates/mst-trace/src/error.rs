//! Error types for mst-trace.

use mst_graph::VertexId;
use thiserror::Error;

/// Result type for trace construction.
pub type Result<T> = std::result::Result<T, TraceError>;

/// Errors that can occur while building a trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// The requested root is not a vertex of the graph.
    #[error("root vertex {0} is not in the graph")]
    InvalidRoot(VertexId),
}
