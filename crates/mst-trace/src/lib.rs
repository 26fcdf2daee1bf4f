//! Traced Prim's Algorithm
//!
//! Computes a minimum spanning tree with Prim's algorithm and records an
//! immutable [`Snapshot`] for every decision the algorithm makes, so the run
//! can be replayed one step at a time.
//!
//! # Recorded Steps
//!
//! 1. `Start` - the root's incident edges are on the frontier
//! 2. `Rejected` - the lightest candidate leads back into the tree (stale)
//! 3. `Accepted` - the lightest candidate joins the tree
//! 4. `Explored` - one snapshot per new candidate edge from the joined vertex
//! 5. `Final` - the finished tree and its total weight
//!
//! Each snapshot is a full value copy of the tree state and frontier, so any
//! step can be inspected in isolation after the run.
//!
//! # Usage
//!
//! ```
//! use mst_graph::Graph;
//! use mst_trace::build_trace;
//!
//! let graph = Graph::from_edges([("A", "B", 1.0), ("B", "C", 2.0)]).unwrap();
//! let trace = build_trace(&graph, "A").unwrap();
//!
//! assert!(trace.final_snapshot().is_final());
//! assert_eq!(trace.final_snapshot().total_weight, 3.0);
//! ```

mod error;
mod frontier;
mod snapshot;
mod trace;
mod tracer;

pub use error::{Result, TraceError};
pub use frontier::{Frontier, FrontierEntry};
pub use snapshot::{Snapshot, StepEvent, StepKind};
pub use trace::Trace;
pub use tracer::{build_trace, minimum_spanning_tree, PrimRun, PrimTracer};
