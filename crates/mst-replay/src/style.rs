//! Edge and vertex classification for drawing a snapshot.
//!
//! Renderers map these states to colors and widths; the states themselves
//! carry no styling.

use mst_graph::VertexId;
use mst_trace::{Snapshot, StepEvent};
use serde::{Deserialize, Serialize};

/// How an edge should be drawn at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeState {
    /// Confirmed tree edge. Takes priority over everything else.
    Tree,
    /// Just joined the tree at this step.
    Accepted,
    /// Just pushed onto the frontier at this step.
    Explored,
    /// Just discarded because it would close a cycle.
    Rejected,
    /// Not involved.
    Inactive,
}

impl EdgeState {
    /// Whether this step singles the edge out.
    pub fn is_highlighted(&self) -> bool {
        matches!(self, EdgeState::Accepted | EdgeState::Explored | EdgeState::Rejected)
    }
}

/// How a vertex should be drawn at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexState {
    Root,
    Focus,
    Visited,
    Unvisited,
}

/// Classify the undirected edge `a`-`b` at `snapshot`.
///
/// Tree membership wins; otherwise the snapshot's event edge, if it matches
/// in either direction, decides.
pub fn classify_edge(snapshot: &Snapshot, a: &VertexId, b: &VertexId) -> EdgeState {
    if snapshot.in_tree(a, b) {
        return EdgeState::Tree;
    }
    match &snapshot.event {
        StepEvent::Accepted { edge } if edge.connects(a, b) => EdgeState::Accepted,
        StepEvent::Explored { edge } if edge.connects(a, b) => EdgeState::Explored,
        StepEvent::Rejected { edge } if edge.connects(a, b) => EdgeState::Rejected,
        _ => EdgeState::Inactive,
    }
}

/// Classify `vertex` at `snapshot` for a run started from `root`.
pub fn classify_vertex(root: &VertexId, snapshot: &Snapshot, vertex: &VertexId) -> VertexState {
    if vertex == root {
        VertexState::Root
    } else if snapshot.focus.as_ref() == Some(vertex) {
        VertexState::Focus
    } else if snapshot.is_visited(vertex) {
        VertexState::Visited
    } else {
        VertexState::Unvisited
    }
}
