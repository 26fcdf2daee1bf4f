//! Snapshots recorded at each step of a Prim run.

use std::collections::BTreeSet;
use std::fmt;

use mst_graph::{Edge, VertexId, Weight};
use serde::{Deserialize, Serialize};

use crate::frontier::FrontierEntry;

/// Discriminant of a [`StepEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    Start,
    Rejected,
    Accepted,
    Explored,
    Final,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepKind::Start => "start",
            StepKind::Rejected => "rejected",
            StepKind::Accepted => "accepted",
            StepKind::Explored => "explored",
            StepKind::Final => "final",
        };
        f.write_str(name)
    }
}

/// What happened at a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum StepEvent {
    /// The run began at `root`.
    Start { root: VertexId },

    /// The lightest candidate led back into the tree and was discarded.
    Rejected { edge: Edge },

    /// The lightest candidate joined the tree.
    Accepted { edge: Edge },

    /// A new candidate was pushed onto the frontier.
    Explored { edge: Edge },

    /// The run finished.
    Final { total_weight: Weight },
}

impl StepEvent {
    /// Get the discriminant.
    pub fn kind(&self) -> StepKind {
        match self {
            StepEvent::Start { .. } => StepKind::Start,
            StepEvent::Rejected { .. } => StepKind::Rejected,
            StepEvent::Accepted { .. } => StepKind::Accepted,
            StepEvent::Explored { .. } => StepKind::Explored,
            StepEvent::Final { .. } => StepKind::Final,
        }
    }

    /// The edge this event is about, if any.
    pub fn edge(&self) -> Option<&Edge> {
        match self {
            StepEvent::Rejected { edge }
            | StepEvent::Accepted { edge }
            | StepEvent::Explored { edge } => Some(edge),
            StepEvent::Start { .. } | StepEvent::Final { .. } => None,
        }
    }

    /// Human-readable description.
    pub fn describe(&self) -> String {
        match self {
            StepEvent::Start { root } => format!("Start: root vertex = {root}"),
            StepEvent::Rejected { edge } => format!(
                "Edge ({}, {}) rejected: {} is already in the MST",
                edge.from, edge.to, edge.to
            ),
            StepEvent::Accepted { edge } => format!(
                "Adding edge ({}, {}) with weight {} to the MST",
                edge.from, edge.to, edge.weight
            ),
            StepEvent::Explored { edge } => format!(
                "Exploring edge ({}, {}) with weight {}",
                edge.from, edge.to, edge.weight
            ),
            StepEvent::Final { total_weight } => {
                format!("MST complete with total weight: {total_weight}")
            }
        }
    }
}

/// Full copy of the algorithm state at one step.
///
/// Owns everything it describes; later steps never alter it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Vertex being processed. `None` only on the final step.
    pub focus: Option<VertexId>,
    pub visited: BTreeSet<VertexId>,
    pub tree_edges: Vec<Edge>,
    pub total_weight: Weight,
    /// Frontier contents in extraction order.
    pub frontier: Vec<FrontierEntry>,
    pub message: String,
    pub event: StepEvent,
}

impl Snapshot {
    pub fn kind(&self) -> StepKind {
        self.event.kind()
    }

    pub fn is_final(&self) -> bool {
        matches!(self.event, StepEvent::Final { .. })
    }

    /// Whether `vertex` was in the tree at this step.
    pub fn is_visited(&self, vertex: &VertexId) -> bool {
        self.visited.contains(vertex)
    }

    /// Whether the undirected edge `a`-`b` was in the tree at this step.
    pub fn in_tree(&self, a: &VertexId, b: &VertexId) -> bool {
        self.tree_edges.iter().any(|e| e.connects(a, b))
    }
}
