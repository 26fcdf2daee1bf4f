//! Prim's algorithm with snapshot recording.

use std::collections::BTreeSet;

use mst_graph::{Edge, SpanningTree, VertexId, Weight, WeightedGraph};

use crate::error::{Result, TraceError};
use crate::frontier::{Frontier, FrontierEntry};
use crate::snapshot::{Snapshot, StepEvent};
use crate::trace::Trace;

/// Output of a completed run: the tree itself plus the trace that led to it.
#[derive(Debug, Clone)]
pub struct PrimRun {
    pub tree: SpanningTree,
    pub trace: Trace,
}

/// Runs Prim's algorithm from a root vertex and records a snapshot for every
/// start, rejection, acceptance, exploration and the final result.
pub struct PrimTracer<'g, G: WeightedGraph> {
    graph: &'g G,
    root: VertexId,
    visited: BTreeSet<VertexId>,
    tree_edges: Vec<Edge>,
    total_weight: Weight,
    frontier: Frontier,
    snapshots: Vec<Snapshot>,
}

impl<'g, G: WeightedGraph> PrimTracer<'g, G> {
    /// Prepare a run. Fails if `root` is not a vertex of `graph`.
    pub fn new(graph: &'g G, root: impl Into<VertexId>) -> Result<Self> {
        let root = root.into();
        if !graph.contains_vertex(&root) {
            return Err(TraceError::InvalidRoot(root));
        }

        let mut visited = BTreeSet::new();
        visited.insert(root.clone());

        Ok(Self {
            graph,
            root,
            visited,
            tree_edges: Vec::new(),
            total_weight: 0.0,
            frontier: Frontier::new(),
            snapshots: Vec::new(),
        })
    }

    /// Run to completion.
    pub fn run(mut self) -> PrimRun {
        let graph = self.graph;
        let root = self.root.clone();
        let vertex_count = graph.vertex_count();

        for (neighbor, weight) in graph.neighbors(&root) {
            self.frontier
                .push(FrontierEntry::new(weight, root.clone(), neighbor.clone()));
        }
        self.record(Some(root.clone()), StepEvent::Start { root: root.clone() });

        while self.visited.len() < vertex_count {
            let Some(FrontierEntry { weight, from, to }) = self.frontier.pop() else {
                break;
            };
            let edge = Edge::new(from.clone(), to.clone(), weight);

            // Stale entry: `to` joined through a lighter edge after this was queued.
            if self.visited.contains(&to) {
                self.record(Some(from), StepEvent::Rejected { edge });
                continue;
            }

            self.visited.insert(to.clone());
            self.tree_edges.push(edge.clone());
            self.total_weight += weight;
            self.record(Some(to.clone()), StepEvent::Accepted { edge });

            for (neighbor, weight) in graph.neighbors(&to) {
                if self.visited.contains(neighbor) {
                    continue;
                }
                self.frontier
                    .push(FrontierEntry::new(weight, to.clone(), neighbor.clone()));
                self.record(
                    Some(to.clone()),
                    StepEvent::Explored {
                        edge: Edge::new(to.clone(), neighbor.clone(), weight),
                    },
                );
            }
        }

        if self.visited.len() < vertex_count {
            tracing::warn!(
                root = %self.root,
                reached = self.visited.len(),
                vertices = vertex_count,
                "graph is disconnected; tree spans only the root's component"
            );
        }

        let total_weight = self.total_weight;
        self.record(None, StepEvent::Final { total_weight });

        tracing::info!(
            root = %self.root,
            edges = self.tree_edges.len(),
            total_weight,
            steps = self.snapshots.len(),
            "Prim run complete"
        );

        PrimRun {
            tree: SpanningTree {
                edges: self.tree_edges,
                total_weight,
            },
            trace: Trace::new(self.root, self.snapshots),
        }
    }

    fn record(&mut self, focus: Option<VertexId>, event: StepEvent) {
        let frontier = match event {
            StepEvent::Final { .. } => Vec::new(),
            _ => self.frontier.view(),
        };
        let message = event.describe();
        tracing::debug!(step = self.snapshots.len(), kind = %event.kind(), "{message}");

        self.snapshots.push(Snapshot {
            focus,
            visited: self.visited.clone(),
            tree_edges: self.tree_edges.clone(),
            total_weight: self.total_weight,
            frontier,
            message,
            event,
        });
    }
}

/// Run Prim from `root` and return the recorded trace.
pub fn build_trace<G: WeightedGraph>(graph: &G, root: impl Into<VertexId>) -> Result<Trace> {
    Ok(PrimTracer::new(graph, root)?.run().trace)
}

/// Run Prim from `root` and return only the resulting tree.
pub fn minimum_spanning_tree<G: WeightedGraph>(
    graph: &G,
    root: impl Into<VertexId>,
) -> Result<SpanningTree> {
    Ok(PrimTracer::new(graph, root)?.run().tree)
}
