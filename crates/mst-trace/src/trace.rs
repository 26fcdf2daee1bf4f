//! The ordered, immutable sequence of snapshots from one run.

use mst_graph::{SpanningTree, VertexId};
use serde::Serialize;

use crate::snapshot::Snapshot;

/// Every snapshot of one Prim run, in order.
///
/// Never empty: the first snapshot is the `Start` step and the last is the
/// `Final` step. Only the tracer can build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    root: VertexId,
    snapshots: Vec<Snapshot>,
}

impl Trace {
    pub(crate) fn new(root: VertexId, snapshots: Vec<Snapshot>) -> Self {
        debug_assert!(snapshots.len() >= 2, "trace needs start and final steps");
        Self { root, snapshots }
    }

    /// The vertex the run started from.
    pub fn root(&self) -> &VertexId {
        &self.root
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// The `Start` snapshot.
    pub fn first(&self) -> &Snapshot {
        &self.snapshots[0]
    }

    /// The `Final` snapshot.
    pub fn final_snapshot(&self) -> &Snapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// The tree recorded by the final snapshot.
    pub fn spanning_tree(&self) -> SpanningTree {
        let last = self.final_snapshot();
        SpanningTree {
            edges: last.tree_edges.clone(),
            total_weight: last.total_weight,
        }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
