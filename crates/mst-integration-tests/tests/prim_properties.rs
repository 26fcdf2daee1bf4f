//! Prim trace properties checked against Kruskal and graph search.

use mst_graph::{kruskal, WeightedGraph};
use mst_integration_tests::{any_graph, component, connected_graph, example_graph};
use mst_trace::{build_trace, minimum_spanning_tree, StepEvent, StepKind};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn weight_matches_kruskal_from_every_root(graph in connected_graph()) {
        let expected = kruskal(&graph).total_weight;
        for root in graph.vertices() {
            let trace = build_trace(&graph, root.clone()).unwrap();
            let last = trace.final_snapshot();
            let summed: f64 = last.tree_edges.iter().map(|e| e.weight).sum();

            prop_assert_eq!(last.total_weight, expected);
            prop_assert_eq!(summed, last.total_weight);
            prop_assert_eq!(&last.event, &StepEvent::Final { total_weight: expected });
        }
    }

    #[test]
    fn tree_spans_root_component(graph in any_graph()) {
        for root in graph.vertices() {
            let trace = build_trace(&graph, root.clone()).unwrap();
            let last = trace.final_snapshot();

            prop_assert_eq!(&last.visited, &component(&graph, root));
            prop_assert_eq!(last.tree_edges.len(), last.visited.len() - 1);
        }
    }

    #[test]
    fn snapshots_grow_monotonically(graph in any_graph()) {
        let root = graph.vertices().next().unwrap().clone();
        let trace = build_trace(&graph, root).unwrap();

        for pair in trace.snapshots().windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            prop_assert!(prev.visited.is_subset(&next.visited));
            prop_assert!(next.tree_edges.starts_with(&prev.tree_edges));
            prop_assert!(prev.total_weight <= next.total_weight);
        }
        for snapshot in &trace {
            prop_assert_eq!(snapshot.tree_edges.len(), snapshot.visited.len() - 1);
        }
    }

    #[test]
    fn rejected_edges_never_join_tree(graph in connected_graph()) {
        let root = graph.vertices().next().unwrap().clone();
        let trace = build_trace(&graph, root).unwrap();
        let last = trace.final_snapshot();

        for snapshot in trace.iter().filter(|s| s.kind() == StepKind::Rejected) {
            let edge = snapshot.event.edge().unwrap();
            prop_assert!(snapshot.is_visited(&edge.to));
            prop_assert!(!last.in_tree(&edge.from, &edge.to));
        }
    }

    #[test]
    fn frontier_is_sorted_and_cleared_at_end(graph in any_graph()) {
        let root = graph.vertices().next().unwrap().clone();
        let trace = build_trace(&graph, root).unwrap();

        for snapshot in &trace {
            prop_assert!(snapshot.frontier.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(snapshot.message.clone(), snapshot.event.describe());
        }
        prop_assert_eq!(trace.first().kind(), StepKind::Start);
        prop_assert!(trace.final_snapshot().is_final());
        prop_assert!(trace.final_snapshot().frontier.is_empty());
        prop_assert_eq!(trace.iter().filter(|s| s.is_final()).count(), 1);
    }

    #[test]
    fn tree_and_trace_agree(graph in connected_graph()) {
        let root = graph.vertices().next().unwrap().clone();
        let tree = minimum_spanning_tree(&graph, root.clone()).unwrap();
        let trace = build_trace(&graph, root).unwrap();
        prop_assert_eq!(tree, trace.spanning_tree());
    }
}

#[test]
fn example_graph_scenario() {
    let graph = example_graph();
    let trace = build_trace(&graph, "A").unwrap();

    let accepted: Vec<_> = trace
        .iter()
        .filter_map(|s| match &s.event {
            StepEvent::Accepted { edge } => {
                Some((edge.from.to_string(), edge.to.to_string(), edge.weight))
            }
            _ => None,
        })
        .collect();
    let expected = [
        ("A", "C", 2.0),
        ("C", "B", 1.0),
        ("B", "D", 5.0),
        ("D", "E", 2.0),
        ("E", "F", 3.0),
    ]
    .map(|(f, t, w)| (f.to_string(), t.to_string(), w));
    assert_eq!(accepted, expected);

    let rejected: Vec<_> = trace
        .iter()
        .filter(|s| s.kind() == StepKind::Rejected)
        .map(|s| s.message.as_str())
        .collect();
    assert_eq!(rejected, ["Edge (A, B) rejected: B is already in the MST"]);

    assert_eq!(
        trace.final_snapshot().message,
        "MST complete with total weight: 13"
    );
    assert_eq!(kruskal(&graph).total_weight, 13.0);
}

#[test]
fn trace_serializes_for_external_viewers() {
    let graph = example_graph();
    let trace = build_trace(&graph, "A").unwrap();
    let json = serde_json::to_value(&trace).unwrap();

    let snapshots = json["snapshots"].as_array().unwrap();
    assert_eq!(snapshots.len(), trace.len());
    assert_eq!(snapshots[0]["event"]["kind"], "Start");
    assert_eq!(snapshots[0]["event"]["root"], "A");
}
