//! Acyclicity Checker - Kahn's algorithm over a submitted pipeline graph.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use super::graph::{Edge, NodeId};

/// Counts and verdict for a submitted graph.
///
/// `num_nodes` and `num_edges` are the raw input lengths. De-duplication of
/// node ids and filtering of dangling edges only affect `is_dag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphAnalysis {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}

/// Checker for directed cycles in a pipeline graph.
///
/// All functions are pure. Each call builds its own node set, adjacency
/// map, in-degree map and worklist, so concurrent calls share nothing.
pub struct AcyclicityChecker;

impl AcyclicityChecker {
    /// Returns true if the graph formed by `nodes` and `edges` has no
    /// directed cycle.
    ///
    /// # Edge Cases
    /// - Empty node set: always acyclic
    /// - Duplicate node ids: collapse to one node
    /// - Edges with an endpoint outside `nodes`: ignored
    /// - Self-loop: a cycle
    pub fn is_acyclic(nodes: &[NodeId], edges: &[Edge]) -> bool {
        if nodes.is_empty() {
            return true;
        }

        let unique = Self::unique_ids(nodes);
        Self::drain(&unique, edges) == unique.len()
    }

    /// Number of nodes removed by Kahn's algorithm before the worklist runs dry.
    ///
    /// Equals the number of unique node ids exactly when the graph is a DAG.
    pub fn processed_count(nodes: &[NodeId], edges: &[Edge]) -> usize {
        let unique = Self::unique_ids(nodes);
        Self::drain(&unique, edges)
    }

    /// Computes the raw counts and the acyclicity verdict in one pass.
    pub fn analyze(nodes: &[NodeId], edges: &[Edge]) -> GraphAnalysis {
        GraphAnalysis {
            num_nodes: nodes.len(),
            num_edges: edges.len(),
            is_dag: Self::is_acyclic(nodes, edges),
        }
    }

    fn unique_ids(nodes: &[NodeId]) -> HashSet<&str> {
        nodes.iter().map(NodeId::as_str).collect()
    }

    fn drain(unique: &HashSet<&str>, edges: &[Edge]) -> usize {
        let mut adjacency: HashMap<&str, Vec<&str>> =
            unique.iter().map(|id| (*id, Vec::new())).collect();
        let mut in_degree: HashMap<&str, usize> = unique.iter().map(|id| (*id, 0)).collect();

        for edge in edges {
            let (source, target) = (edge.source.as_str(), edge.target.as_str());
            if !unique.contains(source) || !unique.contains(target) {
                continue;
            }
            if let Some(targets) = adjacency.get_mut(source) {
                targets.push(target);
            }
            if let Some(degree) = in_degree.get_mut(target) {
                *degree += 1;
            }
        }

        let mut worklist: VecDeque<&str> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(id, _)| *id)
            .collect();
        let mut processed = 0;

        while let Some(current) = worklist.pop_front() {
            processed += 1;

            let Some(neighbors) = adjacency.get(current) else {
                continue;
            };
            for &neighbor in neighbors {
                if let Some(degree) = in_degree.get_mut(neighbor) {
                    *degree -= 1;
                    if *degree == 0 {
                        worklist.push_back(neighbor);
                    }
                }
            }
        }

        processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(names: &[&str]) -> Vec<NodeId> {
        names.iter().map(|n| NodeId::new(*n)).collect()
    }

    fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
        pairs.iter().map(|(s, t)| Edge::new(*s, *t)).collect()
    }

    #[test]
    fn empty_graph_is_acyclic() {
        assert!(AcyclicityChecker::is_acyclic(&[], &[]));
    }

    #[test]
    fn empty_node_set_ignores_edges() {
        let edges = edges(&[("a", "b"), ("b", "a"), ("c", "c")]);
        assert!(AcyclicityChecker::is_acyclic(&[], &edges));
    }

    #[test]
    fn nodes_without_edges_are_acyclic() {
        let nodes = ids(&["a", "b", "c"]);
        assert!(AcyclicityChecker::is_acyclic(&nodes, &[]));
        assert_eq!(AcyclicityChecker::processed_count(&nodes, &[]), 3);
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let nodes = ids(&["a"]);
        let edges = edges(&[("a", "a")]);
        assert!(!AcyclicityChecker::is_acyclic(&nodes, &edges));
        assert_eq!(AcyclicityChecker::processed_count(&nodes, &edges), 0);
    }

    #[test]
    fn self_loop_downstream_of_dag_is_a_cycle() {
        let nodes = ids(&["a", "b"]);
        let edges = edges(&[("a", "b"), ("b", "b")]);
        assert!(!AcyclicityChecker::is_acyclic(&nodes, &edges));
        assert_eq!(AcyclicityChecker::processed_count(&nodes, &edges), 1);
    }

    #[test]
    fn chain_is_acyclic_and_fully_processed() {
        let nodes = ids(&["A", "B", "C", "D"]);
        let edges = edges(&[("A", "B"), ("B", "C"), ("C", "D")]);
        assert!(AcyclicityChecker::is_acyclic(&nodes, &edges));
        assert_eq!(AcyclicityChecker::processed_count(&nodes, &edges), 4);
    }

    #[test]
    fn three_cycle_is_detected() {
        let nodes = ids(&["A", "B", "C"]);
        let edges = edges(&[("A", "B"), ("B", "C"), ("C", "A")]);
        assert!(!AcyclicityChecker::is_acyclic(&nodes, &edges));
    }

    #[test]
    fn shared_target_is_acyclic() {
        let nodes = ids(&["A", "B", "C"]);
        let edges = edges(&[("A", "B"), ("B", "C"), ("A", "C")]);
        assert!(AcyclicityChecker::is_acyclic(&nodes, &edges));
    }

    #[test]
    fn cycle_leaves_upstream_nodes_processed() {
        // X feeds into the A-B-C cycle; only X drains
        let nodes = ids(&["X", "A", "B", "C"]);
        let edges = edges(&[("X", "A"), ("A", "B"), ("B", "C"), ("C", "A")]);
        assert!(!AcyclicityChecker::is_acyclic(&nodes, &edges));
        assert_eq!(AcyclicityChecker::processed_count(&nodes, &edges), 1);
    }

    #[test]
    fn dangling_edge_does_not_change_result() {
        let nodes = ids(&["A", "B", "C"]);
        let base = edges(&[("A", "B"), ("B", "C")]);
        let mut with_dangling = base.clone();
        with_dangling.push(Edge::new("ghost", "A"));
        with_dangling.push(Edge::new("C", "ghost"));

        assert_eq!(
            AcyclicityChecker::is_acyclic(&nodes, &base),
            AcyclicityChecker::is_acyclic(&nodes, &with_dangling)
        );
        assert!(AcyclicityChecker::is_acyclic(&nodes, &with_dangling));
    }

    #[test]
    fn dangling_edge_cannot_close_a_cycle() {
        // ghost -> A and B -> ghost would form a cycle through ghost if it were a node
        let nodes = ids(&["A", "B"]);
        let edges = edges(&[("A", "B"), ("B", "ghost"), ("ghost", "A")]);
        assert!(AcyclicityChecker::is_acyclic(&nodes, &edges));
    }

    #[test]
    fn parallel_edges_in_dag_stay_acyclic() {
        let nodes = ids(&["A", "B"]);
        let edges = edges(&[("A", "B"), ("A", "B")]);
        assert!(AcyclicityChecker::is_acyclic(&nodes, &edges));
        assert_eq!(AcyclicityChecker::processed_count(&nodes, &edges), 2);
    }

    #[test]
    fn parallel_edges_in_cycle_stay_cyclic() {
        let nodes = ids(&["A", "B"]);
        let edges = edges(&[("A", "B"), ("A", "B"), ("B", "A")]);
        assert!(!AcyclicityChecker::is_acyclic(&nodes, &edges));
    }

    #[test]
    fn duplicate_node_ids_collapse() {
        let nodes = ids(&["A", "B", "A", "B"]);
        let edges = edges(&[("A", "B")]);
        assert!(AcyclicityChecker::is_acyclic(&nodes, &edges));
        assert_eq!(AcyclicityChecker::processed_count(&nodes, &edges), 2);
    }

    #[test]
    fn analyze_reports_raw_counts() {
        let nodes = ids(&["A", "B", "A"]);
        let edges = edges(&[("A", "B"), ("B", "missing"), ("A", "B")]);
        let analysis = AcyclicityChecker::analyze(&nodes, &edges);

        assert_eq!(analysis.num_nodes, 3);
        assert_eq!(analysis.num_edges, 3);
        assert!(analysis.is_dag);
    }

    #[test]
    fn analyze_empty_graph() {
        let analysis = AcyclicityChecker::analyze(&[], &[]);
        assert_eq!(
            analysis,
            GraphAnalysis {
                num_nodes: 0,
                num_edges: 0,
                is_dag: true,
            }
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let nodes = ids(&["A", "B", "C"]);
        let edges = edges(&[("A", "B"), ("B", "C"), ("C", "A")]);
        let first = AcyclicityChecker::is_acyclic(&nodes, &edges);
        let second = AcyclicityChecker::is_acyclic(&nodes, &edges);
        assert_eq!(first, second);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Property tests
    // ─────────────────────────────────────────────────────────────────────

    const NAMES: &[&str] = &["a", "b", "c", "d", "e", "f"];

    fn graph_strategy() -> impl Strategy<Value = (Vec<NodeId>, Vec<Edge>)> {
        let nodes = prop::collection::vec(prop::sample::select(NAMES), 0..8)
            .prop_map(|names| names.into_iter().map(NodeId::new).collect::<Vec<_>>());
        let edges = prop::collection::vec(
            (prop::sample::select(NAMES), prop::sample::select(NAMES)),
            0..12,
        )
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(s, t)| Edge::new(s, t))
                .collect::<Vec<_>>()
        });
        (nodes, edges)
    }

    proptest! {
        #[test]
        fn result_is_invariant_under_permutation(
            (nodes, edges) in graph_strategy(),
            node_shift in 0usize..8,
            edge_shift in 0usize..12,
        ) {
            let mut shuffled_nodes = nodes.clone();
            let mut shuffled_edges = edges.clone();
            shuffled_nodes.reverse();
            shuffled_edges.reverse();
            if !shuffled_nodes.is_empty() {
                let len = shuffled_nodes.len();
                shuffled_nodes.rotate_left(node_shift % len);
            }
            if !shuffled_edges.is_empty() {
                let len = shuffled_edges.len();
                shuffled_edges.rotate_left(edge_shift % len);
            }

            prop_assert_eq!(
                AcyclicityChecker::is_acyclic(&nodes, &edges),
                AcyclicityChecker::is_acyclic(&shuffled_nodes, &shuffled_edges)
            );
        }

        #[test]
        fn edges_into_known_nodes_from_unknown_sources_are_ignored(
            (nodes, edges) in graph_strategy(),
            target in prop::sample::select(NAMES),
        ) {
            let mut with_dangling = edges.clone();
            with_dangling.push(Edge::new("outsider", target));

            prop_assert_eq!(
                AcyclicityChecker::is_acyclic(&nodes, &edges),
                AcyclicityChecker::is_acyclic(&nodes, &with_dangling)
            );
        }

        #[test]
        fn processed_count_never_exceeds_unique_nodes((nodes, edges) in graph_strategy()) {
            let unique: HashSet<&NodeId> = nodes.iter().collect();
            prop_assert!(AcyclicityChecker::processed_count(&nodes, &edges) <= unique.len());
        }

        #[test]
        fn analysis_counts_match_input_lengths((nodes, edges) in graph_strategy()) {
            let analysis = AcyclicityChecker::analyze(&nodes, &edges);
            prop_assert_eq!(analysis.num_nodes, nodes.len());
            prop_assert_eq!(analysis.num_edges, edges.len());
        }
    }
}
