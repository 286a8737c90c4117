//! Tests for the canonical graph.

use super::*;

#[test]
fn from_edges_symmetrizes_and_dedups() {
    // 0 - 1, 1 - 2, plus the same edges again reversed
    let graph = CanonicalGraph::from_edges(3, [(0, 1), (1, 2), (1, 0), (2, 1)]);

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.neighbors(0), &[1]);
    assert_eq!(graph.neighbors(1), &[0, 2]);
    assert_eq!(graph.neighbors(2), &[1]);
}

#[test]
fn self_loops_are_dropped() {
    let graph = CanonicalGraph::from_edges(2, [(0, 0), (0, 1), (1, 1)]);
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.has_edge(0, 0));
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(1, 0));
}

#[test]
fn from_adjacency_accepts_one_sided_lists() {
    // 0 -> 1,2 only; the reverse direction is implied.
    let adjacency = vec![vec![1, 2], vec![], vec![]];
    let graph = CanonicalGraph::from_adjacency(&adjacency);

    assert_eq!(graph.neighbors(1), &[0]);
    assert_eq!(graph.neighbors(2), &[0]);
    assert_eq!(graph.degree(0), 2);
}

#[test]
fn empty_graph_has_isolated_vertices() {
    let graph = CanonicalGraph::empty(4);
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.max_degree(), 0);
    assert!((0..4).all(|v| graph.neighbors(v).is_empty()));

    let none = CanonicalGraph::empty(0);
    assert!(none.is_empty());
    assert_eq!(none.max_degree(), 0);
    assert_eq!(none.edges().count(), 0);
}

#[test]
fn edges_are_listed_once() {
    let graph = CanonicalGraph::from_edges(4, [(3, 0), (2, 1), (0, 1)]);
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 3), (1, 2)]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn out_of_range_edge_panics() {
    let _ = CanonicalGraph::from_edges(2, [(0, 2)]);
}

#[test]
fn statistics_of_a_star() {
    // center 0 joined to 1, 2, 3
    let graph = CanonicalGraph::from_edges(4, [(0, 1), (0, 2), (0, 3)]);
    let stats = graph.statistics();

    assert_eq!(stats.vertex_count, 4);
    assert_eq!(stats.edge_count, 3);
    assert_eq!(stats.min_degree, 1);
    assert_eq!(stats.max_degree, 3);
    assert_eq!(stats.median_degree, 1); // sorted: 1,1,1,3
    assert!((stats.average_degree - 1.5).abs() < 0.001);
    assert_eq!(graph.max_degree(), 3);
}
