//! Proper-coloring check.

use super::Coloring;
use crate::graph::CanonicalGraph;

/// Returns `true` iff no edge joins two vertices of the same color.
///
/// A coloring whose length differs from the vertex count is never valid.
/// \(O(n + m)\).
pub fn is_valid(graph: &CanonicalGraph, coloring: &Coloring) -> bool {
    is_proper(graph, coloring.as_slice())
}

/// [`is_valid`] over a raw color slice.
pub fn is_proper(graph: &CanonicalGraph, colors: &[usize]) -> bool {
    colors.len() == graph.vertex_count() && graph.edges().all(|(u, v)| colors[u] != colors[v])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_conflicts() {
        let graph = CanonicalGraph::from_edges(3, [(0, 1), (1, 2)]);
        assert!(is_proper(&graph, &[0, 1, 0]));
        assert!(!is_proper(&graph, &[0, 0, 1]));
        assert!(!is_proper(&graph, &[1, 0, 0]));
    }

    #[test]
    fn length_must_match() {
        let graph = CanonicalGraph::from_edges(3, [(0, 1)]);
        assert!(!is_proper(&graph, &[0, 1]));
        assert!(is_proper(&CanonicalGraph::empty(0), &[]));
    }

    #[test]
    fn edgeless_graph_accepts_any_coloring() {
        let graph = CanonicalGraph::empty(3);
        assert!(is_valid(&graph, &Coloring::from_vec(vec![0, 0, 0])));
    }
}
