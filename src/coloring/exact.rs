//! Exhaustive backtracking search for a minimum coloring.
//!
//! For `k = 2, 3, ...` the search walks vertices in index order, tries colors
//! `0..k` at each one, skips colors already used by a colored neighbor, and
//! undoes the assignment on a dead end. The first `k` that admits a complete
//! assignment yields a coloring with exactly the chromatic number of colors.
//!
//! The running time is exponential, so callers must supply a vertex limit;
//! graphs above it are refused before any work is done.

use std::fmt;

use tracing::debug;

use super::palette::UNCOLORED;
use super::Coloring;
use crate::graph::CanonicalGraph;

/// Vertex limit used when the caller does not choose one.
pub const DEFAULT_VERTEX_LIMIT: usize = 12;

/// The error returned when a graph is too large for exhaustive search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimitExceeded {
    /// Vertex count of the refused graph.
    pub vertices: usize,
    /// The limit in force.
    pub limit: usize,
}

impl fmt::Display for SizeLimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graph has {} vertices (> {}); use a heuristic",
            self.vertices, self.limit
        )
    }
}

impl std::error::Error for SizeLimitExceeded {}

/// Computes a coloring with the minimum number of colors.
///
/// # Errors
/// [`SizeLimitExceeded`] if the graph has more than `limit` vertices.
pub fn exact(graph: &CanonicalGraph, limit: usize) -> Result<Coloring, SizeLimitExceeded> {
    let n = graph.vertex_count();
    if n > limit {
        return Err(SizeLimitExceeded { vertices: n, limit });
    }

    let mut search = Search {
        graph,
        colors: vec![UNCOLORED; n],
        nodes: 0,
    };

    // k = 2 also covers edgeless graphs: the search never reaches color 1.
    for k in 2..=n.max(2) {
        search.colors.fill(UNCOLORED);
        let found = search.extend(0, k);
        debug!(k, found, nodes = search.nodes, "exact search pass");
        if found {
            let coloring = Coloring::from_vec(search.colors);
            debug!(colors = coloring.color_count(), "exact search finished");
            return Ok(coloring);
        }
    }

    // Unreachable for a simple graph: k = n always admits the all-distinct coloring.
    Ok(Coloring::from_vec((0..n).collect()))
}

struct Search<'g> {
    graph: &'g CanonicalGraph,
    colors: Vec<usize>,
    nodes: u64,
}

impl Search<'_> {
    /// Tries to color `vertex..n` with colors `0..k`, given `0..vertex` are colored.
    fn extend(&mut self, vertex: usize, k: usize) -> bool {
        self.nodes += 1;
        if vertex == self.colors.len() {
            return true;
        }

        let mut forbidden = vec![false; k];
        for &w in self.graph.neighbors(vertex) {
            let c = self.colors[w];
            if c < k {
                forbidden[c] = true;
            }
        }

        for (color, &blocked) in forbidden.iter().enumerate() {
            if blocked {
                continue;
            }
            self.colors[vertex] = color;
            if self.extend(vertex + 1, k) {
                return true;
            }
            self.colors[vertex] = UNCOLORED;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::is_valid;

    fn complete(n: usize) -> CanonicalGraph {
        CanonicalGraph::from_edges(n, (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v))))
    }

    #[test]
    fn triangle_needs_three() {
        let coloring = exact(&complete(3), DEFAULT_VERTEX_LIMIT).unwrap();
        assert_eq!(coloring.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn complete_graphs_need_n_colors() {
        for n in 1..=7 {
            let graph = complete(n);
            let coloring = exact(&graph, DEFAULT_VERTEX_LIMIT).unwrap();
            assert!(is_valid(&graph, &coloring));
            assert_eq!(coloring.color_count(), n, "K{n}");
        }
    }

    #[test]
    fn edgeless_graphs_need_one_color() {
        assert_eq!(exact(&CanonicalGraph::empty(0), 12).unwrap().color_count(), 0);
        assert_eq!(exact(&CanonicalGraph::empty(1), 12).unwrap().color_count(), 1);
        assert_eq!(exact(&CanonicalGraph::empty(5), 12).unwrap().as_slice(), &[0; 5]);
    }

    #[test]
    fn odd_cycle_needs_three_even_cycle_two() {
        let c5 = CanonicalGraph::from_edges(5, (0..5).map(|v| (v, (v + 1) % 5)));
        let c6 = CanonicalGraph::from_edges(6, (0..6).map(|v| (v, (v + 1) % 6)));
        assert_eq!(exact(&c5, 12).unwrap().color_count(), 3);
        assert_eq!(exact(&c6, 12).unwrap().color_count(), 2);
    }

    #[test]
    fn beats_greedy_on_the_interleaved_crown() {
        let graph = CanonicalGraph::from_edges(6, [(0, 3), (0, 5), (2, 1), (2, 5), (4, 1), (4, 3)]);
        assert_eq!(exact(&graph, 12).unwrap().color_count(), 2);
    }

    #[test]
    fn refuses_graphs_above_the_limit() {
        let graph = CanonicalGraph::empty(13);
        let err = exact(&graph, 12).unwrap_err();
        assert_eq!(err, SizeLimitExceeded { vertices: 13, limit: 12 });
        assert_eq!(err.to_string(), "graph has 13 vertices (> 12); use a heuristic");

        // The limit is inclusive.
        assert!(exact(&CanonicalGraph::empty(12), 12).is_ok());
    }
}
