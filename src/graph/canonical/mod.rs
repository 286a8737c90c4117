//! The canonical undirected graph every coloring algorithm reads.
//!
//! Storage is CSR (compressed sparse row):
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `targets`: neighbor indices of every row, each row sorted ascending
//!
//! Both directions of an undirected edge are stored, so `neighbors(v)` is the
//! full neighborhood of `v` and `degree(v)` is a subtraction.

mod invariant;

use invariant::graph_assert_msg;

/// A simple undirected graph over dense indices `0..n`.
///
/// No self-loops, no parallel edges, and `j ∈ neighbors(i) ⇔ i ∈ neighbors(j)`.
/// The graph is immutable once built.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_edges` | \(O(n + m \log m)\) | Sorts and dedups each row |
/// | `neighbors` | \(O(1)\) | Returns a slice of the row |
/// | `degree` | \(O(1)\) | Offset difference |
/// | `has_edge` | \(O(\log \text{degree})\) | Binary search of the sorted row |
/// | `max_degree` | \(O(n)\) | Scans the offsets |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalGraph {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl CanonicalGraph {
    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            offsets: vec![0; vertex_count + 1],
            targets: Vec::new(),
        }
    }

    /// Builds a graph from undirected index pairs.
    ///
    /// Self-loops are dropped; repeated pairs (in either orientation) collapse
    /// into one edge.
    ///
    /// # Panics
    /// Panics if any endpoint is `>= vertex_count`.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut rows = vec![Vec::<usize>::new(); vertex_count];
        for (u, v) in edges {
            assert!(
                u < vertex_count && v < vertex_count,
                "edge {u}-{v} is out of bounds for n={vertex_count}"
            );
            if u == v {
                continue;
            }
            rows[u].push(v);
            rows[v].push(u);
        }
        Self::from_rows(rows)
    }

    /// Builds a graph from adjacency lists.
    ///
    /// Lists need not be symmetric: `v ∈ lists[u]` adds the undirected edge
    /// `{u, v}`. Self-loops and duplicates are discarded.
    ///
    /// # Panics
    /// Panics if any neighbor index is out of bounds.
    pub fn from_adjacency(lists: &[Vec<usize>]) -> Self {
        let n = lists.len();
        Self::from_edges(
            n,
            lists
                .iter()
                .enumerate()
                .flat_map(|(u, nbrs)| nbrs.iter().map(move |&v| (u, v))),
        )
    }

    fn from_rows(mut rows: Vec<Vec<usize>>) -> Self {
        let mut offsets = Vec::with_capacity(rows.len() + 1);
        offsets.push(0);
        let mut total = 0usize;
        for row in &mut rows {
            row.sort_unstable();
            row.dedup();
            total += row.len();
            offsets.push(total);
        }

        let mut targets = Vec::with_capacity(total);
        for row in rows {
            targets.extend(row);
        }

        let graph = Self { offsets, targets };
        graph_assert_msg(graph.targets.len() % 2 == 0, "undirected edges are stored twice");
        graph_assert_msg(graph.is_symmetric(), "adjacency must be symmetric");
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len() - 1
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Neighbors of `vertex`, sorted ascending.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        assert!(vertex < self.vertex_count(), "vertex {vertex} out of bounds");
        &self.targets[self.offsets[vertex]..self.offsets[vertex + 1]]
    }

    /// Degree of `vertex`.
    pub fn degree(&self, vertex: usize) -> usize {
        assert!(vertex < self.vertex_count(), "vertex {vertex} out of bounds");
        self.offsets[vertex + 1] - self.offsets[vertex]
    }

    /// Largest degree in the graph, `0` when there are no vertices.
    pub fn max_degree(&self) -> usize {
        self.offsets
            .windows(2)
            .map(|w| w[1] - w[0])
            .max()
            .unwrap_or(0)
    }

    /// Checks if the edge `{u, v}` exists.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        assert!(u < self.vertex_count(), "vertex {u} out of bounds");
        assert!(v < self.vertex_count(), "vertex {v} out of bounds");
        self.neighbors(u).binary_search(&v).is_ok()
    }

    /// Every undirected edge once, as `(u, v)` with `u < v`, in row order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.vertex_count()).flat_map(move |u| {
            self.neighbors(u)
                .iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }

    fn is_symmetric(&self) -> bool {
        (0..self.vertex_count()).all(|u| {
            self.neighbors(u)
                .iter()
                .all(|&v| v != u && self.neighbors(v).binary_search(&u).is_ok())
        })
    }

    /// Computes basic graph statistics.
    pub fn statistics(&self) -> GraphStatistics {
        let vertex_count = self.vertex_count();
        let edge_count = self.edge_count();

        let mut degrees: Vec<usize> = (0..vertex_count).map(|v| self.degree(v)).collect();
        degrees.sort_unstable();

        let (min_degree, max_degree) = match (degrees.first(), degrees.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (0, 0),
        };
        let median_degree = if degrees.is_empty() {
            0
        } else if degrees.len() % 2 == 0 {
            let a = degrees[degrees.len() / 2 - 1];
            let b = degrees[degrees.len() / 2];
            (a + b) / 2
        } else {
            degrees[degrees.len() / 2]
        };
        #[allow(clippy::cast_precision_loss)]
        let average_degree = if vertex_count == 0 {
            0.0
        } else {
            (2 * edge_count) as f64 / vertex_count as f64
        };

        GraphStatistics {
            vertex_count,
            edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree,
        }
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
    /// Minimum degree over all vertices.
    pub min_degree: usize,
    /// Maximum degree over all vertices.
    pub max_degree: usize,
    /// Median degree over all vertices.
    pub median_degree: usize,
    /// Average degree \(= 2m/n\).
    pub average_degree: f64,
}

#[cfg(test)]
mod tests;
