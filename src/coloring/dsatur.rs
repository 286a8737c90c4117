//! DSATUR: greedy coloring with a dynamic, saturation-driven vertex order.
//!
//! The saturation of an uncolored vertex is the number of distinct colors
//! among its colored neighbors. At every step the uncolored vertex with the
//! largest `(saturation, degree)` is colored next; ties go to the lowest index.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::palette::{FreeColors, UNCOLORED};
use super::Coloring;
use crate::graph::CanonicalGraph;

/// Colors `graph` with the DSATUR heuristic.
///
/// \(O(n^2 + m \log \Delta)\) with a linear scan for the next vertex.
pub fn dsatur(graph: &CanonicalGraph) -> Coloring {
    let n = graph.vertex_count();
    if n == 0 {
        return Coloring::default();
    }

    let mut state = Saturation::new(graph);

    // The first vertex is the highest-degree one, lowest index among ties.
    let first = (0..n).fold(0, |best, v| {
        if graph.degree(v) > graph.degree(best) {
            v
        } else {
            best
        }
    });
    state.assign(first, 0);

    for _ in 1..n {
        let Some(v) = state.select() else {
            break;
        };
        let color = state.free.smallest_free(&state.colors, graph.neighbors(v));
        state.assign(v, color);
    }

    let coloring = Coloring::from_vec(state.colors);
    debug!(colors = coloring.color_count(), "dsatur finished");
    coloring
}

struct Saturation<'g> {
    graph: &'g CanonicalGraph,
    colors: Vec<usize>,
    /// Distinct colors seen among colored neighbors, per vertex.
    neighbor_colors: Vec<BTreeSet<usize>>,
    free: FreeColors,
}

impl<'g> Saturation<'g> {
    fn new(graph: &'g CanonicalGraph) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            colors: vec![UNCOLORED; n],
            neighbor_colors: vec![BTreeSet::new(); n],
            free: FreeColors::with_capacity(graph.max_degree() + 1),
        }
    }

    fn assign(&mut self, v: usize, color: usize) {
        trace!(vertex = v, color, saturation = self.neighbor_colors[v].len(), "dsatur assign");
        self.colors[v] = color;
        for &w in self.graph.neighbors(v) {
            if self.colors[w] == UNCOLORED {
                self.neighbor_colors[w].insert(color);
            }
        }
    }

    /// Uncolored vertex with the largest `(saturation, degree)`, lowest index on ties.
    fn select(&self) -> Option<usize> {
        let mut best: Option<(usize, (usize, usize))> = None;
        for v in 0..self.colors.len() {
            if self.colors[v] != UNCOLORED {
                continue;
            }
            let key = (self.neighbor_colors[v].len(), self.graph.degree(v));
            match best {
                Some((_, best_key)) if key <= best_key => {}
                _ => best = Some((v, key)),
            }
        }
        best.map(|(v, _)| v)
    }
}
