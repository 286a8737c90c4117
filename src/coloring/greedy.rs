//! Static-order greedy coloring: natural order and Welsh-Powell.

use std::cmp::Reverse;

use tracing::debug;

use super::palette::{FreeColors, UNCOLORED};
use super::Coloring;
use crate::graph::CanonicalGraph;

/// Colors vertices `0..n` in index order, each with the smallest color not
/// already taken by a colored neighbor.
///
/// Uses at most `Δ + 1` colors.
pub fn greedy(graph: &CanonicalGraph) -> Coloring {
    let coloring = color_in_order(graph, 0..graph.vertex_count());
    debug!(colors = coloring.color_count(), "greedy finished");
    coloring
}

/// Welsh-Powell: greedy over vertices sorted by degree, highest first.
///
/// The sort is stable, so equal-degree vertices keep their index order.
pub fn welsh_powell(graph: &CanonicalGraph) -> Coloring {
    let mut order: Vec<usize> = (0..graph.vertex_count()).collect();
    order.sort_by_key(|&v| Reverse(graph.degree(v)));
    let coloring = color_in_order(graph, order);
    debug!(colors = coloring.color_count(), "welsh-powell finished");
    coloring
}

fn color_in_order<I>(graph: &CanonicalGraph, order: I) -> Coloring
where
    I: IntoIterator<Item = usize>,
{
    let n = graph.vertex_count();
    let mut colors = vec![UNCOLORED; n];
    let mut free = FreeColors::with_capacity(graph.max_degree() + 1);
    for v in order {
        colors[v] = free.smallest_free(&colors, graph.neighbors(v));
    }
    Coloring::from_vec(colors)
}
