//! Vertex coloring strategies over a [`CanonicalGraph`].
//!
//! Four strategies share one contract: borrow the graph, return a
//! [`Coloring`] of length `n` using colors `0..k`.
//!
//! | Strategy | Order | Cost | Guarantee |
//! |----------|-------|------|-----------|
//! | [`greedy`] | index | \(O(n + m)\) | \(\le \Delta + 1\) colors |
//! | [`welsh_powell`] | degree, descending | \(O(n \log n + m)\) | \(\le \Delta + 1\) colors |
//! | [`dsatur`] | dynamic, by saturation | \(O(n^2 + m \log \Delta)\) | \(\le \Delta + 1\) colors |
//! | [`exact`] | index, backtracking | exponential | chromatic number |

mod dsatur;
mod exact;
mod greedy;
mod palette;
mod validate;

use serde::Serialize;

pub use dsatur::dsatur;
pub use exact::{exact, SizeLimitExceeded, DEFAULT_VERTEX_LIMIT};
pub use greedy::{greedy, welsh_powell};
pub use validate::{is_proper, is_valid};

use crate::graph::{CanonicalGraph, ExternalId, VertexMap};

/// One color per vertex index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Coloring {
    colors: Vec<usize>,
}

impl Coloring {
    /// Wraps a finished color vector.
    pub fn from_vec(colors: Vec<usize>) -> Self {
        debug_assert!(
            colors.iter().all(|&c| c != palette::UNCOLORED),
            "coloring left a vertex uncolored"
        );
        Self { colors }
    }

    /// Number of colored vertices.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` for the coloring of the empty graph.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn get(&self, vertex: usize) -> usize {
        self.colors[vertex]
    }

    /// Colors in vertex-index order.
    pub fn as_slice(&self) -> &[usize] {
        &self.colors
    }

    /// Number of colors used: one more than the largest color, `0` when empty.
    pub fn color_count(&self) -> usize {
        self.colors.iter().max().map_or(0, |&c| c + 1)
    }

    /// `(external id, color)` pairs in index order.
    ///
    /// # Panics
    /// Panics if `mapping` has fewer entries than the coloring.
    pub fn assignments<'a>(
        &'a self,
        mapping: &'a VertexMap,
    ) -> impl Iterator<Item = (ExternalId, usize)> + 'a {
        assert!(mapping.len() >= self.colors.len(), "mapping too short for coloring");
        self.colors
            .iter()
            .enumerate()
            .map(move |(i, &c)| (mapping.external(i), c))
    }

    /// Consumes the coloring, returning the raw colors.
    pub fn into_vec(self) -> Vec<usize> {
        self.colors
    }
}

/// Selectable coloring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Greedy in index order.
    #[value(name = "greedy")]
    Greedy,
    /// Greedy in descending degree order.
    #[value(name = "welsh")]
    #[serde(rename = "welsh")]
    WelshPowell,
    /// Saturation-degree greedy.
    #[value(name = "dsatur")]
    Dsatur,
    /// Exhaustive backtracking.
    #[value(name = "brute")]
    #[serde(rename = "brute")]
    Exact,
}

impl Algorithm {
    /// All strategies, cheapest first.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Greedy,
        Algorithm::WelshPowell,
        Algorithm::Dsatur,
        Algorithm::Exact,
    ];

    /// Short name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::WelshPowell => "welsh",
            Algorithm::Dsatur => "dsatur",
            Algorithm::Exact => "brute",
        }
    }

    /// Returns `true` for strategies with exponential worst case.
    pub fn is_exhaustive(self) -> bool {
        matches!(self, Algorithm::Exact)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| format!("unknown algorithm `{s}`"))
    }
}

/// Runs `algorithm` on `graph`. `limit` only applies to [`Algorithm::Exact`].
///
/// # Errors
/// [`SizeLimitExceeded`] when exhaustive search is asked for a graph above `limit`.
pub fn color_with(
    algorithm: Algorithm,
    graph: &CanonicalGraph,
    limit: usize,
) -> Result<Coloring, SizeLimitExceeded> {
    match algorithm {
        Algorithm::Greedy => Ok(greedy(graph)),
        Algorithm::WelshPowell => Ok(welsh_powell(graph)),
        Algorithm::Dsatur => Ok(dsatur(graph)),
        Algorithm::Exact => exact(graph, limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_count_is_max_plus_one() {
        assert_eq!(Coloring::default().color_count(), 0);
        assert_eq!(Coloring::from_vec(vec![0, 0]).color_count(), 1);
        assert_eq!(Coloring::from_vec(vec![2, 0, 1]).color_count(), 3);
    }

    #[test]
    fn assignments_use_external_ids() {
        let mapping = VertexMap::from_sorted_ids(vec![3, 8, 40]);
        let coloring = Coloring::from_vec(vec![1, 0, 1]);
        assert_eq!(
            coloring.assignments(&mapping).collect::<Vec<_>>(),
            vec![(3, 1), (8, 0), (40, 1)]
        );
    }

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert!("welsh-powell".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::WelshPowell.to_string(), "welsh");
    }

    #[test]
    fn dispatch_applies_limit_only_to_exact() {
        let graph = CanonicalGraph::empty(5);
        assert!(color_with(Algorithm::Greedy, &graph, 2).is_ok());
        assert!(color_with(Algorithm::Dsatur, &graph, 2).is_ok());
        assert_eq!(
            color_with(Algorithm::Exact, &graph, 2),
            Err(SizeLimitExceeded { vertices: 5, limit: 2 })
        );
    }
}
