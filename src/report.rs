//! Timing and result reporting.
//!
//! A [`Report`] carries what a caller shows after a run: the strategy, the
//! graph size, the number of colors, how long the strategy took, and
//! optionally the validity check and the per-vertex assignment in external
//! labels. It renders as plain text (`Display`), JSON, or a color-coded
//! terminal listing.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::coloring::{is_valid, Algorithm, Coloring};
use crate::graph::{CanonicalGraph, ExternalId, VertexMap};

/// Largest graph whose assignment is rendered with terminal colors.
pub const ANSI_LISTING_LIMIT: usize = 10;

const PALETTE: [&str; 12] = [
    "\x1b[31m", // red
    "\x1b[32m", // green
    "\x1b[33m", // yellow
    "\x1b[34m", // blue
    "\x1b[35m", // magenta
    "\x1b[36m", // cyan
    "\x1b[91m", // bright red
    "\x1b[92m", // bright green
    "\x1b[93m", // bright yellow
    "\x1b[94m", // bright blue
    "\x1b[95m", // bright magenta
    "\x1b[96m", // bright cyan
];
const RESET: &str = "\x1b[0m";

/// Runs `f` and returns its result with the wall-clock time it took.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// One vertex and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assignment {
    /// External label of the vertex.
    pub vertex: ExternalId,
    /// Assigned color.
    pub color: usize,
}

/// Outcome of one coloring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Strategy that produced the coloring.
    pub algorithm: Algorithm,
    /// Vertex count.
    pub vertices: usize,
    /// Undirected edge count.
    pub edges: usize,
    /// Number of colors used.
    pub colors: usize,
    /// Time spent in the strategy, in seconds.
    pub elapsed_seconds: f64,
    /// Result of the validity check, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    /// Per-vertex assignment, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment: Option<Vec<Assignment>>,
}

impl Report {
    /// Summarizes a finished run.
    pub fn new(
        algorithm: Algorithm,
        graph: &CanonicalGraph,
        coloring: &Coloring,
        elapsed: Duration,
    ) -> Self {
        Self {
            algorithm,
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            colors: coloring.color_count(),
            elapsed_seconds: elapsed.as_secs_f64(),
            valid: None,
            assignment: None,
        }
    }

    /// Records whether `coloring` is proper for `graph`.
    #[must_use]
    pub fn with_validity(mut self, graph: &CanonicalGraph, coloring: &Coloring) -> Self {
        self.valid = Some(is_valid(graph, coloring));
        self
    }

    /// Records the assignment in external labels.
    #[must_use]
    pub fn with_assignment(mut self, coloring: &Coloring, mapping: &VertexMap) -> Self {
        self.assignment = Some(
            coloring
                .assignments(mapping)
                .map(|(vertex, color)| Assignment { vertex, color })
                .collect(),
        );
        self
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Color-coded listing of the assignment, if one was recorded.
    pub fn ansi_listing(&self) -> Option<AnsiListing<'_>> {
        self.assignment
            .as_deref()
            .map(|assignment| AnsiListing { assignment })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Vertices: {}", self.vertices)?;
        writeln!(f, "Colors used: {}", self.colors)?;
        write!(f, "Time: {:.6}s", self.elapsed_seconds)?;
        if let Some(valid) = self.valid {
            write!(f, "\nValid coloring: {}", if valid { "yes" } else { "no" })?;
        }
        if let Some(assignment) = &self.assignment {
            write!(f, "\nVertex -> Color")?;
            for a in assignment {
                write!(f, "\n{} -> {}", a.vertex, a.color)?;
            }
        }
        Ok(())
    }
}

/// Terminal rendering of an assignment, one ANSI color per color class.
///
/// Colors cycle through a 12-entry palette; graphs above
/// [`ANSI_LISTING_LIMIT`] vertices render as a one-line notice.
#[derive(Debug, Clone, Copy)]
pub struct AnsiListing<'a> {
    assignment: &'a [Assignment],
}

impl fmt::Display for AnsiListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.assignment.len() > ANSI_LISTING_LIMIT {
            return f.write_str("(colored listing hidden: graph too large)");
        }
        f.write_str("Colored vertices:")?;
        for a in self.assignment {
            let ansi = PALETTE[a.color % PALETTE.len()];
            write!(f, "\n{ansi}{} -> color {}{RESET}", a.vertex, a.color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (CanonicalGraph, VertexMap, Coloring) {
        let graph = CanonicalGraph::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
        let mapping = VertexMap::from_sorted_ids(vec![1, 2, 3]);
        let coloring = Coloring::from_vec(vec![0, 1, 2]);
        (graph, mapping, coloring)
    }

    #[test]
    fn measure_returns_the_value() {
        let (value, elapsed) = measure(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn plain_text_report() {
        let (graph, mapping, coloring) = triangle();
        let report = Report::new(Algorithm::Exact, &graph, &coloring, Duration::from_micros(1500))
            .with_validity(&graph, &coloring)
            .with_assignment(&coloring, &mapping);

        let text = report.to_string();
        assert_eq!(
            text,
            "Algorithm: brute\nVertices: 3\nColors used: 3\nTime: 0.001500s\n\
             Valid coloring: yes\nVertex -> Color\n1 -> 0\n2 -> 1\n3 -> 2"
        );
    }

    #[test]
    fn invalid_coloring_is_reported() {
        let (graph, _, _) = triangle();
        let bad = Coloring::from_vec(vec![0, 0, 1]);
        let report = Report::new(Algorithm::Greedy, &graph, &bad, Duration::ZERO).with_validity(&graph, &bad);
        assert_eq!(report.valid, Some(false));
        assert!(report.to_string().ends_with("Valid coloring: no"));
    }

    #[test]
    fn json_omits_unrequested_fields() {
        let (graph, _, coloring) = triangle();
        let report = Report::new(Algorithm::WelshPowell, &graph, &coloring, Duration::ZERO);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["algorithm"], "welsh");
        assert_eq!(value["colors"], 3);
        assert_eq!(value["edges"], 3);
        assert!(value.get("valid").is_none());
        assert!(value.get("assignment").is_none());
    }

    #[test]
    fn ansi_listing_colors_each_class() {
        let (graph, mapping, coloring) = triangle();
        let report = Report::new(Algorithm::Dsatur, &graph, &coloring, Duration::ZERO)
            .with_assignment(&coloring, &mapping);

        let listing = report.ansi_listing().unwrap().to_string();
        assert!(listing.starts_with("Colored vertices:"));
        assert!(listing.contains("\x1b[31m1 -> color 0\x1b[0m"));
        assert!(listing.contains("\x1b[33m3 -> color 2\x1b[0m"));
    }

    #[test]
    fn ansi_listing_hides_large_graphs() {
        let graph = CanonicalGraph::empty(11);
        let coloring = Coloring::from_vec(vec![0; 11]);
        let report = Report::new(Algorithm::Greedy, &graph, &coloring, Duration::ZERO)
            .with_assignment(&coloring, &VertexMap::identity(11));
        assert_eq!(
            report.ansi_listing().unwrap().to_string(),
            "(colored listing hidden: graph too large)"
        );
        assert!(Report::new(Algorithm::Greedy, &graph, &coloring, Duration::ZERO)
            .ansi_listing()
            .is_none());
    }
}
