//! Text ingestion: edge lists, `"n m"` headers and DIMACS.
//!
//! Three flat-text encodings are accepted, and may even be mixed in one file:
//!
//! 1. Plain edge list, one `u v` pair per line.
//! 2. The same list preceded by an `n m` header line.
//! 3. DIMACS: `p edge n m` followed by `e u v` lines.
//!
//! The first bare pair seen before any edge is accepted and before any `p`
//! line is held back as a possible `n m` header. It is a header when nothing
//! else in the input is an edge, or when the remaining lines are exactly the
//! `m` edges it announces over labels no larger than `n`. Otherwise it is an
//! ordinary edge, which keeps `1 2 / 2 3 / 1 3` a triangle.
//!
//! Lines starting with `c` are comments. Lines that do not fit any form
//! (wrong token count, non-integer tokens) are skipped; loading only fails when
//! nothing usable remains.
//!
//! The loader renumbers vertices densely in ascending order of their external
//! labels, so the resulting [`CanonicalGraph`] depends only on the set of edges,
//! not on the order of the edge lines.

mod line;

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::graph::canonical::CanonicalGraph;
use crate::graph::mapping::{ExternalId, VertexMap};
use line::{parse_id, Line};

/// A graph read from text, together with the label mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedGraph {
    /// The dense, symmetric graph.
    pub graph: CanonicalGraph,
    /// External label of every dense index.
    pub mapping: VertexMap,
    /// Vertex count declared by a header or `p` line, if any.
    pub declared_vertices: Option<usize>,
}

impl LoadedGraph {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }
}

/// The error type for graph loading.
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be read.
    Io(io::Error),
    /// Neither an edge nor a vertex count could be extracted.
    Format(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "failed to read graph: {err}"),
            LoadError::Format(msg) => write!(f, "invalid graph format: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Format(_) => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Loads a graph from a file.
///
/// # Errors
/// [`LoadError::Io`] if the file cannot be opened or read,
/// [`LoadError::Format`] if it holds no edge and no vertex count.
pub fn load(path: impl AsRef<Path>) -> Result<LoadedGraph, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading graph");
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

/// Parses a graph held in memory.
///
/// # Errors
/// [`LoadError::Format`] if the text holds no edge and no vertex count.
pub fn parse_str(text: &str) -> Result<LoadedGraph, LoadError> {
    from_reader(text.as_bytes())
}

/// Parses a graph from any buffered reader.
///
/// # Errors
/// [`LoadError::Io`] on read failure (including invalid UTF-8),
/// [`LoadError::Format`] if the input holds no edge and no vertex count.
pub fn from_reader<R: BufRead>(reader: R) -> Result<LoadedGraph, LoadError> {
    let mut collector = EdgeCollector::default();
    for (idx, line) in reader.lines().enumerate() {
        collector.push(idx + 1, &line?);
    }
    collector.finish()
}

/// Declared vertex counts above this are rejected rather than padded in.
pub const MAX_DECLARED_VERTICES: usize = 1 << 24;

/// A bare `n m` line that may turn out to be a header.
#[derive(Debug, Clone, Copy)]
struct HeaderCandidate {
    line_no: usize,
    count: ExternalId,
    announced: Option<ExternalId>,
}

impl HeaderCandidate {
    /// Whether `edges` (plus `self_loops` dropped lines) are what this header announces.
    fn describes(&self, edges: &[(ExternalId, ExternalId)], self_loops: usize) -> bool {
        if edges.is_empty() {
            return true;
        }
        let labels = 0..=self.count;
        self.count > 0
            && self.announced.and_then(|m| usize::try_from(m).ok()) == Some(edges.len() + self_loops)
            && edges
                .iter()
                .all(|(u, v)| labels.contains(u) && labels.contains(v))
    }
}

/// Accumulates accepted edges and the declared vertex count, line by line.
#[derive(Debug, Default)]
struct EdgeCollector {
    edges: Vec<(ExternalId, ExternalId)>,
    declared: Option<usize>,
    candidate: Option<HeaderCandidate>,
    self_loops: usize,
}

impl EdgeCollector {
    fn push(&mut self, line_no: usize, raw: &str) {
        match Line::classify(raw) {
            Line::Ignored => {}
            Line::Problem(count) => {
                if let Some(count) = count {
                    debug!(line_no, count, "problem line declares vertex count");
                    self.declared = Some(count);
                } else {
                    debug!(line_no, "problem line without a vertex count");
                }
            }
            Line::Edge(u, v) => self.accept(line_no, parse_id(u), parse_id(v)),
            Line::Pair(a, b) => {
                let first = parse_id(a);
                let second = parse_id(b);
                match first {
                    Some(count)
                        if self.candidate.is_none()
                            && self.edges.is_empty()
                            && self.declared.is_none() =>
                    {
                        // Decided in `finish`, once the rest of the input is known.
                        self.candidate = Some(HeaderCandidate {
                            line_no,
                            count,
                            announced: second,
                        });
                    }
                    _ => self.accept(line_no, first, second),
                }
            }
            Line::Malformed => debug!(line_no, "skipping line with unexpected token count"),
        }
    }

    fn accept(&mut self, line_no: usize, u: Option<ExternalId>, v: Option<ExternalId>) {
        match (u, v) {
            (Some(u), Some(v)) if u == v => {
                self.self_loops += 1;
                debug!(line_no, vertex = u, "dropping self-loop");
            }
            (Some(u), Some(v)) => self.edges.push((u, v)),
            _ => debug!(line_no, "skipping line with non-integer endpoint"),
        }
    }

    fn resolve_candidate(&mut self) {
        let Some(candidate) = self.candidate.take() else {
            return;
        };
        // A `p` line always wins over a bare header.
        if self.declared.is_none() && candidate.describes(&self.edges, self.self_loops) {
            // A negative count declares nothing.
            self.declared = usize::try_from(candidate.count).ok();
            debug!(
                line_no = candidate.line_no,
                count = candidate.count,
                "treating leading pair as vertex-count header"
            );
            return;
        }
        self.accept(candidate.line_no, Some(candidate.count), candidate.announced);
    }

    fn finish(mut self) -> Result<LoadedGraph, LoadError> {
        self.resolve_candidate();

        let declared = self.declared.filter(|&n| n > 0);
        if self.edges.is_empty() && declared.is_none() {
            return Err(LoadError::Format(
                "no valid edge or vertex count found".to_string(),
            ));
        }
        if let Some(count) = declared.filter(|&n| n > MAX_DECLARED_VERTICES) {
            return Err(LoadError::Format(format!(
                "declared vertex count {count} exceeds the maximum of {MAX_DECLARED_VERTICES}"
            )));
        }

        let mut ids: BTreeSet<ExternalId> = self.edges.iter().flat_map(|&(u, v)| [u, v]).collect();
        if let Some(count) = declared {
            // Isolated vertices implied by the count start at 0 only when the
            // edges themselves use label 0.
            let base: ExternalId = if ids.first() == Some(&0) { 0 } else { 1 };
            let count = ExternalId::try_from(count).unwrap_or(ExternalId::MAX);
            let end = base.saturating_add(count);
            ids.extend(base..end);
        }

        let mapping = VertexMap::from_sorted_ids(ids.into_iter().collect());
        let edges = self.edges.iter().filter_map(|&(u, v)| {
            match (mapping.index_of(u), mapping.index_of(v)) {
                (Some(i), Some(j)) if i != j => Some((i, j)),
                _ => None,
            }
        });
        let graph = CanonicalGraph::from_edges(mapping.len(), edges);

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            declared = ?declared,
            self_loops = self.self_loops,
            "graph loaded"
        );

        Ok(LoadedGraph {
            graph,
            mapping,
            declared_vertices: declared,
        })
    }
}
