//! # `chromatic` - Vertex Coloring Toolkit
//!
//! Reads an undirected, unweighted graph from flat text and colors its
//! vertices so that no edge joins two vertices of the same color.
//!
//! ## Architecture
//!
//! Two layers, loaded in this order:
//!
//! 1. **Graph loading** ([`graph`]): parses edge lists, `n m` headers and
//!    DIMACS `p edge` / `e u v` files into a [`CanonicalGraph`] over dense
//!    indices, plus the [`VertexMap`] back to the labels used in the file.
//! 2. **Coloring** ([`coloring`]): four strategies over the canonical graph
//!    and a validator.
//!    - [`greedy`]: index order, smallest free color
//!    - [`welsh_powell`]: same rule, highest degree first
//!    - [`dsatur`]: next vertex chosen by saturation degree
//!    - [`exact`]: backtracking search for the chromatic number, refused above
//!      a vertex limit
//!
//! [`report`] measures a run and renders the outcome.
//!
//! ## Guarantees
//!
//! - Every strategy returns a proper coloring for every canonical graph.
//! - The heuristics use at most `Δ + 1` colors.
//! - `exact` returns exactly the chromatic number of colors.
//! - Loading is deterministic and independent of the order of edge lines.
//!
//! ## Example
//!
//! ```rust
//! use chromatic::{coloring, graph};
//!
//! let loaded = graph::parse_str("p edge 4 4\ne 1 2\ne 2 3\ne 3 4\ne 4 1\n").unwrap();
//! let colors = coloring::dsatur(&loaded.graph);
//!
//! assert!(coloring::is_valid(&loaded.graph, &colors));
//! assert_eq!(colors.color_count(), 2);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod coloring;
pub mod graph;
pub mod report;

pub use coloring::{
    color_with, dsatur, exact, greedy, is_valid, welsh_powell, Algorithm, Coloring,
    SizeLimitExceeded, DEFAULT_VERTEX_LIMIT,
};
pub use graph::{load, CanonicalGraph, LoadError, LoadedGraph, VertexMap};
pub use report::{measure, Report};
