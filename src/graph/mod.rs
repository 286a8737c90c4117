//! Graph ingestion and the canonical representation.
//!
//! - `mapping`: external labels ⇄ dense indices
//! - `canonical`: the symmetric CSR graph the coloring strategies read
//! - `loader`: text parsing into the two above

pub mod canonical;
pub mod loader;
pub mod mapping;

pub use canonical::{CanonicalGraph, GraphStatistics};
pub use loader::{load, parse_str, LoadError, LoadedGraph, MAX_DECLARED_VERTICES};
pub use mapping::{ExternalId, VertexMap};
