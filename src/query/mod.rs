//! Endpoint query building
//!
//! Turns triple patterns into the literal SPARQL strings sent to the
//! endpoint: `CONSTRUCT` for data pages and `SELECT COUNT` for cardinality.

mod builder;
mod pattern;

pub use builder::{build_construct_query, build_count_query};
pub use pattern::{NamedGraphSet, TriplePattern};
