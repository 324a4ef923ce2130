//! vivo-ldf: Linked Data Fragments datasource for VIVO SPARQL endpoints
//!
//! Lets a fragments-style paging engine read triples from a VIVO research
//! information system whose SPARQL API is gated by account credentials.
//!
//! # Core Concepts
//!
//! - **Query builder**: turns a triple pattern into bounded `CONSTRUCT` and
//!   `SELECT COUNT` queries, scoped to the configured named graphs
//! - **Count cache**: remembers large approximate counts for a few hours so
//!   paging does not re-run expensive `COUNT(*)` queries
//! - **Datasource**: wires both to an endpoint through a pluggable transport
//!
//! # Example
//!
//! ```
//! use vivo_ldf::{build_count_query, TriplePattern};
//!
//! let query = build_count_query(&TriplePattern::new("{?s ?p ?o}"));
//! assert_eq!(query, "SELECT (COUNT(*) as ?total) WHERE {?s ?p ?o}");
//! ```

pub mod cache;
pub mod config;
pub mod datasource;
pub mod query;
pub mod transport;

pub use cache::{CountCache, CountCacheConfig};
pub use config::{ConfigError, VivoConfig};
pub use datasource::{
    Capability, DatasourceError, DatasourceResult, EndpointCredentials, PatternCountSource,
    VivoSparqlDatasource,
};
pub use query::{build_construct_query, build_count_query, NamedGraphSet, TriplePattern};
pub use transport::{HttpTransport, MockTransport, SparqlRequest, SparqlTransport, TransportError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
