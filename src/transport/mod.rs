//! Outbound SPARQL transport
//!
//! Two implementations:
//! - `HttpTransport`: reqwest GET requests (production)
//! - `MockTransport`: preconfigured bodies keyed by query (testing)

mod http;
mod mock;
mod traits;

pub use http::HttpTransport;
pub use mock::{count_body, MockTransport};
pub use traits::{SparqlRequest, SparqlTransport, TransportError, RDF_ACCEPT, SPARQL_RESULTS_JSON};
