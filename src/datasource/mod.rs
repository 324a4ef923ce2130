//! Datasources backed by remote SPARQL endpoints

mod endpoint;
mod response;
mod traits;
mod vivo;

pub use endpoint::{EndpointCredentials, QueryEndpoint};
pub use traits::{Capability, DatasourceError, DatasourceResult, PatternCountSource};
pub use vivo::{VivoSparqlDatasource, COUNT_QUERY_TIMEOUT, FALLBACK_COUNT};
