//! Transport contract for outbound SPARQL requests

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Accept header for `SELECT` results.
pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// Accept header for `CONSTRUCT` results.
pub const RDF_ACCEPT: &str = "text/turtle;q=1.0,application/n-triples;q=0.7,text/n3;q=0.6";

/// A fully-formed GET request against the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SparqlRequest {
    /// Final URL, credentials and encoded query included
    pub url: Url,
    /// The SPARQL text carried in the `query` parameter
    pub query: String,
    /// Value of the `Accept` header
    pub accept: &'static str,
    /// Per-request timeout; `None` leaves the client default in place
    pub timeout: Option<Duration>,
}

/// Errors raised while talking to the endpoint.
///
/// Timeouts arrive as [`TransportError::Http`] like any other connection
/// failure.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Error accessing SPARQL endpoint: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error accessing SPARQL endpoint: HTTP status {0}")]
    Status(u16),

    #[error("SPARQL endpoint unavailable: {0}")]
    Unavailable(String),
}

/// Sends requests to a SPARQL endpoint.
///
/// Abstracts over transport (HTTP, mock) so the datasource does not depend
/// on how the endpoint is reached.
#[async_trait]
pub trait SparqlTransport: Send + Sync {
    /// Send a request and return the response body.
    ///
    /// Non-success statuses must be reported as errors.
    async fn send(&self, request: &SparqlRequest) -> Result<String, TransportError>;
}
