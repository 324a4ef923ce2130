//! VivoSparqlDatasource: queryable access to a VIVO SPARQL endpoint
//!
//! VIVO's SPARQL API requires the account email and password as query
//! parameters on every request. Counts for broad patterns are expensive on
//! VIVO, so large counts are cached per datasource instance.

use super::endpoint::{EndpointCredentials, QueryEndpoint};
use super::response::parse_total;
use super::traits::{Capability, DatasourceResult, PatternCountSource};
use crate::cache::CountCache;
use crate::config::VivoConfig;
use crate::query::{build_construct_query, build_count_query, NamedGraphSet, TriplePattern};
use crate::transport::{SparqlRequest, SparqlTransport, RDF_ACCEPT, SPARQL_RESULTS_JSON};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Timeout applied to every count query.
pub const COUNT_QUERY_TIMEOUT: Duration = Duration::from_millis(7500);

/// Count reported when the endpoint's answer cannot be read.
///
/// Non-zero so pagination does not treat the pattern as empty.
pub const FALLBACK_COUNT: u64 = 10;

const CAPABILITIES: [Capability; 4] = [
    Capability::TriplePattern,
    Capability::Limit,
    Capability::Offset,
    Capability::TotalCount,
];

/// Datasource over a credential-gated VIVO SPARQL endpoint.
pub struct VivoSparqlDatasource {
    endpoint: QueryEndpoint,
    graphs: NamedGraphSet,
    count_cache: CountCache,
    transport: Arc<dyn SparqlTransport>,
}

impl VivoSparqlDatasource {
    /// Create a datasource from config.
    ///
    /// Fails without touching the transport if email or password is missing
    /// or the endpoint URL does not parse.
    pub fn new(config: &VivoConfig, transport: Arc<dyn SparqlTransport>) -> DatasourceResult<Self> {
        let credentials =
            EndpointCredentials::new(config.email.as_deref(), config.password.as_deref())?;
        let endpoint = QueryEndpoint::new(&config.endpoint, credentials)?;
        Ok(Self {
            endpoint,
            graphs: NamedGraphSet::new(config.graphs.iter().cloned()),
            count_cache: CountCache::new(config.cache.clone()),
            transport,
        })
    }

    pub fn graphs(&self) -> &NamedGraphSet {
        &self.graphs
    }

    pub fn count_cache(&self) -> &CountCache {
        &self.count_cache
    }

    /// The endpoint URL with any query string or fragment removed.
    pub fn endpoint(&self) -> &str {
        self.endpoint.base().as_str()
    }

    /// Resolve the approximate number of triples matching `pattern`.
    ///
    /// Served from the count cache when possible. Otherwise one count query
    /// is sent; transport errors are returned as-is, while unreadable
    /// answers resolve to [`FALLBACK_COUNT`].
    pub async fn pattern_count(&self, pattern: &TriplePattern) -> DatasourceResult<u64> {
        if let Some(count) = self.count_cache.get(pattern) {
            debug!(pattern = %pattern, count, "count cache hit");
            return Ok(count);
        }
        debug!(pattern = %pattern, "count cache miss");

        let query = build_count_query(pattern);
        let request = SparqlRequest {
            url: self.endpoint.query_url(&query),
            query,
            accept: SPARQL_RESULTS_JSON,
            timeout: Some(COUNT_QUERY_TIMEOUT),
        };
        let body = self.transport.send(&request).await?;

        let count = match parse_total(&body) {
            Some(count) => {
                self.count_cache.put(pattern, count);
                count
            }
            None => {
                warn!(pattern = %pattern, "unreadable count response, using fallback");
                0
            }
        };
        Ok(if count == 0 { FALLBACK_COUNT } else { count })
    }

    /// Build the CONSTRUCT query for one page, scoped to the configured graphs.
    pub fn construct_query(
        &self,
        pattern: &TriplePattern,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> String {
        build_construct_query(pattern, offset, limit, &self.graphs)
    }

    /// Fetch one page of triples as the endpoint's raw RDF body.
    pub async fn fetch_page(
        &self,
        pattern: &TriplePattern,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> DatasourceResult<String> {
        let query = self.construct_query(pattern, offset, limit);
        let request = SparqlRequest {
            url: self.endpoint.query_url(&query),
            query,
            accept: RDF_ACCEPT,
            timeout: None,
        };
        Ok(self.transport.send(&request).await?)
    }
}

#[async_trait]
impl PatternCountSource for VivoSparqlDatasource {
    fn capabilities(&self) -> &[Capability] {
        &CAPABILITIES
    }

    async fn pattern_count(&self, pattern: &TriplePattern) -> DatasourceResult<u64> {
        VivoSparqlDatasource::pattern_count(self, pattern).await
    }

    fn construct_query(
        &self,
        pattern: &TriplePattern,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> String {
        VivoSparqlDatasource::construct_query(self, pattern, offset, limit)
    }
}

impl std::fmt::Debug for VivoSparqlDatasource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VivoSparqlDatasource")
            .field("endpoint", &self.endpoint)
            .field("graphs", &self.graphs)
            .field("count_cache", &self.count_cache)
            .finish()
    }
}
