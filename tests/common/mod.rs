//! Shared helpers for datasource integration tests

use std::sync::Arc;
use vivo_ldf::{MockTransport, TriplePattern, VivoConfig, VivoSparqlDatasource};

pub const ENDPOINT: &str = "https://vivo.example.edu/api/sparqlQuery";

pub fn config() -> VivoConfig {
    VivoConfig::new(ENDPOINT, "vivo_root@example.edu", "rootpw")
}

/// A distinct single-predicate pattern per index.
pub fn pattern(i: usize) -> TriplePattern {
    TriplePattern::new(format!("{{?s <http://vivoweb.org/ontology/core#p{}> ?o}}", i))
}

pub fn datasource(
    config: &VivoConfig,
    transport: MockTransport,
) -> (VivoSparqlDatasource, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    let ds = VivoSparqlDatasource::new(config, transport.clone())
        .expect("test config carries credentials");
    (ds, transport)
}
