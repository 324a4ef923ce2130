//! Datasource capability contract
//!
//! A pagination engine receives a `PatternCountSource` by injection and
//! asks it which capabilities it offers before delegating pattern-bounded
//! retrieval, limits, offsets, or total counts to it.

use crate::query::TriplePattern;
use crate::transport::TransportError;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Features a datasource can offer a pagination engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Retrieval bounded by a triple pattern
    TriplePattern,
    Limit,
    Offset,
    /// Approximate total counts per pattern
    TotalCount,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TriplePattern => write!(f, "triplePattern"),
            Self::Limit => write!(f, "limit"),
            Self::Offset => write!(f, "offset"),
            Self::TotalCount => write!(f, "totalCount"),
        }
    }
}

/// Errors from datasource construction or query resolution.
#[derive(Debug, Error)]
pub enum DatasourceError {
    #[error("Error reading credentials. Set email and password in config")]
    MissingCredentials,

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result type for datasource operations
pub type DatasourceResult<T> = Result<T, DatasourceError>;

/// The contract a SPARQL-backed datasource offers a pagination engine.
#[async_trait]
pub trait PatternCountSource: Send + Sync {
    /// Capabilities this datasource implements
    fn capabilities(&self) -> &[Capability];

    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Resolve the approximate number of triples matching `pattern`.
    async fn pattern_count(&self, pattern: &TriplePattern) -> DatasourceResult<u64>;

    /// Build the query that fetches one page of triples for `pattern`.
    fn construct_query(
        &self,
        pattern: &TriplePattern,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> String;
}
