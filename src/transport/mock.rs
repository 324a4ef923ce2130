//! Mock transport for testing: returns preconfigured bodies per query.

use super::traits::{SparqlRequest, SparqlTransport, TransportError};
use crate::query::{build_count_query, TriplePattern};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

enum MockReply {
    Body(String),
    Status(u16),
}

/// In-memory transport keyed by SPARQL query text.
///
/// Every request is recorded, including ones with no registered reply.
#[derive(Default)]
pub struct MockTransport {
    replies: HashMap<String, MockReply>,
    requests: Mutex<Vec<SparqlRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw response body for a query.
    pub fn with_body(mut self, query: impl Into<String>, body: impl Into<String>) -> Self {
        self.replies.insert(query.into(), MockReply::Body(body.into()));
        self
    }

    /// Register a well-formed count response for a pattern's count query.
    pub fn with_count(self, pattern: &TriplePattern, count: u64) -> Self {
        let query = build_count_query(pattern);
        self.with_body(query, count_body(&count.to_string()))
    }

    /// Register a non-success HTTP status for a query.
    pub fn with_status(mut self, query: impl Into<String>, status: u16) -> Self {
        self.replies.insert(query.into(), MockReply::Status(status));
        self
    }

    /// Requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<SparqlRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl SparqlTransport for MockTransport {
    async fn send(&self, request: &SparqlRequest) -> Result<String, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        match self.replies.get(&request.query) {
            Some(MockReply::Body(body)) => Ok(body.clone()),
            Some(MockReply::Status(code)) => Err(TransportError::Status(*code)),
            None => Err(TransportError::Unavailable(format!(
                "no mock reply for query '{}'",
                request.query
            ))),
        }
    }
}

/// Helper to build a SPARQL JSON results body with a single `total` binding.
pub fn count_body(value: &str) -> String {
    serde_json::json!({
        "head": { "vars": ["total"] },
        "results": {
            "bindings": [{
                "total": {
                    "type": "literal",
                    "datatype": "http://www.w3.org/2001/XMLSchema#integer",
                    "value": value,
                }
            }]
        }
    })
    .to_string()
}
