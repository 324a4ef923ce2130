//! reqwest-backed transport

use super::traits::{SparqlRequest, SparqlTransport, TransportError};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::debug;

/// HTTP transport over a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SparqlTransport for HttpTransport {
    async fn send(&self, request: &SparqlRequest) -> Result<String, TransportError> {
        let mut builder = self
            .client
            .get(request.url.clone())
            .header(ACCEPT, request.accept);
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), accept = request.accept, "endpoint responded");
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}
