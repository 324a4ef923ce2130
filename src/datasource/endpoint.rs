//! Endpoint URL and credential handling

use super::traits::DatasourceError;
use std::fmt;
use url::Url;

/// Email and password embedded into every query URL.
#[derive(Clone, PartialEq, Eq)]
pub struct EndpointCredentials {
    email: String,
    password: String,
}

impl EndpointCredentials {
    /// Fails unless both values are present and non-empty.
    pub fn new(email: Option<&str>, password: Option<&str>) -> Result<Self, DatasourceError> {
        match (email, password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Ok(Self {
                    email: email.to_string(),
                    password: password.to_string(),
                })
            }
            _ => Err(DatasourceError::MissingCredentials),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Debug for EndpointCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Base endpoint URL plus the credentials used to query it.
#[derive(Debug, Clone)]
pub struct QueryEndpoint {
    base: Url,
    credentials: EndpointCredentials,
}

impl QueryEndpoint {
    /// Parse `endpoint` after discarding everything from the first `?` or `#`.
    pub fn new(endpoint: &str, credentials: EndpointCredentials) -> Result<Self, DatasourceError> {
        let base = Url::parse(strip_query_and_fragment(endpoint))
            .map_err(|e| DatasourceError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;
        Ok(Self { base, credentials })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `<base>?email=<e>&password=<p>&query=<q>`, each value form-encoded.
    pub fn query_url(&self, query: &str) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("email", &self.credentials.email)
            .append_pair("password", &self.credentials.password)
            .append_pair("query", query);
        url
    }
}

fn strip_query_and_fragment(endpoint: &str) -> &str {
    match endpoint.find(['?', '#']) {
        Some(at) => &endpoint[..at],
        None => endpoint,
    }
}
