//! Datasource configuration
//!
//! Loaded from JSON (`.json`) or YAML (`.yaml`, `.yml`):
//!
//! ```yaml
//! endpoint: https://vivo.example.edu/api/sparqlQuery
//! email: vivo_root@example.edu
//! password: secret
//! graphs:
//!   - http://vitro.mannlib.cornell.edu/default/vitro-kb-2
//! cache:
//!   capacity: 1000
//!   ttl_secs: 10800
//!   admission_threshold: 100000
//! ```

use crate::cache::CountCacheConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Settings for one VIVO SPARQL datasource.
///
/// Credentials are optional here so that a config missing them still
/// parses; the datasource refuses to construct without them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VivoConfig {
    /// Endpoint URL; any query string or fragment is discarded
    pub endpoint: String,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Named graphs to scope CONSTRUCT queries to, in order
    pub graphs: Vec<String>,
    pub cache: CountCacheConfig,
}

impl VivoConfig {
    pub fn new(
        endpoint: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            email: Some(email.into()),
            password: Some(password.into()),
            ..Self::default()
        }
    }

    pub fn with_graphs(mut self, graphs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.graphs = graphs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cache(mut self, cache: CountCacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Load a config file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&text),
            Some("yaml") | Some("yml") => Self::from_yaml(&text),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn json_config_with_defaults() {
        let config = VivoConfig::from_json(
            r#"{"endpoint": "http://localhost:8080/vivo/api/sparqlQuery",
                "email": "admin@example.org", "password": "pw"}"#,
        )
        .unwrap();

        assert_eq!(config.email.as_deref(), Some("admin@example.org"));
        assert!(config.graphs.is_empty());
        assert_eq!(config.cache, CountCacheConfig::default());
    }

    #[test]
    fn yaml_config_overrides_cache() {
        let config = VivoConfig::from_yaml(
            "endpoint: http://localhost/sparql\n\
             graphs: [\"http://g1\", \"http://g2\"]\n\
             cache:\n  ttl_secs: 60\n",
        )
        .unwrap();

        assert_eq!(config.graphs, vec!["http://g1", "http://g2"]);
        assert_eq!(config.cache.ttl, Duration::from_secs(60));
        assert_eq!(config.password, None);
    }

    #[test]
    fn load_picks_format_from_extension() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "endpoint: http://localhost/sparql\nemail: a@b.c\npassword: x").unwrap();

        let config = VivoConfig::load(file.path()).unwrap();
        assert_eq!(config.endpoint, "http://localhost/sparql");
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let err = VivoConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "toml"));
    }
}
