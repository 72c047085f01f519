use std::fmt;

use topikhukum_extractor::TermMode;
use url::Url;

use crate::error::{PipelineError, Result};
use crate::topics::LlmConfig;

/// Default index holding the source legal documents.
pub const DEFAULT_SOURCE_INDEX: &str = "produk_hukum_new";

/// Default index receiving generated topics and keywords.
pub const DEFAULT_TOPIC_INDEX: &str = "produk_hukum_topik";

/// Default delimiter inside compound section headers.
pub const DEFAULT_HEADER_DELIMITER: &str = " - ";

/// Parse an endpoint URL, mapping failures to `PipelineError::InvalidUrl`.
pub fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw.trim()).map_err(|source| PipelineError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

pub(crate) fn required<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| PipelineError::Config(format!("{name} not set")))
}

pub(crate) fn parsed_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Connection settings for the OpenSearch cluster.
#[derive(Clone)]
pub struct SearchConfig {
    pub base_url: Url,
    pub username: Option<String>,
    pub password: Option<String>,
    pub source_index: String,
    pub topic_index: String,
    pub verify_certs: bool,
    pub timeout_secs: u64,
}

impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .field("source_index", &self.source_index)
            .field("topic_index", &self.topic_index)
            .field("verify_certs", &self.verify_certs)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SearchConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// `OPENSEARCH_URL` wins over `OPENSEARCH_HOST`/`OPENSEARCH_PORT`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match lookup("OPENSEARCH_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => parse_url(&url)?,
            None => {
                let host = required(&lookup, "OPENSEARCH_HOST")?;
                let port: u16 = match lookup("OPENSEARCH_PORT") {
                    Some(raw) => raw.trim().parse().map_err(|_| {
                        PipelineError::Config(format!("OPENSEARCH_PORT is not a port: {raw}"))
                    })?,
                    None => 9200,
                };
                parse_url(&format!("https://{}:{port}", host.trim()))?
            }
        };

        Ok(Self {
            base_url,
            username: lookup("OPENSEARCH_USERNAME"),
            password: lookup("OPENSEARCH_PASSWORD"),
            source_index: lookup("OPENSEARCH_SOURCE_INDEX")
                .unwrap_or_else(|| DEFAULT_SOURCE_INDEX.into()),
            topic_index: lookup("OPENSEARCH_TOPIC_INDEX")
                .unwrap_or_else(|| DEFAULT_TOPIC_INDEX.into()),
            verify_certs: lookup("OPENSEARCH_VERIFY_CERTS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(false),
            timeout_secs: parsed_or(&lookup, "OPENSEARCH_TIMEOUT_SECS", 30),
        })
    }

    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            username: None,
            password: None,
            source_index: DEFAULT_SOURCE_INDEX.into(),
            topic_index: DEFAULT_TOPIC_INDEX.into(),
            verify_certs: false,
            timeout_secs: 30,
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_indices(mut self, source: impl Into<String>, topic: impl Into<String>) -> Self {
        self.source_index = source.into();
        self.topic_index = topic.into();
        self
    }
}

/// Connection settings for the Neo4j HTTP API.
#[derive(Clone)]
pub struct GraphConfig {
    pub uri: Url,
    pub username: String,
    pub password: String,
    pub database: String,
    pub timeout_secs: u64,
}

impl fmt::Debug for GraphConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphConfig")
            .field("uri", &self.uri.as_str())
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("database", &self.database)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GraphConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            uri: parse_url(&required(&lookup, "NEO4J_URI")?)?,
            username: required(&lookup, "NEO4J_USERNAME")?,
            password: required(&lookup, "NEO4J_PASSWORD")?,
            database: lookup("NEO4J_DATABASE").unwrap_or_else(|| "neo4j".into()),
            timeout_secs: parsed_or(&lookup, "NEO4J_TIMEOUT_SECS", 30),
        })
    }

    pub fn new(uri: Url, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            uri,
            username: username.into(),
            password: password.into(),
            database: "neo4j".into(),
            timeout_secs: 30,
        }
    }
}

/// How keywords are assembled from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordConfig {
    pub term_mode: TermMode,
    pub header_delimiter: String,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            term_mode: TermMode::default(),
            header_delimiter: DEFAULT_HEADER_DELIMITER.into(),
        }
    }
}

impl KeywordConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let term_mode = match lookup("KEYWORD_TERM_MODE") {
            Some(raw) => raw.parse()?,
            None => TermMode::default(),
        };

        Ok(Self {
            term_mode,
            header_delimiter: lookup("KEYWORD_HEADER_DELIMITER")
                .unwrap_or_else(|| DEFAULT_HEADER_DELIMITER.into()),
        })
    }

    pub fn with_term_mode(mut self, term_mode: TermMode) -> Self {
        self.term_mode = term_mode;
        self
    }
}

/// Everything the extraction pipeline needs, loaded once at startup.
///
/// The graph settings are only read when graph output is wanted, so
/// `--no-graph` runs work without any `NEO4J_*` variables.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub search: SearchConfig,
    pub llm: LlmConfig,
    pub graph: Option<GraphConfig>,
    pub keywords: KeywordConfig,
}

impl PipelineConfig {
    pub fn from_env(with_graph: bool) -> Result<Self> {
        Self::from_lookup(env_lookup, with_graph)
    }

    pub fn from_lookup<F>(lookup: F, with_graph: bool) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let graph = if with_graph {
            Some(GraphConfig::from_lookup(&lookup)?)
        } else {
            None
        };

        Ok(Self {
            search: SearchConfig::from_lookup(&lookup)?,
            llm: LlmConfig::from_lookup(&lookup)?,
            graph,
            keywords: KeywordConfig::from_lookup(&lookup)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_search_config_from_host_and_port() {
        let config = SearchConfig::from_lookup(lookup_from(&[
            ("OPENSEARCH_HOST", "search.internal"),
            ("OPENSEARCH_PORT", "9201"),
            ("OPENSEARCH_USERNAME", "admin"),
            ("OPENSEARCH_PASSWORD", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://search.internal:9201/");
        assert_eq!(config.username.as_deref(), Some("admin"));
        assert_eq!(config.source_index, DEFAULT_SOURCE_INDEX);
        assert_eq!(config.topic_index, DEFAULT_TOPIC_INDEX);
        assert!(!config.verify_certs);
    }

    #[test]
    fn test_search_config_url_overrides_host() {
        let config = SearchConfig::from_lookup(lookup_from(&[
            ("OPENSEARCH_URL", "http://localhost:9200"),
            ("OPENSEARCH_HOST", "ignored"),
            ("OPENSEARCH_VERIFY_CERTS", "true"),
        ]))
        .unwrap();

        assert_eq!(config.base_url.host_str(), Some("localhost"));
        assert!(config.verify_certs);
    }

    #[test]
    fn test_search_config_requires_host() {
        let err = SearchConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("OPENSEARCH_HOST"));
    }

    #[test]
    fn test_search_config_rejects_bad_port() {
        let err = SearchConfig::from_lookup(lookup_from(&[
            ("OPENSEARCH_HOST", "localhost"),
            ("OPENSEARCH_PORT", "http"),
        ]))
        .unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let search = SearchConfig::new(parse_url("http://localhost:9200").unwrap())
            .with_credentials("admin", "hunter2");
        assert!(!format!("{search:?}").contains("hunter2"));

        let graph = GraphConfig::new(parse_url("http://localhost:7474").unwrap(), "neo4j", "hunter2");
        assert!(!format!("{graph:?}").contains("hunter2"));
    }

    #[test]
    fn test_graph_config_defaults_database() {
        let config = GraphConfig::from_lookup(lookup_from(&[
            ("NEO4J_URI", "http://localhost:7474"),
            ("NEO4J_USERNAME", "neo4j"),
            ("NEO4J_PASSWORD", "pw"),
        ]))
        .unwrap();
        assert_eq!(config.database, "neo4j");
    }

    #[test]
    fn test_graph_config_rejects_invalid_uri() {
        let err = GraphConfig::from_lookup(lookup_from(&[
            ("NEO4J_URI", "not a url"),
            ("NEO4J_USERNAME", "neo4j"),
            ("NEO4J_PASSWORD", "pw"),
        ]))
        .unwrap_err();
        assert!(matches!(err, PipelineError::InvalidUrl { .. }));
    }

    #[test]
    fn test_keyword_config() {
        let config = KeywordConfig::from_lookup(lookup_from(&[("KEYWORD_TERM_MODE", "term")])).unwrap();
        assert_eq!(config.term_mode, TermMode::Term);
        assert_eq!(config.header_delimiter, DEFAULT_HEADER_DELIMITER);

        assert!(KeywordConfig::from_lookup(lookup_from(&[("KEYWORD_TERM_MODE", "x")])).is_err());
        assert_eq!(
            KeywordConfig::from_lookup(lookup_from(&[])).unwrap(),
            KeywordConfig::default()
        );
    }

    fn pipeline_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("OPENSEARCH_URL", "https://search.internal:9200"),
            ("AZURE_OPENAI_ENDPOINT_TEXT", "https://example.openai.azure.com"),
            ("AZURE_OPENAI_KEY_TEXT", "key"),
            ("AZURE_OPENAI_API_VERSION", "2024-02-01"),
            ("AZURE_OPENAI_CHAT_DEPLOYMENT", "gpt-4o"),
        ]
    }

    #[test]
    fn test_pipeline_config_without_graph() {
        let config = PipelineConfig::from_lookup(lookup_from(&pipeline_vars()), false).unwrap();

        assert!(config.graph.is_none());
        assert_eq!(config.llm.deployment, "gpt-4o");
        assert_eq!(config.keywords, KeywordConfig::default());
    }

    #[test]
    fn test_pipeline_config_requires_graph_when_enabled() {
        let mut vars = pipeline_vars();
        assert!(PipelineConfig::from_lookup(lookup_from(&vars), true).is_err());

        vars.extend([
            ("NEO4J_URI", "http://localhost:7474"),
            ("NEO4J_USERNAME", "neo4j"),
            ("NEO4J_PASSWORD", "secret"),
        ]);
        let config = PipelineConfig::from_lookup(lookup_from(&vars), true).unwrap();
        assert_eq!(config.graph.map(|g| g.database), Some("neo4j".to_string()));
    }
}
