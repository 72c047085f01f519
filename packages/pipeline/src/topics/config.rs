use std::fmt;

use url::Url;

use crate::config::{parse_url, parsed_or, required};
use crate::error::Result;

/// Configuration for the Azure OpenAI chat deployment used for topics.
#[derive(Clone)]
pub struct LlmConfig {
    pub endpoint: Url,
    pub api_key: String,
    pub api_version: String,
    pub deployment: String,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"[redacted]")
            .field("api_version", &self.api_version)
            .field("deployment", &self.deployment)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl LlmConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            endpoint: parse_url(&required(&lookup, "AZURE_OPENAI_ENDPOINT_TEXT")?)?,
            api_key: required(&lookup, "AZURE_OPENAI_KEY_TEXT")?,
            api_version: required(&lookup, "AZURE_OPENAI_API_VERSION")?,
            deployment: required(&lookup, "AZURE_OPENAI_CHAT_DEPLOYMENT")?,
            temperature: parsed_or(&lookup, "LLM_TEMPERATURE", 0.5),
            top_p: parsed_or(&lookup, "LLM_TOP_P", 0.0),
            max_tokens: parsed_or(&lookup, "LLM_MAX_TOKENS", 500),
            timeout_secs: parsed_or(&lookup, "LLM_TIMEOUT_SECS", 120),
        })
    }

    /// Create a config builder for testing.
    pub fn builder(endpoint: Url, api_key: impl Into<String>) -> LlmConfigBuilder {
        LlmConfigBuilder {
            endpoint,
            api_key: api_key.into(),
            api_version: "2024-02-01".into(),
            deployment: "gpt-4o".into(),
            temperature: 0.5,
            top_p: 0.0,
            max_tokens: 500,
            timeout_secs: 120,
        }
    }
}

/// Builder for constructing `LlmConfig` in tests.
pub struct LlmConfigBuilder {
    endpoint: Url,
    api_key: String,
    api_version: String,
    deployment: String,
    temperature: f64,
    top_p: f64,
    max_tokens: u32,
    timeout_secs: u64,
}

impl LlmConfigBuilder {
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = deployment.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn build(self) -> LlmConfig {
        LlmConfig {
            endpoint: self.endpoint,
            api_key: self.api_key,
            api_version: self.api_version,
            deployment: self.deployment,
            temperature: self.temperature,
            top_p: self.top_p,
            max_tokens: self.max_tokens,
            timeout_secs: self.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lookup_defaults() {
        let config = LlmConfig::from_lookup(|name| match name {
            "AZURE_OPENAI_ENDPOINT_TEXT" => Some("https://example.openai.azure.com".into()),
            "AZURE_OPENAI_KEY_TEXT" => Some("key".into()),
            "AZURE_OPENAI_API_VERSION" => Some("2024-02-01".into()),
            "AZURE_OPENAI_CHAT_DEPLOYMENT" => Some("gpt-4o".into()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.temperature, 0.5);
        assert_eq!(config.top_p, 0.0);
        assert_eq!(config.max_tokens, 500);
        assert!(!format!("{config:?}").contains("\"key\""));
    }

    #[test]
    fn test_from_lookup_requires_key() {
        let err = LlmConfig::from_lookup(|name| match name {
            "AZURE_OPENAI_ENDPOINT_TEXT" => Some("https://example.openai.azure.com".into()),
            _ => None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("AZURE_OPENAI_KEY_TEXT"));
    }
}
