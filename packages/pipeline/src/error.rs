use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search index error (status {status}): {message}")]
    Search { status: u16, message: String },

    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("document {slug} has no {section} section")]
    MissingSection { slug: String, section: String },

    #[error("LLM API error (status {status}): {message}")]
    LlmApiError { status: u16, message: String },

    #[error("LLM rate limited, retry after {retry_after_secs}s")]
    LlmRateLimited { retry_after_secs: u64 },

    #[error("failed to parse LLM response: {0}")]
    LlmResponseParse(String),

    #[error("LLM returned empty response")]
    LlmEmptyResponse,

    #[error("graph database error (status {status}): {message}")]
    GraphHttp { status: u16, message: String },

    #[error("graph statement failed: {}", errors.join(", "))]
    Graph { errors: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("all {failed} documents failed")]
    BatchFailed { failed: usize },

    #[error(transparent)]
    Extractor(#[from] topikhukum_extractor::ExtractorError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_error_joins_messages() {
        let err = PipelineError::Graph {
            errors: vec!["a".into(), "b".into()],
        };
        assert_eq!(err.to_string(), "graph statement failed: a, b");
    }

    #[test]
    fn test_missing_section_display() {
        let err = PipelineError::MissingSection {
            slug: "uu-no-6-tahun-1983".into(),
            section: "considerant".into(),
        };
        assert_eq!(
            err.to_string(),
            "document uu-no-6-tahun-1983 has no considerant section"
        );
    }
}
