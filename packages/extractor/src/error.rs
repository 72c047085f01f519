//! Error types for the extractor.
//!
//! Parsing itself never fails; errors only arise when interpreting
//! user-supplied settings such as the term collection mode.

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractorError {
    /// Unknown term collection mode.
    #[error("Unknown term mode: '{0}'. Expected 'term' or 'short-term'")]
    UnknownTermMode(String),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtractorError::UnknownTermMode("abbrev".to_string());
        assert!(err.to_string().contains("abbrev"));
        assert!(err.to_string().contains("short-term"));
    }
}
