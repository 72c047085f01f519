//! Term collection policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ExtractorError, Result};
use crate::types::DefinitionRecord;

/// Which field of a definition record feeds the keyword list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermMode {
    /// The full defined term, e.g. "Wajib Pajak".
    Term,

    /// The short form, e.g. "WP".
    #[default]
    ShortTerm,
}

impl TermMode {
    /// Get the string value used in configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Term => "term",
            Self::ShortTerm => "short-term",
        }
    }
}

impl fmt::Display for TermMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TermMode {
    type Err = ExtractorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "term" => Ok(Self::Term),
            "short-term" | "short_term" | "shortterm" => Ok(Self::ShortTerm),
            _ => Err(ExtractorError::UnknownTermMode(s.to_string())),
        }
    }
}

/// Collect the selected field from every record where it is present.
///
/// Order follows the records; duplicates are kept.
pub fn collect_terms(records: &[DefinitionRecord], mode: TermMode) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| match mode {
            TermMode::Term => record.term.clone(),
            TermMode::ShortTerm => record.short_term.clone(),
        })
        .collect()
}
