//! Keyword assembly from section headers and defined terms.

use topikhukum_extractor::{collect_terms, detect_definitions, split_and_dedupe};

use crate::config::KeywordConfig;

/// Combine split headers and collected terms into the lowercased keyword list.
///
/// Headers go through [`split_and_dedupe`] first; terms are appended in
/// record order. Blank entries are dropped.
///
/// # Examples
/// ```
/// use topikhukum_pipeline::keywords::assemble_keywords;
///
/// let headers = vec!["BAB I - KETENTUAN UMUM".to_string()];
/// let terms = vec!["NPWP".to_string()];
/// assert_eq!(assemble_keywords(&headers, &terms, " - "), vec!["bab i", "ketentuan umum", "npwp"]);
/// ```
pub fn assemble_keywords(headers: &[String], terms: &[String], delimiter: &str) -> Vec<String> {
    split_and_dedupe(headers, delimiter)
        .iter()
        .chain(terms)
        .filter(|keyword| !keyword.trim().is_empty())
        .map(|keyword| keyword.to_lowercase())
        .collect()
}

/// Keywords of one document: its headers plus the terms defined in Pasal 1.
pub fn document_keywords(headers: &[String], first_article: &str, config: &KeywordConfig) -> Vec<String> {
    let records = detect_definitions(first_article);
    let terms = collect_terms(&records, config.term_mode);
    tracing::debug!(
        definitions = records.len(),
        terms = terms.len(),
        mode = %config.term_mode,
        "collected definition terms"
    );
    assemble_keywords(headers, &terms, &config.header_delimiter)
}
