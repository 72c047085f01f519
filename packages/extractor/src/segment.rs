//! Sentence segmentation on numbered list markers.

use crate::config::{LIST_ITEM_MARKER, WHITESPACE_RUN};

/// Split a block of legal text into candidate sentences.
///
/// Each numbered list item ("1.", "2. ", ...) starts a new sentence.
/// Fragments are trimmed, whitespace runs are collapsed to a single space,
/// and empty fragments are dropped.
///
/// # Examples
/// ```
/// use topikhukum_extractor::segment;
///
/// let sentences = segment("Dalam Undang-Undang ini yang dimaksud dengan:\n1. Pajak\n   adalah pungutan.");
/// assert_eq!(sentences, vec!["Dalam Undang-Undang ini yang dimaksud dengan:", "Pajak adalah pungutan."]);
/// assert!(segment("").is_empty());
/// ```
pub fn segment(text: &str) -> Vec<String> {
    LIST_ITEM_MARKER
        .split(text)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(normalize_whitespace)
        .collect()
}

/// Trim and collapse every whitespace run to a single space.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}
