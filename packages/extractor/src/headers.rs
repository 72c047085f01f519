//! Header splitting and deduplication.

use std::collections::HashSet;

/// Split every header on `delimiter`, flatten, and keep first occurrences.
///
/// Pieces are not trimmed. An empty delimiter leaves each header whole.
///
/// # Examples
/// ```
/// use topikhukum_extractor::split_and_dedupe;
///
/// assert_eq!(split_and_dedupe(&["A - B", "B - C"], " - "), vec!["A", "B", "C"]);
/// ```
pub fn split_and_dedupe<S: AsRef<str>>(headers: &[S], delimiter: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unique = Vec::new();

    for header in headers {
        let header = header.as_ref();
        let pieces: Vec<&str> = if delimiter.is_empty() {
            vec![header]
        } else {
            header.split(delimiter).collect()
        };

        for piece in pieces {
            if seen.insert(piece) {
                unique.push(piece.to_string());
            }
        }
    }

    unique
}
