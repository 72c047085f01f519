//! Recognition of the opening clause of a definitions article.

use crate::config::DEFINITIONS_INTRO;

/// Whether the text opens a definitions article ("... yang dimaksud dengan").
///
/// # Examples
/// ```
/// use topikhukum_extractor::is_definitions_article;
///
/// assert!(is_definitions_article("Dalam Undang-Undang ini yang dimaksud dengan:"));
/// assert!(!is_definitions_article("Undang-Undang ini mulai berlaku pada tanggal diundangkan."));
/// ```
pub fn is_definitions_article(text: &str) -> bool {
    DEFINITIONS_INTRO.is_match(text)
}

/// The instrument named in the opening clause, e.g. "Peraturan Pemerintah".
///
/// Whitespace inside the name is collapsed; `None` when the clause does not
/// name an instrument.
pub fn instrument_form(text: &str) -> Option<String> {
    let captures = DEFINITIONS_INTRO.captures(text)?;
    let instrument = captures.name("instrument")?;
    Some(
        instrument
            .as_str()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" "),
    )
}
