//! Definition extraction: term, short form and definition body.

use crate::detect::is_definition;
use crate::segment::{normalize_whitespace, segment};
use crate::types::{DefinitionRecord, EntryKind, Marker};

/// Split a definition sentence into its parts.
///
/// Intended for sentences accepted by [`is_definition`]. Markers are
/// matched literally on the normalized sentence; any part whose marker
/// cannot be located is left as `None`.
///
/// # Examples
/// ```
/// use topikhukum_extractor::extract;
///
/// let record = extract("Wajib Pajak yang selanjutnya disebut WP adalah orang perseorangan.");
/// assert_eq!(record.term.as_deref(), Some("Wajib Pajak"));
/// assert_eq!(record.short_term.as_deref(), Some("WP"));
/// assert_eq!(record.definition.as_deref(), Some("orang perseorangan."));
/// ```
pub fn extract(sentence: &str) -> DefinitionRecord {
    extract_normalized(normalize_whitespace(sentence))
}

/// Run segmentation, detection and extraction over one article.
///
/// Records come back in the order their sentences appear in `text`.
pub fn detect_definitions(text: &str) -> Vec<DefinitionRecord> {
    let records: Vec<DefinitionRecord> = segment(text)
        .into_iter()
        .filter(|sentence| is_definition(sentence))
        .map(extract_normalized)
        .collect();

    tracing::debug!(count = records.len(), "detected definitions");
    records
}

fn extract_normalized(text: String) -> DefinitionRecord {
    let short_term = literal_short_form_marker(&text)
        .and_then(|introduced_by| short_form(&text, introduced_by));

    DefinitionRecord {
        term: leading_term(&text),
        definition: definition_body(&text),
        short_term,
        text,
        kind: EntryKind::Definition,
    }
}

/// Text before the leftmost marker; ties go to the higher priority marker.
fn leading_term(text: &str) -> Option<String> {
    let (boundary, _rank) = Marker::TERM_BOUNDARY_PRIORITY
        .iter()
        .enumerate()
        .filter_map(|(rank, marker)| text.find(marker.phrase()).map(|pos| (pos, rank)))
        .min()?;

    non_empty(&text[..boundary])
}

/// Text after the last occurrence of the first marker, in body priority, that is present.
fn definition_body(text: &str) -> Option<String> {
    Marker::BODY_BOUNDARY_PRIORITY
        .iter()
        .find_map(|marker| text.rsplit_once(marker.phrase()))
        .and_then(|(_, body)| non_empty(body))
}

/// Leftmost short form marker, matched with the same literal casing as the
/// other extraction boundaries.
fn literal_short_form_marker(text: &str) -> Option<Marker> {
    Marker::ALL
        .into_iter()
        .filter(|marker| marker.is_short_form())
        .filter_map(|marker| text.find(marker.phrase()).map(|pos| (pos, marker)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, marker)| marker)
}

/// Text between the short form marker and its terminator.
fn short_form(text: &str, introduced_by: Marker) -> Option<String> {
    let terminator = introduced_by.short_form_terminator()?;
    let start = text.find(introduced_by.phrase())? + introduced_by.phrase().len();
    let rest = &text[start..];
    let end = rest.find(terminator.phrase())?;

    non_empty(&rest[..end])
}

fn non_empty(fragment: &str) -> Option<String> {
    let trimmed = fragment.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
