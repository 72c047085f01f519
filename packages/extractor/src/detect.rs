//! Definition detection.

use crate::types::{DefinitionShape, Marker};

/// Classify a sentence in a single pass over its lowercased form.
///
/// Matching is case-insensitive. When both short form markers occur, the
/// leftmost one is reported as `introduced_by`.
///
/// # Examples
/// ```
/// use topikhukum_extractor::{classify, DefinitionShape, Marker};
///
/// assert_eq!(classify("Pajak adalah pungutan."), DefinitionShape::PlainDefinition);
/// assert_eq!(
///     classify("Wajib Pajak yang selanjutnya disebut WP adalah orang."),
///     DefinitionShape::AbbreviatedDefinition { introduced_by: Marker::SelanjutnyaDisebut }
/// );
/// assert_eq!(classify("Cukup jelas."), DefinitionShape::NoMarker);
/// ```
pub fn classify(sentence: &str) -> DefinitionShape {
    let lowered = sentence.to_lowercase();

    let short_form = Marker::ALL
        .into_iter()
        .filter(|marker| marker.is_short_form())
        .filter_map(|marker| lowered.find(marker.phrase()).map(|pos| (pos, marker)))
        .min_by_key(|(pos, _)| *pos);

    if let Some((_, introduced_by)) = short_form {
        return DefinitionShape::AbbreviatedDefinition { introduced_by };
    }

    let has_plain_marker = Marker::ALL
        .into_iter()
        .filter(|marker| !marker.is_short_form())
        .any(|marker| lowered.contains(marker.phrase()));

    if has_plain_marker {
        DefinitionShape::PlainDefinition
    } else {
        DefinitionShape::NoMarker
    }
}

/// Check whether a sentence asserts a definition.
///
/// True iff the sentence contains "adalah", "merupakan",
/// "yang selanjutnya disebut" or "yang selanjutnya disingkat",
/// ignoring case.
pub fn is_definition(sentence: &str) -> bool {
    classify(sentence).is_definition()
}
