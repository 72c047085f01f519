//! Core data types for definition extraction.

use serde::{Deserialize, Serialize};

use crate::config::{ADALAH, MERUPAKAN, SELANJUTNYA_DISEBUT, SELANJUTNYA_DISINGKAT};

/// Marker phrases used in Indonesian legal drafting to introduce a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// "yang selanjutnya disebut" (hereinafter referred to as).
    SelanjutnyaDisebut,

    /// "yang selanjutnya disingkat" (hereinafter abbreviated as).
    SelanjutnyaDisingkat,

    /// "adalah" (is).
    Adalah,

    /// "merupakan" (constitutes).
    Merupakan,
}

impl Marker {
    /// Every marker, in no particular priority.
    pub const ALL: [Marker; 4] = [
        Self::SelanjutnyaDisebut,
        Self::SelanjutnyaDisingkat,
        Self::Adalah,
        Self::Merupakan,
    ];

    /// Tie-break order when locating the end of the defined term.
    ///
    /// Short form markers rank first.
    pub const TERM_BOUNDARY_PRIORITY: [Marker; 4] = [
        Self::SelanjutnyaDisebut,
        Self::SelanjutnyaDisingkat,
        Self::Adalah,
        Self::Merupakan,
    ];

    /// Fallback order when splitting off the definition body.
    ///
    /// Plain markers rank first; the body is the text after the last
    /// occurrence of the first marker present.
    pub const BODY_BOUNDARY_PRIORITY: [Marker; 4] = [
        Self::Adalah,
        Self::Merupakan,
        Self::SelanjutnyaDisebut,
        Self::SelanjutnyaDisingkat,
    ];

    /// The literal phrase as it appears in normalized text.
    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            Self::SelanjutnyaDisebut => SELANJUTNYA_DISEBUT,
            Self::SelanjutnyaDisingkat => SELANJUTNYA_DISINGKAT,
            Self::Adalah => ADALAH,
            Self::Merupakan => MERUPAKAN,
        }
    }

    /// Whether this marker introduces a short form.
    #[must_use]
    pub fn is_short_form(self) -> bool {
        matches!(self, Self::SelanjutnyaDisebut | Self::SelanjutnyaDisingkat)
    }

    /// Marker that closes a short form introduced by `self`.
    ///
    /// "disebut" pairs with "adalah", "disingkat" with "merupakan".
    /// Plain markers introduce no short form and return `None`.
    #[must_use]
    pub fn short_form_terminator(self) -> Option<Marker> {
        match self {
            Self::SelanjutnyaDisebut => Some(Self::Adalah),
            Self::SelanjutnyaDisingkat => Some(Self::Merupakan),
            Self::Adalah | Self::Merupakan => None,
        }
    }
}

/// Shape of a sentence as determined by a single classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionShape {
    /// No definition marker present.
    NoMarker,

    /// Only "adalah"/"merupakan" present.
    PlainDefinition,

    /// A short form is introduced; `introduced_by` is the leftmost short form marker.
    AbbreviatedDefinition { introduced_by: Marker },
}

impl DefinitionShape {
    /// Whether the sentence asserts a definition at all.
    #[must_use]
    pub fn is_definition(&self) -> bool {
        !matches!(self, Self::NoMarker)
    }
}

/// Kind of entry produced by the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    /// A formal definition of a term.
    #[default]
    Definition,
}

/// One definition found in an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionRecord {
    /// The whitespace-normalized sentence.
    pub text: String,

    /// Phrase preceding the first definition marker.
    pub term: Option<String>,

    /// Abbreviation or short form, if the sentence introduces one.
    pub short_term: Option<String>,

    /// Text following the definitional verb.
    pub definition: Option<String>,

    /// Entry kind tag.
    pub kind: EntryKind,
}
