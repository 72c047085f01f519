//! Topik Hukum Extractor - definition terms from Indonesian legal texts.
//!
//! The first article (Pasal 1) of an Indonesian statute usually lists the
//! terms it defines as a numbered list:
//!
//! ```text
//! Dalam Undang-Undang ini yang dimaksud dengan:
//! 1. Pajak adalah kontribusi wajib kepada negara.
//! 2. Wajib Pajak yang selanjutnya disebut WP adalah orang pribadi atau badan.
//! ```
//!
//! This crate turns such an article into structured [`DefinitionRecord`]s and
//! collects the defined terms (or their short forms) as keywords.
//!
//! # Example
//!
//! ```
//! use topikhukum_extractor::{collect_terms, detect_definitions, TermMode};
//!
//! let article = "1. Pajak adalah kontribusi wajib. \
//!                2. Wajib Pajak yang selanjutnya disebut WP adalah orang pribadi.";
//! let records = detect_definitions(article);
//!
//! assert_eq!(collect_terms(&records, TermMode::Term), vec!["Pajak", "Wajib Pajak"]);
//! assert_eq!(collect_terms(&records, TermMode::ShortTerm), vec!["WP"]);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Marker phrases and compiled patterns
//! - [`types`]: Definition records, markers and the sentence classification
//! - [`segment`]: Numbered-list sentence segmentation
//! - [`detect`]: Definition detection and classification
//! - [`extract`]: Term, short form and definition body extraction
//! - [`collect`]: Term collection policies
//! - [`headers`]: Header splitting and deduplication
//! - [`intro`]: Recognition of the definitions article opening clause
//! - [`error`]: Error types

pub mod collect;
pub mod config;
pub mod detect;
pub mod error;
pub mod extract;
pub mod headers;
pub mod intro;
pub mod segment;
pub mod types;

pub use collect::{collect_terms, TermMode};
pub use detect::{classify, is_definition};
pub use error::{ExtractorError, Result};
pub use extract::{detect_definitions, extract};
pub use headers::split_and_dedupe;
pub use intro::{instrument_form, is_definitions_article};
pub use segment::{normalize_whitespace, segment};
pub use types::{DefinitionRecord, DefinitionShape, EntryKind, Marker};
