//! Marker phrases and compiled patterns for the definition parser.

use regex::Regex;
use std::sync::LazyLock;

/// Plain definitional verb "is".
pub const ADALAH: &str = "adalah";

/// Plain definitional verb "constitutes".
pub const MERUPAKAN: &str = "merupakan";

/// Short form marker "hereinafter referred to as".
pub const SELANJUTNYA_DISEBUT: &str = "yang selanjutnya disebut";

/// Short form marker "hereinafter abbreviated as".
pub const SELANJUTNYA_DISINGKAT: &str = "yang selanjutnya disingkat";

/// Numbered list item marker: digits at a word boundary, a period, optional whitespace.
///
/// The word boundary keeps amounts such as `Rp1.000` in one piece.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static LIST_ITEM_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\.\s*").expect("valid regex"));

/// Any run of whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Opening clause of a definitions article, e.g.
/// "Dalam Peraturan Pemerintah ini yang dimaksud dengan:".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static DEFINITIONS_INTRO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(?:dalam\s+(?P<instrument>",
        r"peraturan\s+menteri(?:\s+[\w-]+)*?",
        r"|peraturan\s+pemerintah(?:\s+pengganti\s+undang-undang)?",
        r"|peraturan\s+presiden",
        r"|peraturan\s+daerah(?:\s+provinsi|\s+kabupaten|\s+kota)?",
        r"|peraturan\s+badan(?:\s+[\w-]+)*?",
        r"|peraturan\s+lembaga(?:\s+[\w-]+)*?",
        r"|undang-undang(?:\s+darurat)?",
        r"|ketetapan\s+majelis\s+permusyawaratan\s+rakyat",
        r"|penetapan\s+presiden",
        r"|keputusan\s+presiden",
        r"|instruksi\s+presiden",
        r")\s+ini\s*,?\s*)?yang\s+dimaksud\s+dengan",
    ))
    .expect("valid regex")
});
