//! Legal document records as stored in the source search index.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Block type of the considerant ("Menimbang") section.
pub const KONSIDERAN: &str = "KONSIDERAN";

/// Block reference of the considerant section.
pub const MENIMBANG: &str = "menimbang";

/// Block type of article content.
pub const CONTENT_PASAL: &str = "CONTENT_PASAL";

/// Article identifier of the first article.
pub const PASAL_1: &str = "pasal-1";

/// A legal document ("produk hukum") from the search index.
///
/// Every field is optional; older records miss some of them and numeric
/// values such as `Tahun` are stored either as strings or as numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegalDocument {
    #[serde(default, deserialize_with = "text_value")]
    pub slug: Option<String>,

    /// Title.
    #[serde(default, deserialize_with = "text_value")]
    pub judul: Option<String>,

    /// Full regulation number, e.g. "Undang-Undang Nomor 6 Tahun 1983".
    #[serde(default, deserialize_with = "text_value")]
    pub nomor: Option<String>,

    /// Sequence number within the year.
    #[serde(default, deserialize_with = "text_value")]
    pub no: Option<String>,

    /// Year of enactment.
    #[serde(default, deserialize_with = "text_value")]
    pub tahun: Option<String>,

    /// Validity status, e.g. "Berlaku".
    #[serde(default, deserialize_with = "text_value")]
    pub status: Option<String>,

    /// Legal form, e.g. "Undang-Undang".
    #[serde(default, deserialize_with = "text_value")]
    pub bentuk: Option<String>,

    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// One structural block of a legal document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    #[serde(default, deserialize_with = "text_value")]
    pub r#type: Option<String>,

    #[serde(default, deserialize_with = "text_value")]
    pub r#ref: Option<String>,

    #[serde(default, deserialize_with = "text_value")]
    pub pasal: Option<String>,

    /// Section header the block belongs to.
    #[serde(default, deserialize_with = "text_value")]
    pub context: Option<String>,

    #[serde(default, deserialize_with = "text_value")]
    pub content: Option<String>,
}

/// Descriptive metadata of a document; absent values become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub law_number: String,
    pub number: String,
    pub year: String,
    pub status: String,
    pub form: String,
}

impl LegalDocument {
    pub fn info(&self) -> DocumentInfo {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        DocumentInfo {
            title: text(&self.judul),
            law_number: text(&self.nomor),
            number: text(&self.no),
            year: text(&self.tahun),
            status: text(&self.status),
            form: text(&self.bentuk),
        }
    }

    /// Content of the considerant ("Menimbang") block.
    pub fn considerant(&self) -> Option<&str> {
        self.blocks
            .iter()
            .find(|b| b.r#ref.as_deref() == Some(MENIMBANG) && b.r#type.as_deref() == Some(KONSIDERAN))
            .map(|b| b.content.as_deref().unwrap_or_default())
    }

    /// Content of the first article (Pasal 1).
    pub fn first_article(&self) -> Option<&str> {
        self.blocks
            .iter()
            .find(|b| b.r#type.as_deref() == Some(CONTENT_PASAL) && b.pasal.as_deref() == Some(PASAL_1))
            .map(|b| b.content.as_deref().unwrap_or_default())
    }

    /// Distinct non-empty section headers in document order.
    pub fn headers(&self) -> Vec<String> {
        let mut headers: Vec<String> = Vec::new();
        for context in self.blocks.iter().filter_map(|b| b.context.as_deref()) {
            if !context.is_empty() && !headers.iter().any(|h| h == context) {
                headers.push(context.to_string());
            }
        }
        headers
    }
}

fn text_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
