//! Local JSON output of topic records.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;

/// Output file for `slug` inside `dir`: `{dir}/{slug}_topics.json`.
///
/// Path separators in the slug are replaced so the file always lands in `dir`.
pub fn output_path(dir: &Path, slug: &str) -> PathBuf {
    let name = slug.replace(['/', '\\'], "_");
    dir.join(format!("{name}_topics.json"))
}

/// Write `record` as pretty-printed JSON, creating `dir` if needed.
pub fn write_record<T: Serialize + ?Sized>(dir: &Path, slug: &str, record: &T) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = output_path(dir, slug);
    let mut json = serde_json::to_string_pretty(record)?;
    json.push('\n');
    fs::write(&path, json)?;
    tracing::debug!(path = %path.display(), "wrote topic record");
    Ok(path)
}
