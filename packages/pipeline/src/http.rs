//! Shared HTTP plumbing for the search, LLM and graph clients.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{PipelineError, Result};

/// User agent string identifying this pipeline.
const USER_AGENT: &str = concat!("topikhukum/", env!("CARGO_PKG_VERSION"));

/// Create a configured async HTTP client.
///
/// `accept_invalid_certs` is only meant for clusters running self-signed
/// certificates inside a private network.
pub fn create_client(timeout_secs: u64, accept_invalid_certs: bool) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(accept_invalid_certs)
        .build()?;
    Ok(client)
}

/// Append path segments to a base URL, percent-encoding each segment.
///
/// # Examples
/// ```
/// use topikhukum_pipeline::http::endpoint;
///
/// let base = url::Url::parse("http://localhost:9200").unwrap();
/// let url = endpoint(&base, &["produk_hukum_topik", "_doc", "uu no 1"]).unwrap();
/// assert_eq!(url.as_str(), "http://localhost:9200/produk_hukum_topik/_doc/uu%20no%201");
/// ```
pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| PipelineError::Config(format!("URL cannot be a base: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Read an error body without failing on undecodable content.
pub async fn error_body(response: reqwest::Response) -> String {
    response.text().await.unwrap_or_default()
}
