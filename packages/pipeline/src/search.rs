//! OpenSearch REST client for reading documents and writing topic records.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::document::LegalDocument;
use crate::error::{PipelineError, Result};
use crate::http::{create_client, endpoint, error_body};

/// Field holding the document slug in the source index.
const SLUG_FIELD: &str = "Slug";

#[derive(Deserialize)]
struct SearchResponse<T> {
    hits: Hits<T>,
}

#[derive(Deserialize)]
struct Hits<T> {
    total: Option<Total>,
    #[serde(default = "Vec::new")]
    hits: Vec<Hit<T>>,
}

#[derive(Deserialize)]
struct Total {
    value: u64,
}

#[derive(Deserialize)]
struct Hit<T> {
    #[serde(rename = "_source")]
    source: T,
}

#[derive(Deserialize)]
struct IndexResponse {
    result: Option<String>,
}

/// Restricts which `_source` fields a search returns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceFilter {
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

/// OpenSearch client bound to one cluster.
///
/// NOTE: Do NOT derive `Debug` on this struct, it would expose the password.
pub struct SearchClient {
    http: Client,
    config: SearchConfig,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let http = create_client(config.timeout_secs, !config.verify_certs)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn request(&self, method: reqwest::Method, url: url::Url) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.config.username {
            Some(user) => builder.basic_auth(user, self.config.password.as_deref()),
            None => builder,
        }
    }

    /// Fetch the first document in the source index whose slug matches.
    ///
    /// Returns `Ok(None)` when the search has no hits.
    pub async fn retrieve_by_slug(&self, slug: &str) -> Result<Option<LegalDocument>> {
        self.retrieve_by_slug_filtered(slug, &SourceFilter::default())
            .await
    }

    /// Like [`Self::retrieve_by_slug`], limiting the returned `_source` fields.
    pub async fn retrieve_by_slug_filtered<T: DeserializeOwned>(
        &self,
        slug: &str,
        filter: &SourceFilter,
    ) -> Result<Option<T>> {
        let url = endpoint(&self.config.base_url, &[&self.config.source_index, "_search"])?;

        let mut body = json!({ "query": { "match": { (SLUG_FIELD): slug } } });
        if !filter.includes.is_empty() || !filter.excludes.is_empty() {
            body["_source"] = serde_json::to_value(filter)?;
        }

        debug!(slug, index = %self.config.source_index, "searching document");
        let response = self
            .request(reqwest::Method::POST, url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::Search {
                status: status.as_u16(),
                message: error_body(response).await,
            });
        }

        let parsed: SearchResponse<T> = response.json().await?;
        let total = parsed
            .hits
            .total
            .map(|t| t.value)
            .unwrap_or(parsed.hits.hits.len() as u64);
        if total == 0 {
            return Ok(None);
        }

        Ok(parsed.hits.hits.into_iter().next().map(|hit| hit.source))
    }

    /// Create `index` unless it already exists.
    pub async fn ensure_index(&self, index: &str) -> Result<()> {
        let url = endpoint(&self.config.base_url, &[index])?;

        let exists = self
            .request(reqwest::Method::HEAD, url.clone())
            .send()
            .await?;
        match exists.status() {
            StatusCode::OK => return Ok(()),
            StatusCode::NOT_FOUND => {}
            status => {
                return Err(PipelineError::Search {
                    status: status.as_u16(),
                    message: format!("unexpected status checking index {index}"),
                })
            }
        }

        let response = self.request(reqwest::Method::PUT, url).send().await?;
        let status = response.status();
        if status.is_success() {
            info!(index, "created index");
            return Ok(());
        }

        let message = error_body(response).await;
        // Another writer may have created it between the two requests.
        if status == StatusCode::BAD_REQUEST && message.contains("resource_already_exists_exception") {
            return Ok(());
        }
        Err(PipelineError::Search {
            status: status.as_u16(),
            message,
        })
    }

    /// Index (create or replace) `record` into the topic index under `id`.
    pub async fn index_topics<T: Serialize + ?Sized>(&self, id: &str, record: &T) -> Result<()> {
        let index = self.config.topic_index.as_str();
        self.ensure_index(index).await?;

        let url = endpoint(&self.config.base_url, &[index, "_doc", id])?;
        let response = self
            .request(reqwest::Method::PUT, url)
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::Search {
                status: status.as_u16(),
                message: error_body(response).await,
            });
        }

        let result: IndexResponse = response.json().await?;
        info!(
            id,
            index,
            result = result.result.as_deref().unwrap_or("unknown"),
            "indexed topic record"
        );
        Ok(())
    }
}
