//! End-to-end topic extraction for one or many documents.
//!
//! For each slug: retrieve the document, build keywords from its headers and
//! the terms defined in Pasal 1, ask the model for topics, then persist the
//! resulting [`TopicRecord`] to the selected sinks.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use topikhukum_extractor::{instrument_form, is_definitions_article};
use tracing::{debug, error, info, warn};

use crate::config::KeywordConfig;
use crate::document::DocumentInfo;
use crate::error::{PipelineError, Result};
use crate::graph::GraphClient;
use crate::keywords::document_keywords;
use crate::output::write_record;
use crate::search::SearchClient;
use crate::topics::{LlmClient, LlmConfig, TopicGenerator};

/// Stored per document in the topic index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRecord {
    #[serde(rename = "Judul")]
    pub title: String,
    #[serde(rename = "Nomor")]
    pub law_number: String,
    #[serde(rename = "No")]
    pub number: String,
    #[serde(rename = "Tahun")]
    pub year: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Kata Kunci")]
    pub keywords: Vec<String>,
    #[serde(rename = "Topik")]
    pub topics: Vec<String>,
}

impl TopicRecord {
    pub fn new(info: &DocumentInfo, keywords: Vec<String>, topics: Vec<String>) -> Self {
        Self {
            title: info.title.clone(),
            law_number: info.law_number.clone(),
            number: info.number.clone(),
            year: info.year.clone(),
            status: info.status.clone(),
            keywords,
            topics,
        }
    }
}

/// Which sinks a processed document is written to.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub index: bool,
    pub graph: bool,
    pub output_dir: Option<PathBuf>,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            index: true,
            graph: true,
            output_dir: None,
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub succeeded: Vec<String>,
    pub failed: Vec<(String, String)>,
    pub elapsed: Duration,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// True when there was work and none of it succeeded.
    pub fn all_failed(&self) -> bool {
        self.succeeded.is_empty() && !self.failed.is_empty()
    }
}

/// Drives the extraction for documents in the search index.
pub struct TopicExtractor<C: LlmClient> {
    search: SearchClient,
    llm: C,
    llm_config: LlmConfig,
    keywords: KeywordConfig,
    graph: Option<GraphClient>,
}

impl<C: LlmClient> TopicExtractor<C> {
    pub fn new(search: SearchClient, llm: C, llm_config: LlmConfig, keywords: KeywordConfig) -> Self {
        Self {
            search,
            llm,
            llm_config,
            keywords,
            graph: None,
        }
    }

    /// Attach a graph client; required for [`ProcessOptions::graph`].
    pub fn with_graph(mut self, graph: GraphClient) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Build the topic record for `slug` without persisting it.
    pub async fn extract_topics(&self, slug: &str) -> Result<TopicRecord> {
        let (_, record) = self.extract(slug).await?;
        Ok(record)
    }

    async fn extract(&self, slug: &str) -> Result<(DocumentInfo, TopicRecord)> {
        let document = self
            .search
            .retrieve_by_slug(slug)
            .await?
            .ok_or_else(|| PipelineError::DocumentNotFound(slug.to_string()))?;
        let info = document.info();

        let considerant = document
            .considerant()
            .ok_or_else(|| PipelineError::MissingSection {
                slug: slug.to_string(),
                section: "considerant".to_string(),
            })?;

        let first_article = match document.first_article() {
            Some(text) => text,
            None => {
                warn!(slug, "document has no Pasal 1, keywords come from headers only");
                ""
            }
        };
        if !first_article.is_empty() {
            debug!(
                slug,
                definitions_article = is_definitions_article(first_article),
                instrument = instrument_form(first_article).as_deref().unwrap_or(""),
                "inspected Pasal 1"
            );
        }

        let keywords = document_keywords(&document.headers(), first_article, &self.keywords);
        let topics = TopicGenerator::new(&self.llm, &self.llm_config)
            .generate(&info.title, considerant)
            .await?;

        info!(
            slug,
            keywords = keywords.len(),
            topics = topics.len(),
            "extracted topics"
        );
        let record = TopicRecord::new(&info, keywords, topics);
        Ok((info, record))
    }

    /// Extract one document and write it to every enabled sink.
    pub async fn process(&self, slug: &str, options: &ProcessOptions) -> Result<TopicRecord> {
        let (info, record) = self.extract(slug).await?;

        if let Some(dir) = &options.output_dir {
            let path = write_record(dir, slug, &record)?;
            info!(slug, path = %path.display(), "saved topic record");
        }

        if options.index {
            self.search.index_topics(slug, &record).await?;
        }

        if options.graph {
            let graph = self
                .graph
                .as_ref()
                .ok_or_else(|| PipelineError::Config("graph output enabled without a graph client".to_string()))?;
            if info.law_number.is_empty() {
                return Err(PipelineError::MissingSection {
                    slug: slug.to_string(),
                    section: "Nomor".to_string(),
                });
            }
            graph.upsert_regulation(&info, &record.topics).await?;
        }

        Ok(record)
    }

    /// Process slugs in order. Failures are logged and skipped.
    pub async fn process_batch(&self, slugs: &[String], options: &ProcessOptions) -> BatchSummary {
        let start = Instant::now();
        let mut summary = BatchSummary::default();

        for (i, slug) in slugs.iter().enumerate() {
            info!(slug, index = i + 1, total = slugs.len(), "processing document");
            match self.process(slug, options).await {
                Ok(_) => summary.succeeded.push(slug.clone()),
                Err(e) => {
                    error!(slug, error = %e, "failed to process document");
                    summary.failed.push((slug.clone(), e.to_string()));
                }
            }
        }

        summary.elapsed = start.elapsed();
        info!(
            succeeded = summary.succeeded.len(),
            failed = summary.failed.len(),
            elapsed_secs = summary.elapsed.as_secs_f64(),
            "batch finished"
        );
        summary
    }
}
