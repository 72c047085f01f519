//! Topik Hukum pipeline - keywords, topics and a knowledge graph for
//! Indonesian legislation.
//!
//! Documents are read from an OpenSearch index by slug. Keywords come from
//! the section headers plus the terms defined in Pasal 1 (via
//! [`topikhukum_extractor`]); topics come from an Azure OpenAI deployment
//! prompted with the title and considerant. Results are written back to a
//! topic index, to Neo4j, and optionally to local JSON files.
//!
//! # Architecture
//!
//! - [`config`]: Environment-driven configuration
//! - [`document`]: Source document model
//! - [`search`]: OpenSearch client
//! - [`topics`]: LLM client, prompt and topic parsing
//! - [`keywords`]: Keyword assembly
//! - [`graph`]: Neo4j statements and client
//! - [`extraction`]: Per-document and batch orchestration
//! - [`output`]: JSON file output
//! - [`api`]: Graph read API
//! - [`cli`]: Command-line interface

pub mod api;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod extraction;
pub mod graph;
pub mod http;
pub mod keywords;
pub mod output;
pub mod search;
pub mod topics;

pub use config::{GraphConfig, KeywordConfig, PipelineConfig, SearchConfig};
pub use document::{DocumentInfo, LegalDocument};
pub use error::{PipelineError, Result};
pub use extraction::{BatchSummary, ProcessOptions, TopicExtractor, TopicRecord};
pub use graph::GraphClient;
pub use search::SearchClient;
