//! Knowledge graph upserts and lookups over the Neo4j HTTP transactional API.
//!
//! Graph model:
//!
//! ```text
//! (:Peraturan:<StatusLabel> {nomorPeraturan, judul, no, tahun})
//!     -[:BERBENTUK]->        (:Bentuk {name})
//!     -[:DITERBITKAN_<year>]-> (:Tahun {tahun})
//!     -[:MEMILIKI_TOPIK]->   (:Topik {namaTopik})
//! ```

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, info};
use url::Url;

use crate::config::GraphConfig;
use crate::document::DocumentInfo;
use crate::error::{PipelineError, Result};
use crate::http::{create_client, endpoint, error_body};

/// Node label derived from a regulation's validity status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLabel {
    Berlaku,
    TidakBerlaku,
    TidakDiketahui,
}

impl StatusLabel {
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        match status {
            "Berlaku" => Self::Berlaku,
            "Tidak Berlaku" => Self::TidakBerlaku,
            _ => Self::TidakDiketahui,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Berlaku => "Berlaku",
            Self::TidakBerlaku => "TidakBerlaku",
            Self::TidakDiketahui => "TidakDiketahui",
        }
    }
}

/// One parameterized Cypher statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub statement: String,
    pub parameters: Map<String, Value>,
}

impl Statement {
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            parameters: Map::new(),
        }
    }

    pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.to_string(), value.into());
        self
    }
}

/// Relationship type linking a regulation to its year, e.g. `DITERBITKAN_1983`.
///
/// Only ASCII alphanumerics of the year survive, since relationship types
/// cannot be passed as parameters.
pub fn year_relationship(year: &str) -> String {
    let cleaned: String = year.chars().filter(char::is_ascii_alphanumeric).collect();
    if cleaned.is_empty() {
        "DITERBITKAN".to_string()
    } else {
        format!("DITERBITKAN_{cleaned}")
    }
}

/// Statements that upsert one regulation with its form, year and topics.
pub fn regulation_statements(info: &DocumentInfo, topics: &[String]) -> Vec<Statement> {
    let status_label = StatusLabel::from_status(&info.status).as_str();
    let mut statements = Vec::with_capacity(3 + topics.len());

    statements.push(
        Statement::new(format!(
            "MERGE (p:Peraturan:{status_label} {{nomorPeraturan: $nomor_peraturan}}) \
             ON CREATE SET p.judul = $judul, p.no = $no, p.tahun = $tahun, p.bentuk = $bentuk \
             ON MATCH SET p.judul = $judul, p.no = $no, p.tahun = $tahun, p.bentuk = $bentuk"
        ))
        .param("nomor_peraturan", info.law_number.as_str())
        .param("judul", info.title.as_str())
        .param("no", info.number.as_str())
        .param("tahun", info.year.as_str())
        .param("bentuk", info.form.as_str()),
    );

    statements.push(
        Statement::new(
            "MERGE (b:Bentuk {name: $bentuk}) \
             WITH b \
             MATCH (p:Peraturan {nomorPeraturan: $nomor_peraturan}) \
             MERGE (p)-[:BERBENTUK]->(b) \
             SET p.bentuk = null",
        )
        .param("nomor_peraturan", info.law_number.as_str())
        .param("bentuk", info.form.as_str()),
    );

    let relationship = year_relationship(&info.year);
    statements.push(
        Statement::new(format!(
            "MERGE (t:Tahun {{tahun: $tahun}}) \
             WITH t \
             MATCH (p:Peraturan {{nomorPeraturan: $nomor_peraturan}}) \
             MERGE (p)-[:{relationship}]->(t)"
        ))
        .param("nomor_peraturan", info.law_number.as_str())
        .param("tahun", info.year.as_str()),
    );

    for topic in topics {
        statements.push(
            Statement::new(
                "MATCH (p:Peraturan {nomorPeraturan: $nomor_peraturan}) \
                 MERGE (t:Topik {namaTopik: $topic}) \
                 MERGE (p)-[:MEMILIKI_TOPIK]->(t)",
            )
            .param("nomor_peraturan", info.law_number.as_str())
            .param("topic", topic.as_str()),
        );
    }

    statements
}

#[derive(Deserialize)]
struct CommitResponse {
    #[serde(default)]
    results: Vec<QueryResult>,
    #[serde(default)]
    errors: Vec<GraphError>,
}

/// Result of one statement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<Row>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub row: Vec<Value>,
}

#[derive(Deserialize)]
struct GraphError {
    code: String,
    message: String,
}

/// Neo4j client. Every call is one self-contained transaction commit.
///
/// NOTE: Do NOT derive `Debug` on this struct, it would expose the password.
pub struct GraphClient {
    http: Client,
    username: String,
    password: String,
    commit_url: Url,
}

impl GraphClient {
    pub fn new(config: &GraphConfig) -> Result<Self> {
        let http = create_client(config.timeout_secs, false)?;
        let commit_url = endpoint(&config.uri, &["db", &config.database, "tx", "commit"])?;
        Ok(Self {
            http,
            username: config.username.clone(),
            password: config.password.clone(),
            commit_url,
        })
    }

    /// Run statements in a single transaction.
    ///
    /// Neo4j reports statement failures in the body of a 200 response; any
    /// reported error rolls the transaction back and is returned as
    /// `PipelineError::Graph`.
    pub async fn run(&self, statements: &[Statement]) -> Result<Vec<QueryResult>> {
        debug!(count = statements.len(), "committing graph transaction");
        let response = self
            .http
            .post(self.commit_url.clone())
            .basic_auth(&self.username, Some(&self.password))
            .json(&json!({ "statements": statements }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::GraphHttp {
                status: status.as_u16(),
                message: error_body(response).await,
            });
        }

        let body: CommitResponse = response.json().await?;
        if !body.errors.is_empty() {
            return Err(PipelineError::Graph {
                errors: body
                    .errors
                    .into_iter()
                    .map(|e| format!("{}: {}", e.code, e.message))
                    .collect(),
            });
        }

        Ok(body.results)
    }

    /// Upsert a regulation with its form, year and topics.
    pub async fn upsert_regulation(&self, info: &DocumentInfo, topics: &[String]) -> Result<()> {
        self.run(&regulation_statements(info, topics)).await?;
        info!(
            nomor = %info.law_number,
            topics = topics.len(),
            "upserted regulation graph"
        );
        Ok(())
    }

    async fn first_column(&self, statement: &str) -> Result<Vec<String>> {
        let results = self.run(&[Statement::new(statement)]).await?;
        Ok(results
            .into_iter()
            .flat_map(|result| result.data)
            .filter_map(|row| row.row.into_iter().next())
            .filter_map(|value| match value {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect())
    }

    /// All regulation numbers, sorted.
    pub async fn regulation_numbers(&self) -> Result<Vec<String>> {
        self.first_column(
            "MATCH (p:Peraturan) RETURN DISTINCT p.nomorPeraturan AS nomorPeraturan \
             ORDER BY nomorPeraturan",
        )
        .await
    }

    /// All topic names, sorted.
    pub async fn topic_names(&self) -> Result<Vec<String>> {
        self.first_column("MATCH (t:Topik) RETURN DISTINCT t.namaTopik AS namaTopik ORDER BY namaTopik")
            .await
    }

    /// All legal forms, sorted.
    pub async fn legal_forms(&self) -> Result<Vec<String>> {
        self.first_column("MATCH (b:Bentuk) RETURN DISTINCT b.name AS name ORDER BY name")
            .await
    }
}
