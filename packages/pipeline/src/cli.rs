//! Command-line interface for topic extraction.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use topikhukum_extractor::{collect_terms, detect_definitions, TermMode};

use crate::api::{self, AppState};
use crate::config::{GraphConfig, PipelineConfig};
use crate::error::{PipelineError, Result};
use crate::extraction::{ProcessOptions, TopicExtractor};
use crate::graph::GraphClient;
use crate::search::SearchClient;
use crate::topics::AzureOpenAiClient;

/// Topik Hukum - Keywords, topics and a knowledge graph for Indonesian legislation.
#[derive(Parser)]
#[command(name = "topikhukum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract keywords and topics for documents in the search index.
    Extract {
        /// Document slugs (e.g., uu-no-6-tahun-1983)
        #[arg(required = true)]
        slugs: Vec<String>,

        /// Also write each record to <OUTPUT>/<slug>_topics.json
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Definition field used as keyword: term or short-term
        #[arg(long)]
        term_mode: Option<TermMode>,

        /// Skip writing records to the topic index
        #[arg(long)]
        no_index: bool,

        /// Skip updating the knowledge graph
        #[arg(long)]
        no_graph: bool,
    },

    /// Print the definitions found in a Pasal 1 text file as JSON.
    Definitions {
        /// Text file containing the article
        file: PathBuf,

        /// Definition field collected as terms: term or short-term
        #[arg(long, default_value_t = TermMode::default())]
        term_mode: TermMode,
    },

    /// Serve the knowledge graph read API.
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:3000")]
        addr: SocketAddr,

        /// Directory with static files served for unknown paths
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}

/// Run the parsed command.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Extract {
            slugs,
            output,
            term_mode,
            no_index,
            no_graph,
        } => {
            let options = ProcessOptions {
                index: !no_index,
                graph: !no_graph,
                output_dir: output,
            };
            extract_command(&slugs, term_mode, &options).await
        }
        Commands::Definitions { file, term_mode } => definitions_command(&file, term_mode),
        Commands::Serve { addr, static_dir } => serve_command(addr, static_dir).await,
    }
}

async fn extract_command(slugs: &[String], term_mode: Option<TermMode>, options: &ProcessOptions) -> Result<()> {
    let config = PipelineConfig::from_env(options.graph)?;
    let mut keywords = config.keywords;
    if let Some(mode) = term_mode {
        keywords = keywords.with_term_mode(mode);
    }

    let llm = AzureOpenAiClient::new(&config.llm)?;
    let search = SearchClient::new(config.search)?;
    let mut extractor = TopicExtractor::new(search, llm, config.llm, keywords);
    if let Some(graph) = &config.graph {
        extractor = extractor.with_graph(GraphClient::new(graph)?);
    }

    println!(
        "{} {} document(s)",
        style("Extracting topics for").bold(),
        style(slugs.len()).cyan()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .expect("valid template"),
    );
    pb.set_message("Processing...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let summary = extractor.process_batch(slugs, options).await;
    pb.finish_and_clear();

    println!();
    for slug in &summary.succeeded {
        println!("  {} {}", style("ok").green(), slug);
    }
    for (slug, reason) in &summary.failed {
        println!("  {} {}: {}", style("failed").red().bold(), slug, reason);
    }
    println!();
    println!(
        "{} {}/{} succeeded in {:.2}s",
        style("Done:").green().bold(),
        summary.succeeded.len(),
        summary.total(),
        summary.elapsed.as_secs_f64()
    );

    if summary.all_failed() {
        return Err(PipelineError::BatchFailed {
            failed: summary.failed.len(),
        });
    }
    Ok(())
}

fn definitions_command(file: &Path, term_mode: TermMode) -> Result<()> {
    let text = std::fs::read_to_string(file)?;
    let records = detect_definitions(&text);
    let terms = collect_terms(&records, term_mode);

    let output = json!({
        "definitions": records,
        "terms": terms,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn serve_command(addr: SocketAddr, static_dir: Option<PathBuf>) -> Result<()> {
    let graph = GraphClient::new(&GraphConfig::from_env()?)?;
    api::serve(addr, AppState::new(graph), static_dir).await
}
