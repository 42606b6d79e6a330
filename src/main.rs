//! # Awful News Narrator
//!
//! A company news analyzer: locates recent news about a company, extracts
//! each article, summarises it, labels its sentiment and topics, compares the
//! coverage across articles, and narrates the summaries as translated audio.
//!
//! ## Features
//!
//! - Article discovery through Google News search or the Google News RSS feed
//! - Extractive three-sentence summaries
//! - Lexicon-based Happy / Sad / Normal sentiment labels
//! - Topic keywords with stop-word filtering and noun lemmatisation
//! - Comparative analysis: sentiment distribution, coverage notes, shared and
//!   unique topics
//! - MP3 narration in the target language (Hindi by default)
//! - JSON and Markdown reports, or an HTTP service
//!
//! ## Usage
//!
//! ```sh
//! awful_news_narrator analyze -c Tesla -j ./json -m ./markdown
//! awful_news_narrator serve --addr 127.0.0.1:8000
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture (see [`pipeline`]):
//! 1. **Locating**: Discover article URLs for the company
//! 2. **Extracting**: Download title and paragraph text per URL
//! 3. **Analysing**: Summarise, classify and tag each article
//! 4. **Narrating**: Translate and synthesise audio for each summary
//! 5. **Output**: Comparative analysis, final summary, JSON and Markdown reports

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod analysis;
mod cli;
mod config;
mod error;
mod models;
mod narration;
mod outputs;
mod pipeline;
mod scrapers;
mod server;
mod utils;

use analysis::TextAnalyzer;
use cli::{Cli, Command};
use config::{NarratorConfig, load_config};
use outputs::{json, markdown};
use pipeline::NewsPipeline;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_narrator starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = load_config(args.config.as_deref())?;
    info!(
        locator = ?config.locator,
        max_articles = config.max_articles,
        target_language = %config.target_language,
        audio_dir = %config.audio_dir.display(),
        "Loaded configuration"
    );

    if let Err(e) = ensure_writable_dir(&config.audio_dir).await {
        error!(
            path = %config.audio_dir.display(),
            error = %e,
            "Audio directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let pipeline = build_pipeline(&config)?;

    match args.command {
        Command::Analyze {
            company,
            json_output_dir,
            markdown_output_dir,
        } => {
            run_analysis(
                &pipeline,
                &company,
                &json_output_dir,
                markdown_output_dir.as_deref(),
            )
            .await?
        }
        Command::Serve { addr } => server::run_server(pipeline, &addr).await?,
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}

fn build_pipeline(config: &NarratorConfig) -> Result<NewsPipeline, Box<dyn Error>> {
    let locator = scrapers::build_locator(config)?;
    let extractor = scrapers::build_extractor(config)?;
    let narrator = narration::build_narrator(config)?;
    Ok(NewsPipeline::new(
        locator,
        extractor,
        TextAnalyzer::default(),
        narrator,
    ))
}

/// Run one analysis, print the report and write it to disk.
#[instrument(level = "info", skip(pipeline, json_output_dir, markdown_output_dir))]
async fn run_analysis(
    pipeline: &NewsPipeline,
    company: &str,
    json_output_dir: &Path,
    markdown_output_dir: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    // Fail before any network work if the report cannot be saved.
    if let Err(e) = ensure_writable_dir(json_output_dir).await {
        error!(
            path = %json_output_dir.display(),
            error = %e,
            "JSON output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }
    if let Some(dir) = markdown_output_dir {
        ensure_writable_dir(dir).await?;
    }

    let report = pipeline.analyze(company).await;
    println!("{}", serde_json::to_string_pretty(&report)?);

    json::write_report(&report, json_output_dir).await?;
    if let Some(dir) = markdown_output_dir {
        markdown::write_markdown(&report, dir).await?;
    }
    Ok(())
}
