//! Per-company analysis pipeline.
//!
//! Sequences the collaborators for one request:
//! 1. **Locating**: Ask the [`ArticleLocator`] for candidate URLs
//! 2. **Extracting**: Fetch each URL in order; unusable pages are skipped
//! 3. **Analysing**: Summarise, label and tag the article
//! 4. **Narrating**: Render the summary as audio
//! 5. **Comparing**: Aggregate every article into a [`ComparativeResult`](crate::models::ComparativeResult)
//!
//! Items are processed one at a time in locator order. Every located URL gets an
//! [`ItemOutcome`], so callers can tell "no coverage" from "all fetches failed".

use crate::analysis::{TextAnalyzer, comparative, final_summary};
use crate::models::{ArticleRecord, CompanyReport, ItemOutcome, ItemStatus, SkipReason};
use crate::narration::Narrator;
use crate::scrapers::{ArticleLocator, ContentExtractor};
use crate::utils::{slugify, truncate_for_log};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{error, info, instrument, warn};

pub const FINAL_AUDIO_FILE: &str = "final_audio.mp3";

static RUN_SEQ: AtomicU64 = AtomicU64::new(0);

/// Directory, relative to the audio root, holding one request's narrations.
///
/// Each request gets its own `<slug>/<timestamp>-<seq>` directory so that
/// concurrent requests for the same company never share audio files.
fn run_audio_dir(company: &str, started: DateTime<Utc>) -> String {
    let seq = RUN_SEQ.fetch_add(1, Ordering::Relaxed);
    format!(
        "{}/{}-{seq}",
        slugify(company),
        started.format("%Y%m%dT%H%M%S%3fZ")
    )
}

#[derive(Clone)]
pub struct NewsPipeline {
    locator: Arc<dyn ArticleLocator>,
    extractor: Arc<dyn ContentExtractor>,
    analyzer: TextAnalyzer,
    narrator: Arc<dyn Narrator>,
}

impl std::fmt::Debug for NewsPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsPipeline")
            .field("analyzer", &self.analyzer)
            .finish_non_exhaustive()
    }
}

impl NewsPipeline {
    pub fn new(
        locator: Arc<dyn ArticleLocator>,
        extractor: Arc<dyn ContentExtractor>,
        analyzer: TextAnalyzer,
        narrator: Arc<dyn Narrator>,
    ) -> Self {
        Self {
            locator,
            extractor,
            analyzer,
            narrator,
        }
    }

    /// Build the full report for `company`.
    #[instrument(level = "info", skip(self))]
    pub async fn analyze(&self, company: &str) -> CompanyReport {
        let t0 = Instant::now();
        let generated_at = Utc::now();
        let run_dir = run_audio_dir(company, generated_at);

        let locations = self.locator.locate(company).await;
        let located = locations.len();
        info!(count = located, "Located article URLs");

        let run_ref: &str = &run_dir;
        let results: Vec<(ItemOutcome, Option<ArticleRecord>)> =
            stream::iter(locations.into_iter().enumerate())
                .then(|(index, location)| self.process_location(run_ref, index, location))
                .collect()
                .await;

        let mut articles = Vec::new();
        let mut outcomes = Vec::with_capacity(results.len());
        for (outcome, record) in results {
            outcomes.push(outcome);
            articles.extend(record);
        }

        let comparative_analysis = comparative::aggregate(&articles);
        let final_summary = final_summary(company, &comparative_analysis.sentiment_distribution);
        info!(%final_summary, "Built comparative analysis");

        let final_file = format!("{run_dir}/{FINAL_AUDIO_FILE}");
        let (final_audio, final_audio_error) =
            match self.narrator.narrate(&final_summary, &final_file).await {
                Ok(reference) => (Some(reference), None),
                Err(e) => {
                    error!(error = %e, "Final narration failed");
                    (None, Some(e.to_string()))
                }
            };

        let report = CompanyReport {
            company: company.to_string(),
            articles,
            comparative_analysis,
            final_summary,
            final_audio,
            final_audio_error,
            outcomes,
            generated_at,
        };

        info!(
            located,
            processed = report.articles.len(),
            skipped = report.skipped_count(),
            narration_failed = report.narration_failures(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Completed company analysis"
        );
        report
    }

    /// Extract, analyse and narrate a single location.
    async fn process_location(
        &self,
        run_dir: &str,
        index: usize,
        location: String,
    ) -> (ItemOutcome, Option<ArticleRecord>) {
        let article = match self.extractor.extract(&location).await {
            Ok(article) if article.has_content() => article,
            Ok(_) => {
                warn!(index, url = %location, "Page has no content; skipping article");
                return (skipped(location, SkipReason::NoContent), None);
            }
            Err(e) => {
                warn!(index, url = %location, error = %e, "Error fetching article; skipping");
                let reason = SkipReason::from(&e);
                return (skipped(location, reason), None);
            }
        };

        let analysis = self.analyzer.analyze(&article.content);
        info!(
            index,
            url = %location,
            summary = %truncate_for_log(&analysis.summary, 200),
            "Processing fetched article"
        );

        let filename = format!("{run_dir}/audio_{index}.mp3");
        let (audio, status) = match self.narrator.narrate(&analysis.summary, &filename).await {
            Ok(reference) => (Some(reference), ItemStatus::Processed),
            Err(e) => {
                error!(index, url = %location, error = %e, "Narration failed; keeping article without audio");
                (
                    None,
                    ItemStatus::NarrationFailed {
                        reason: e.to_string(),
                    },
                )
            }
        };

        let record = ArticleRecord {
            title: article.title,
            summary: analysis.summary,
            sentiment: analysis.sentiment,
            topics: analysis.topics,
            audio,
        };
        (ItemOutcome { location, status }, Some(record))
    }
}

fn skipped(location: String, reason: SkipReason) -> ItemOutcome {
    ItemOutcome {
        location,
        status: ItemStatus::Skipped { reason },
    }
}
