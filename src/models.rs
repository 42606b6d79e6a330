//! Data models for scraped articles, their analysed form and the final report.
//!
//! This module defines the core data structures used throughout the application:
//! - [`NewsArticle`]: Raw article text as extracted from a location
//! - [`ArticleRecord`]: Summarised, classified and narrated article
//! - [`ComparativeResult`]: Population statistics over all records of a request
//! - [`ItemOutcome`]: What happened to each located URL
//! - [`CompanyReport`]: The response payload for one company

use crate::error::FetchError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::fmt;

/// Content used by article pages that have no paragraphs.
pub const NO_CONTENT: &str = "No content available";

/// Title used by article pages without a `<title>` element.
pub const NO_TITLE: &str = "No title available";

/// A raw news article as extracted from its location.
#[derive(Debug, Clone)]
pub struct NewsArticle {
    /// The location the article was extracted from.
    pub source: String,
    /// The page title.
    pub title: String,
    /// Paragraph text joined by single spaces.
    pub content: String,
}

impl NewsArticle {
    /// `true` when the page yielded real text rather than the sentinel.
    pub fn has_content(&self) -> bool {
        self.content != NO_CONTENT && !self.content.trim().is_empty()
    }
}

/// Discrete sentiment label of a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Happy,
    Sad,
    Normal,
}

impl Sentiment {
    /// All labels, in tie-breaking order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Happy, Sentiment::Sad, Sentiment::Normal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Happy => "Happy",
            Sentiment::Sad => "Sad",
            Sentiment::Normal => "Normal",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully processed article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub summary: String,
    pub sentiment: Sentiment,
    /// At most three topic keywords.
    pub topics: BTreeSet<String>,
    /// Narration file for the summary, `None` when narration failed.
    pub audio: Option<String>,
}

/// Article counts per sentiment label.
///
/// Always carries all three labels, serialised as
/// `{"Happy": n, "Sad": n, "Normal": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    #[serde(rename = "Happy")]
    pub happy: usize,
    #[serde(rename = "Sad")]
    pub sad: usize,
    #[serde(rename = "Normal")]
    pub normal: usize,
}

impl SentimentDistribution {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Happy => self.happy += 1,
            Sentiment::Sad => self.sad += 1,
            Sentiment::Normal => self.normal += 1,
        }
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Happy => self.happy,
            Sentiment::Sad => self.sad,
            Sentiment::Normal => self.normal,
        }
    }

    pub fn total(&self) -> usize {
        self.happy + self.sad + self.normal
    }

    /// Label with the highest count; ties go to the earlier label in
    /// [`Sentiment::ALL`]. `None` when nothing was counted.
    pub fn dominant(&self) -> Option<Sentiment> {
        if self.total() == 0 {
            return None;
        }
        let mut best = Sentiment::ALL[0];
        for s in Sentiment::ALL.into_iter().skip(1) {
            if self.count(s) > self.count(best) {
                best = s;
            }
        }
        Some(best)
    }
}

/// Narrative comparison of two articles' topical focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageNote {
    pub comparison: String,
    pub impact: String,
}

/// Shared and per-article topics.
///
/// `unique` is keyed by `"Article N"` (1-based), in article order, and never
/// contains a topic that is also in `common`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicsOverview {
    pub common: BTreeSet<String>,
    pub unique: IndexMap<String, BTreeSet<String>>,
}

/// Population-level statistics over every article in a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeResult {
    pub sentiment_distribution: SentimentDistribution,
    pub coverage_difference: Vec<CoverageNote>,
    pub topics_overview: TopicsOverview,
}

/// Why a located URL did not produce an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    Fetch { message: String },
    HttpStatus { code: u16 },
    NoContent,
}

impl From<&FetchError> for SkipReason {
    fn from(e: &FetchError) -> Self {
        match e {
            FetchError::Status(code) => SkipReason::HttpStatus { code: *code },
            FetchError::NoContent => SkipReason::NoContent,
            other => SkipReason::Fetch {
                message: other.to_string(),
            },
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Fetch { message } => write!(f, "fetch failed: {message}"),
            SkipReason::HttpStatus { code } => write!(f, "HTTP {code}"),
            SkipReason::NoContent => f.write_str("no content"),
        }
    }
}

/// Processing status of a single located URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemStatus {
    Processed,
    /// The article was kept but its audio could not be produced.
    NarrationFailed { reason: String },
    Skipped { reason: SkipReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutcome {
    pub location: String,
    #[serde(flatten)]
    pub status: ItemStatus,
}

/// The response payload for one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyReport {
    pub company: String,
    pub articles: Vec<ArticleRecord>,
    pub comparative_analysis: ComparativeResult,
    pub final_summary: String,
    /// Narration of `final_summary`, `None` when narration failed.
    pub final_audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_audio_error: Option<String>,
    pub outcomes: Vec<ItemOutcome>,
    pub generated_at: DateTime<Utc>,
}

impl CompanyReport {
    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ItemStatus::Skipped { .. }))
            .count()
    }

    pub fn narration_failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ItemStatus::NarrationFailed { .. }))
            .count()
    }
}
