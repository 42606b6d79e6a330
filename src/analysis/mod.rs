//! Text analysis of extracted articles.
//!
//! # Submodules
//!
//! - [`summarizer`]: Lead-sentence summaries
//! - [`sentiment`]: Lexicon polarity scoring and Happy/Sad/Normal labels
//! - [`lexicon`]: Word valences, boosters and negations used by the scorer
//! - [`topics`]: Stop-word filtered, lemmatized keywords
//! - [`comparative`]: Cross-article statistics

pub mod comparative;
pub mod lexicon;
pub mod sentiment;
pub mod summarizer;
pub mod topics;

use crate::models::{Sentiment, SentimentDistribution};
use sentiment::SentimentClassifier;
use std::collections::BTreeSet;
use topics::TopicExtractor;

/// Summary, label and topics of one article.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleAnalysis {
    pub summary: String,
    pub sentiment: Sentiment,
    pub topics: BTreeSet<String>,
}

/// The per-article analysis services, constructed once and shared.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    pub classifier: SentimentClassifier,
    pub topics: TopicExtractor,
}

impl TextAnalyzer {
    pub fn new(classifier: SentimentClassifier, topics: TopicExtractor) -> Self {
        Self { classifier, topics }
    }

    /// Summarise `content`, then label and tag the summary.
    pub fn analyze(&self, content: &str) -> ArticleAnalysis {
        let summary = summarizer::summarize(content);
        let sentiment = self.classifier.classify(&summary);
        let topics = self.topics.extract_topics(&summary);
        ArticleAnalysis {
            summary,
            sentiment,
            topics,
        }
    }
}

/// One-line verdict on a company's coverage, narrated as the final audio.
pub fn final_summary(company: &str, distribution: &SentimentDistribution) -> String {
    match distribution.dominant() {
        Some(label) => format!("Media coverage for {company} is mostly {label}."),
        None => "No valid articles found.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_works_on_summary() {
        let analyzer = TextAnalyzer::default();
        let content = "Tesla reported great quarterly profits. Batteries improved. Deliveries grew. \
                       A fourth sentence about terrible recalls and failures.";
        let analysis = analyzer.analyze(content);
        assert!(analysis.summary.ends_with(summarizer::TRUNCATION_MARKER));
        assert!(!analysis.summary.contains("fourth"));
        assert_eq!(analysis.sentiment, Sentiment::Happy);
        assert!(analysis.topics.contains("tesla"));
        assert!(analysis.topics.len() <= topics::MAX_TOPICS);
    }

    #[test]
    fn test_final_summary() {
        let mut dist = SentimentDistribution::default();
        assert_eq!(final_summary("Tesla", &dist), "No valid articles found.");

        dist.record(Sentiment::Sad);
        dist.record(Sentiment::Sad);
        dist.record(Sentiment::Happy);
        assert_eq!(final_summary("Tesla", &dist), "Media coverage for Tesla is mostly Sad.");
    }
}
