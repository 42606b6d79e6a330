//! Comparative analysis across every article of a request.
//!
//! Turns the per-article records into a sentiment distribution, a short
//! coverage narrative and the shared/unique topic breakdown. Pure and cheap:
//! the input is at most a handful of records with three topics each.

use crate::models::{
    ArticleRecord, ComparativeResult, CoverageNote, SentimentDistribution, TopicsOverview,
};
use itertools::Itertools;
use std::collections::BTreeSet;

/// Label used for the `index`-th (0-based) article in topic maps and notes.
pub fn article_label(index: usize) -> String {
    format!("Article {}", index + 1)
}

/// Render a topic set as a bracketed, quoted list: `['battery', 'stock']`.
pub fn format_topics(topics: &BTreeSet<String>) -> String {
    format!("[{}]", topics.iter().map(|t| format!("'{t}'")).join(", "))
}

/// Aggregate per-article results into population-level statistics.
pub fn aggregate(articles: &[ArticleRecord]) -> ComparativeResult {
    let mut sentiment_distribution = SentimentDistribution::default();
    for article in articles {
        sentiment_distribution.record(article.sentiment);
    }

    ComparativeResult {
        sentiment_distribution,
        coverage_difference: coverage_notes(articles),
        topics_overview: topics_overview(articles),
    }
}

fn coverage_notes(articles: &[ArticleRecord]) -> Vec<CoverageNote> {
    let note = match articles {
        [] => CoverageNote {
            comparison: "No articles available".to_string(),
            impact: "N/A".to_string(),
        },
        [only] => CoverageNote {
            comparison: format!("One article focuses on {}", format_topics(&only.topics)),
            impact: "Not enough to compare.".to_string(),
        },
        [first, second, ..] => CoverageNote {
            comparison: format!(
                "Article 1 highlights {}, Article 2 focuses on {}",
                format_topics(&first.topics),
                format_topics(&second.topics)
            ),
            impact: "Different focus shows varied views.".to_string(),
        },
    };
    vec![note]
}

fn topics_overview(articles: &[ArticleRecord]) -> TopicsOverview {
    let Some((first, rest)) = articles.split_first() else {
        return TopicsOverview::default();
    };

    // The common set must be complete before any unique set is derived from it.
    let common = rest.iter().fold(first.topics.clone(), |acc, article| {
        acc.intersection(&article.topics).cloned().collect()
    });

    let unique = articles
        .iter()
        .enumerate()
        .map(|(i, article)| {
            let only_here = article.topics.difference(&common).cloned().collect();
            (article_label(i), only_here)
        })
        .collect();

    TopicsOverview { common, unique }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn record(sentiment: Sentiment, topics: &[&str]) -> ArticleRecord {
        ArticleRecord {
            title: "Title".to_string(),
            summary: "Summary".to_string(),
            sentiment,
            topics: set(topics),
            audio: Some("audio_0.mp3".to_string()),
        }
    }

    #[test]
    fn test_empty_input() {
        let result = aggregate(&[]);
        assert_eq!(result.sentiment_distribution, SentimentDistribution::default());
        assert_eq!(
            result.coverage_difference,
            vec![CoverageNote {
                comparison: "No articles available".to_string(),
                impact: "N/A".to_string(),
            }]
        );
        assert!(result.topics_overview.common.is_empty());
        assert!(result.topics_overview.unique.is_empty());
    }

    #[test]
    fn test_single_article() {
        let a = record(Sentiment::Sad, &["electric", "battery", "stock"]);
        let result = aggregate(std::slice::from_ref(&a));

        assert_eq!(result.sentiment_distribution.sad, 1);
        assert_eq!(result.sentiment_distribution.total(), 1);
        assert_eq!(result.topics_overview.common, a.topics);
        assert_eq!(result.topics_overview.unique["Article 1"], BTreeSet::new());
        assert_eq!(result.coverage_difference.len(), 1);
        assert_eq!(
            result.coverage_difference[0].comparison,
            "One article focuses on ['battery', 'electric', 'stock']"
        );
        assert_eq!(result.coverage_difference[0].impact, "Not enough to compare.");
    }

    #[test]
    fn test_two_articles() {
        let a = record(Sentiment::Happy, &["electric", "battery", "stock"]);
        let b = record(Sentiment::Sad, &["battery", "recall", "stock"]);
        let result = aggregate(&[a.clone(), b.clone()]);

        assert_eq!(result.topics_overview.common, set(&["battery", "stock"]));
        assert_eq!(result.topics_overview.unique["Article 1"], set(&["electric"]));
        assert_eq!(result.topics_overview.unique["Article 2"], set(&["recall"]));

        let note = &result.coverage_difference[0];
        assert!(note.comparison.contains(&format_topics(&a.topics)));
        assert!(note.comparison.contains(&format_topics(&b.topics)));
        assert_eq!(
            note.comparison,
            "Article 1 highlights ['battery', 'electric', 'stock'], Article 2 focuses on ['battery', 'recall', 'stock']"
        );
        assert_eq!(note.impact, "Different focus shows varied views.");
    }

    #[test]
    fn test_unique_sets_use_final_common_set() {
        // After two articles "stock" is still common; the third removes it.
        let result = aggregate(&[
            record(Sentiment::Normal, &["stock", "battery", "factory"]),
            record(Sentiment::Normal, &["stock", "battery", "recall"]),
            record(Sentiment::Normal, &["battery", "tariff", "china"]),
        ]);

        assert_eq!(result.topics_overview.common, set(&["battery"]));
        assert_eq!(result.topics_overview.unique["Article 1"], set(&["factory", "stock"]));
        assert_eq!(result.topics_overview.unique["Article 2"], set(&["recall", "stock"]));
        assert_eq!(result.topics_overview.unique["Article 3"], set(&["china", "tariff"]));
        for unique in result.topics_overview.unique.values() {
            assert!(unique.is_disjoint(&result.topics_overview.common));
        }
    }

    #[test]
    fn test_only_first_two_articles_are_narrated() {
        let result = aggregate(&[
            record(Sentiment::Happy, &["alpha"]),
            record(Sentiment::Happy, &["beta"]),
            record(Sentiment::Sad, &["gamma"]),
        ]);
        assert_eq!(result.coverage_difference.len(), 1);
        assert!(!result.coverage_difference[0].comparison.contains("gamma"));
        assert_eq!(result.topics_overview.unique.len(), 3);
    }

    #[test]
    fn test_unique_keys_follow_article_order() {
        let articles: Vec<_> = (0..11)
            .map(|i| record(Sentiment::Normal, &[format!("topic{i}").as_str()]))
            .collect();
        let unique = aggregate(&articles).topics_overview.unique;

        let labels: Vec<&str> = unique.keys().map(String::as_str).collect();
        assert_eq!(labels[..3], ["Article 1", "Article 2", "Article 3"]);
        assert_eq!(labels[10], "Article 11");

        let json = serde_json::to_string(&unique).unwrap();
        let second = json.find("\"Article 2\"").unwrap();
        let tenth = json.find("\"Article 10\"").unwrap();
        assert!(second < tenth);
    }

    #[test]
    fn test_distribution_sums_to_article_count() {
        let sentiments = [
            Sentiment::Happy,
            Sentiment::Sad,
            Sentiment::Normal,
            Sentiment::Happy,
            Sentiment::Happy,
        ];
        let articles: Vec<_> = sentiments.iter().map(|s| record(*s, &["topic"])).collect();
        let dist = aggregate(&articles).sentiment_distribution;
        assert_eq!(dist.total(), articles.len());
        assert_eq!((dist.happy, dist.sad, dist.normal), (3, 1, 1));
    }

    #[test]
    fn test_format_topics() {
        assert_eq!(format_topics(&BTreeSet::new()), "[]");
        assert_eq!(format_topics(&set(&["stock"])), "['stock']");
    }
}
