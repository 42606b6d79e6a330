//! Markdown rendering of company reports.
//!
//! The document opens with the final summary and sentiment counts, then lists
//! every article with its summary, sentiment, topics and audio link, followed
//! by the coverage comparisons, the topic overlap and the skipped URLs.

use crate::analysis::comparative::{article_label, format_topics};
use crate::models::{CompanyReport, ItemStatus, Sentiment};
use crate::utils::slugify;
use std::error::Error;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// Convert a [`CompanyReport`] into a Markdown document.
pub fn report_to_markdown(report: &CompanyReport) -> String {
    let mut md = String::new();
    let comparative = &report.comparative_analysis;

    let _ = writeln!(md, "# News Analysis: {}\n", report.company);
    let _ = writeln!(
        md,
        "_Generated {}_\n",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(md, "> {}\n", report.final_summary);
    if let Some(audio) = &report.final_audio {
        let _ = writeln!(md, "Audio: [{audio}]({audio})\n");
    }

    md.push_str("## Sentiment Distribution\n\n");
    md.push_str("| Sentiment | Articles |\n|---|---|\n");
    for sentiment in Sentiment::ALL {
        let _ = writeln!(
            md,
            "| {} | {} |",
            sentiment,
            comparative.sentiment_distribution.count(sentiment)
        );
    }
    md.push('\n');

    md.push_str("## Articles\n\n");
    if report.articles.is_empty() {
        md.push_str("No articles could be analysed.\n\n");
    }
    for (i, article) in report.articles.iter().enumerate() {
        let _ = writeln!(md, "### {}: {}\n", article_label(i), article.title);
        let _ = writeln!(md, "{}\n", article.summary);
        let _ = writeln!(md, "- **Sentiment:** {}", article.sentiment);
        let _ = writeln!(md, "- **Topics:** {}", format_topics(&article.topics));
        match &article.audio {
            Some(audio) => {
                let _ = writeln!(md, "- **Audio:** [{audio}]({audio})");
            }
            None => md.push_str("- **Audio:** unavailable\n"),
        }
        md.push('\n');
    }

    md.push_str("## Coverage Differences\n\n");
    for note in &comparative.coverage_difference {
        let _ = writeln!(md, "- {}", note.comparison);
        let _ = writeln!(md, "  - _Impact:_ {}", note.impact);
    }
    md.push('\n');

    let topics = &comparative.topics_overview;
    md.push_str("## Topic Overlap\n\n");
    let _ = writeln!(md, "- **Common:** {}", format_topics(&topics.common));
    for (label, unique) in &topics.unique {
        let _ = writeln!(md, "- **Unique to {label}:** {}", format_topics(unique));
    }
    md.push('\n');

    let skipped: Vec<_> = report
        .outcomes
        .iter()
        .filter_map(|o| match &o.status {
            ItemStatus::Skipped { reason } => Some((o.location.as_str(), reason)),
            _ => None,
        })
        .collect();
    if !skipped.is_empty() {
        md.push_str("## Skipped Sources\n\n");
        for (location, reason) in skipped {
            let _ = writeln!(md, "- <{location}>: {reason}");
        }
        md.push('\n');
    }

    md
}

/// Path of the Markdown file for `report` under `markdown_output_dir`.
pub fn markdown_path(report: &CompanyReport, markdown_output_dir: &Path) -> PathBuf {
    markdown_output_dir.join(format!(
        "{}_{}.md",
        slugify(&report.company),
        report.generated_at.format("%Y-%m-%d")
    ))
}

/// Render and write the Markdown document, returning its path.
#[instrument(level = "info", skip_all, fields(markdown_output_dir = %markdown_output_dir.display()))]
pub async fn write_markdown(
    report: &CompanyReport,
    markdown_output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = markdown_path(report, markdown_output_dir);
    fs::write(&path, report_to_markdown(report)).await?;
    info!(path = %path.display(), "Wrote Markdown report");
    Ok(path)
}
