//! Extractive summarization: keep the lead of the article.

use unicode_segmentation::UnicodeSegmentation;

/// Appended to summaries that dropped sentences.
pub const TRUNCATION_MARKER: &str = "...";

/// Number of leading sentences kept by [`summarize`].
pub const SUMMARY_SENTENCES: usize = 3;

// Lowercased, without the trailing dot.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "inc", "corp", "co", "ltd", "llc",
    "plc", "vs", "etc", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
    "nov", "dec", "no", "fig", "gen", "gov", "sen", "rep", "rev", "approx", "est", "dept",
];

const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201d}', '\u{2019}'];

/// Shorten `text` to its first three sentences.
///
/// Texts with three sentences or fewer are returned unchanged. Longer texts
/// are reduced to the first three sentences joined by a single space with
/// [`TRUNCATION_MARKER`] appended.
pub fn summarize(text: &str) -> String {
    let sentences = split_sentences(text);
    if sentences.len() > SUMMARY_SENTENCES {
        let mut summary = sentences[..SUMMARY_SENTENCES].join(" ");
        summary.push_str(TRUNCATION_MARKER);
        summary
    } else {
        text.to_string()
    }
}

/// Split `text` into trimmed sentences.
///
/// Boundaries come from Unicode sentence segmentation. A boundary is dropped,
/// merging the segment into the next one, when the segment does not end in
/// `.`, `!` or `?` (optionally followed by closing quotes or brackets), or
/// when its single final period belongs to a known abbreviation, a
/// single-letter initial or a dotted acronym such as `U.S`.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (offset, segment) in text.split_sentence_bound_indices() {
        let end = offset + segment.len();
        if !ends_sentence(text[start..end].trim_end()) {
            continue;
        }
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = end;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

fn ends_sentence(candidate: &str) -> bool {
    let body = candidate.trim_end_matches(CLOSERS);
    let Some(stem) = body.strip_suffix(['.', '!', '?']) else {
        return false;
    };
    let single_period = body.ends_with('.') && !stem.ends_with(['.', '!', '?']);
    !(single_period && body.len() == candidate.len() && is_abbreviation(stem))
}

/// Whether the last word of `preceding` is an abbreviation whose period is
/// not a sentence boundary.
fn is_abbreviation(preceding: &str) -> bool {
    let word = preceding
        .rsplit(|c: char| c.is_whitespace() || c == '(' || c == '"')
        .next()
        .unwrap_or("");
    if word.is_empty() {
        return false;
    }
    let mut letters = word.chars();
    if let (Some(first), None) = (letters.next(), letters.next()) {
        return first.is_uppercase();
    }
    if word.contains('.') && word.split('.').all(|part| part.chars().count() <= 1) {
        return true;
    }
    ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic_sentences() {
        let text = "Tesla shares rose. Investors cheered! Will it last? Analysts doubt it.";
        assert_eq!(
            split_sentences(text),
            vec![
                "Tesla shares rose.",
                "Investors cheered!",
                "Will it last?",
                "Analysts doubt it."
            ]
        );
    }

    #[test]
    fn test_split_keeps_abbreviations_together() {
        let text = "Mr. Musk spoke in the U.S. on Monday. Tesla Inc. said nothing.";
        assert_eq!(
            split_sentences(text),
            vec!["Mr. Musk spoke in the U.S. on Monday.", "Tesla Inc. said nothing."]
        );
    }

    #[test]
    fn test_split_handles_closing_quotes_and_missing_terminator() {
        let text = "He said \"we are done.\" Then he left";
        assert_eq!(split_sentences(text), vec!["He said \"we are done.\"", "Then he left"]);
    }

    #[test]
    fn test_decimal_numbers_do_not_split() {
        let text = "Revenue grew 4.5 percent. Margins held.";
        assert_eq!(split_sentences(text), vec!["Revenue grew 4.5 percent.", "Margins held."]);
    }

    #[test]
    fn test_split_initials_and_line_breaks() {
        let text = "Elon R. Musk wrote\nto staff on Friday. Shares slipped.";
        assert_eq!(
            split_sentences(text),
            vec!["Elon R. Musk wrote\nto staff on Friday.", "Shares slipped."]
        );
    }

    #[test]
    fn test_split_non_latin_text() {
        let text = "Hello world.  Καλημέρα κόσμε!  Done?";
        assert_eq!(split_sentences(text), vec!["Hello world.", "Καλημέρα κόσμε!", "Done?"]);
    }

    #[test]
    fn test_summarize_short_text_unchanged() {
        let text = "  One sentence.  Two sentences! Three?";
        assert_eq!(summarize(text), text);
        assert_eq!(summarize(""), "");
    }

    #[test]
    fn test_summarize_long_text_keeps_first_three() {
        let text = "First one. Second one. Third one. Fourth one. Fifth one.";
        let summary = summarize(text);
        assert_eq!(summary, "First one. Second one. Third one....");
        assert!(summary.ends_with(TRUNCATION_MARKER));
        assert!(summary.starts_with("First one. Second one. Third one."));
    }

    #[test]
    fn test_summarize_normalizes_whitespace_between_kept_sentences() {
        let text = "Alpha rose.\n\nBeta fell.   Gamma held. Delta moved.";
        assert_eq!(summarize(text), "Alpha rose. Beta fell. Gamma held....");
    }
}
