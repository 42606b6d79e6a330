//! Keyword extraction for article summaries.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashMap, HashSet};

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Maximum number of topics kept per article.
pub const MAX_TOPICS: usize = 3;

/// Tokens of this many characters or fewer are never topics.
pub const MAX_IGNORED_LEN: usize = 3;

/// English stop words.
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Plural nouns whose singular does not follow a suffix rule.
static IRREGULAR_PLURALS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("children", "child"),
        ("women", "woman"),
        ("men", "man"),
        ("chairmen", "chairman"),
        ("businessmen", "businessman"),
        ("spokesmen", "spokesman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("knives", "knife"),
        ("lives", "life"),
        ("wives", "wife"),
        ("leaves", "leaf"),
        ("halves", "half"),
        ("shelves", "shelf"),
        ("analyses", "analysis"),
        ("crises", "crisis"),
        ("theses", "thesis"),
        ("hypotheses", "hypothesis"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("movies", "movie"),
        ("cookies", "cookie"),
        ("rookies", "rookie"),
        ("quizzes", "quiz"),
    ]
    .into_iter()
    .collect()
});

/// Words ending in `s` that are already in root form.
static INVARIANT: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "news", "series", "species", "always", "perhaps", "whereas", "towards", "afterwards",
        "sometimes", "besides", "nevertheless", "lens", "gas", "chaos", "bias", "canvas",
        "atlas", "alias", "earnings", "savings", "mathematics", "economics", "politics",
        "physics", "electronics", "logistics", "analytics", "headquarters", "thanks", "means",
        "plus", "versus", "campus", "bonus", "census", "virus", "status", "focus",
    ]
    .into_iter()
    .collect()
});

/// Reduces inflected nouns to their dictionary form.
#[derive(Debug, Clone, Copy, Default)]
pub struct NounLemmatizer;

impl NounLemmatizer {
    /// Lowercased dictionary form of `word`.
    ///
    /// Capitalised words such as `Reuters` or `Siemens` are names and are only
    /// lowercased. Fully uppercase words are treated like lowercase ones.
    pub fn lemmatize(&self, word: &str) -> String {
        if is_name(word) {
            return word.to_lowercase();
        }
        let lowered = word.to_lowercase();
        let word = lowered.as_str();
        if let Some(lemma) = IRREGULAR_PLURALS.get(word) {
            return lemma.to_string();
        }
        if INVARIANT.contains(word)
            || !word.ends_with('s')
            || word.ends_with("ss")
            || word.ends_with("us")
            || word.ends_with("is")
            || word.chars().count() <= 3
        {
            return word.to_string();
        }

        for (suffix, replacement) in [
            ("ies", "y"),
            ("sses", "ss"),
            ("ches", "ch"),
            ("shes", "sh"),
            ("xes", "x"),
        ] {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.chars().count() >= 2 {
                    return format!("{stem}{replacement}");
                }
            }
        }
        word[..word.len() - 1].to_string()
    }
}

fn is_name(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase) && word.chars().any(char::is_lowercase)
}

/// Picks the leading content words of a text as its topics.
#[derive(Debug, Clone)]
pub struct TopicExtractor {
    stop_words: HashSet<&'static str>,
    lemmatizer: NounLemmatizer,
}

impl Default for TopicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicExtractor {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            lemmatizer: NounLemmatizer,
        }
    }

    fn is_candidate(&self, word: &str) -> bool {
        word.chars().count() > MAX_IGNORED_LEN && !self.stop_words.contains(word)
    }

    /// Up to [`MAX_TOPICS`] lemmatized keywords, taken in text order and then
    /// collapsed to a set, so duplicates among the first three shrink the result.
    pub fn extract_topics(&self, text: &str) -> BTreeSet<String> {
        WORD_RE
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|w| self.is_candidate(&w.to_lowercase()))
            .map(|w| self.lemmatizer.lemmatize(w))
            .filter(|lemma| self.is_candidate(lemma))
            .take(MAX_TOPICS)
            .collect()
    }
}
