//! Lexicon-based polarity scoring and the three-way sentiment label.
//!
//! [`LexiconScorer`] produces a compound score in `[-1, 1]` from word
//! valences, booster words, negations, capitalisation, contrastive "but" and
//! exclamation marks. [`SentimentClassifier`] maps that score to a
//! [`Sentiment`] with fixed thresholds.

use super::lexicon::{BOOSTERS, CAPS_INCREMENT, NEGATION_SCALAR, VALENCES, is_negation};
use crate::models::Sentiment;
use crate::utils::truncate_for_log;
use std::sync::Arc;
use tracing::debug;

/// Compound scores above this are [`Sentiment::Happy`].
pub const HAPPY_THRESHOLD: f64 = 0.1;
/// Compound scores below this are [`Sentiment::Sad`].
pub const SAD_THRESHOLD: f64 = -0.1;

const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;

/// Proportions of negative, neutral and positive mass plus the compound score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Anything that can judge the polarity of a piece of text.
pub trait PolarityScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> PolarityScores;
}

/// Rule-based scorer over the built-in valence lexicon.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens: Vec<&str> = text
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
            .map(|t| t.trim_matches('\''))
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return PolarityScores::default();
        }

        let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let mixed_case = {
            let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
            caps > 0 && caps < tokens.len()
        };

        let mut valences: Vec<f64> = Vec::with_capacity(tokens.len());
        for (i, word) in lower.iter().enumerate() {
            if BOOSTERS.contains_key(word.as_str()) {
                valences.push(0.0);
                continue;
            }
            let Some(&base) = VALENCES.get(word.as_str()) else {
                valences.push(0.0);
                continue;
            };

            let mut valence = base;
            if mixed_case && is_all_caps(tokens[i]) {
                valence += CAPS_INCREMENT * base.signum();
            }

            for distance in 1..=3usize {
                if i < distance {
                    break;
                }
                let prior = lower[i - distance].as_str();
                if VALENCES.contains_key(prior) {
                    continue;
                }
                if let Some(&boost) = BOOSTERS.get(prior) {
                    let mut scalar = boost * valence.signum();
                    if mixed_case && is_all_caps(tokens[i - distance]) {
                        scalar += CAPS_INCREMENT * valence.signum();
                    }
                    scalar *= match distance {
                        1 => 1.0,
                        2 => 0.95,
                        _ => 0.9,
                    };
                    valence += scalar;
                }
                if is_negation(prior) {
                    valence *= NEGATION_SCALAR;
                }
            }
            valences.push(valence);
        }

        if let Some(but) = lower.iter().position(|w| w == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < but {
                    *v *= 0.5;
                } else if i > but {
                    *v *= 1.5;
                }
            }
        }

        let sum: f64 = valences.iter().sum();
        let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
        let emphasis = exclamations as f64 * EXCLAMATION_INCREMENT;

        let compound = if sum > 0.0 {
            normalize(sum + emphasis)
        } else if sum < 0.0 {
            normalize(sum - emphasis)
        } else {
            0.0
        };

        let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0, 0.0, 0.0);
        for v in &valences {
            if *v > 0.0 {
                pos_sum += v + 1.0;
            } else if *v < 0.0 {
                neg_sum += v - 1.0;
            } else {
                neu_count += 1.0;
            }
        }
        if pos_sum > neg_sum.abs() {
            pos_sum += emphasis;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= emphasis;
        }
        let total = pos_sum + neg_sum.abs() + neu_count;

        PolarityScores {
            neg: round3((neg_sum / total).abs()),
            neu: round3(neu_count / total),
            pos: round3(pos_sum / total),
            compound: round4(compound),
        }
    }
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(|c| c.is_alphabetic()) && !token.chars().any(|c| c.is_lowercase())
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

fn round4(x: f64) -> f64 {
    (x * 10000.0).round() / 10000.0
}

/// Map a compound score to a label. Scores exactly on a threshold are
/// [`Sentiment::Normal`].
pub fn label_for(compound: f64) -> Sentiment {
    if compound > HAPPY_THRESHOLD {
        Sentiment::Happy
    } else if compound < SAD_THRESHOLD {
        Sentiment::Sad
    } else {
        Sentiment::Normal
    }
}

/// Classifies text into [`Sentiment`] labels using an injected scorer.
#[derive(Clone)]
pub struct SentimentClassifier {
    scorer: Arc<dyn PolarityScorer>,
}

impl SentimentClassifier {
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    pub fn classify(&self, text: &str) -> Sentiment {
        let scores = self.scorer.polarity_scores(text);
        let label = label_for(scores.compound);
        debug!(
            text = %truncate_for_log(text, 100),
            compound = scores.compound,
            neg = scores.neg,
            neu = scores.neu,
            pos = scores.pos,
            %label,
            "Scored sentiment"
        );
        label
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(Arc::new(LexiconScorer::new()))
    }
}

impl std::fmt::Debug for SentimentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentClassifier").finish_non_exhaustive()
    }
}
