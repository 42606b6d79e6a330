//! Word valences for the polarity scorer.
//!
//! Valences follow the -4 (most negative) to +4 (most positive) scale used by
//! rule-based social-media sentiment lexicons, trimmed to the vocabulary that
//! shows up in business and technology news.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Added to (or subtracted from) a valence by a booster word.
pub const BOOSTER_INCREMENT: f64 = 0.293;
/// Multiplier applied to a valence preceded by a negation.
pub const NEGATION_SCALAR: f64 = -0.74;
/// Extra emphasis for an ALL-CAPS sentiment word in mixed-case text.
pub const CAPS_INCREMENT: f64 = 0.733;

pub static VALENCES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // positive
        ("good", 1.9),
        ("great", 3.1),
        ("excellent", 2.7),
        ("amazing", 2.8),
        ("awesome", 3.1),
        ("fantastic", 2.6),
        ("outstanding", 3.0),
        ("impressive", 2.2),
        ("strong", 2.3),
        ("stronger", 2.1),
        ("strongest", 2.4),
        ("success", 2.7),
        ("successful", 2.8),
        ("succeed", 2.2),
        ("win", 2.8),
        ("wins", 2.7),
        ("winning", 2.4),
        ("won", 2.7),
        ("winner", 2.8),
        ("gain", 2.4),
        ("gains", 1.8),
        ("gained", 1.6),
        ("profit", 1.9),
        ("profits", 1.9),
        ("profitable", 1.9),
        ("growth", 1.6),
        ("grow", 1.3),
        ("grows", 1.3),
        ("growing", 1.3),
        ("boost", 1.7),
        ("boosted", 1.5),
        ("improve", 1.9),
        ("improved", 2.1),
        ("improvement", 2.0),
        ("innovative", 1.9),
        ("innovation", 1.8),
        ("record", 0.8),
        ("surge", 1.3),
        ("surged", 1.4),
        ("soar", 2.0),
        ("soared", 2.0),
        ("rally", 1.4),
        ("rallied", 1.4),
        ("rebound", 1.3),
        ("recover", 1.5),
        ("recovery", 1.4),
        ("beat", 1.0),
        ("upbeat", 1.9),
        ("optimistic", 2.2),
        ("optimism", 2.1),
        ("confident", 2.2),
        ("confidence", 2.3),
        ("positive", 2.6),
        ("benefit", 2.0),
        ("benefits", 1.6),
        ("opportunity", 1.8),
        ("opportunities", 1.6),
        ("promising", 2.0),
        ("best", 3.2),
        ("better", 1.9),
        ("happy", 2.7),
        ("glad", 2.0),
        ("love", 3.2),
        ("like", 1.5),
        ("liked", 1.8),
        ("praise", 2.6),
        ("praised", 2.2),
        ("approve", 1.6),
        ("approved", 1.8),
        ("approval", 1.5),
        ("support", 1.7),
        ("supported", 1.3),
        ("leading", 1.3),
        ("leader", 1.2),
        ("robust", 1.4),
        ("stable", 1.2),
        ("secure", 1.4),
        ("safe", 1.9),
        ("exciting", 2.2),
        ("excited", 1.4),
        ("celebrate", 2.7),
        ("breakthrough", 2.2),
        ("efficient", 1.8),
        ("reliable", 1.8),
        ("popular", 1.8),
        ("welcome", 2.0),
        ("thrive", 2.3),
        ("thriving", 2.2),
        ("booming", 2.0),
        ("upgrade", 1.2),
        ("upgraded", 1.4),
        ("reward", 2.1),
        ("rewarding", 2.4),
        ("agree", 1.5),
        ("agreement", 2.2),
        ("partnership", 1.3),
        ("expand", 1.3),
        ("expansion", 1.3),
        ("hope", 1.9),
        ("hopeful", 2.3),
        ("solid", 1.2),
        ("healthy", 1.7),
        ("wonderful", 2.7),
        ("nice", 1.8),
        ("fair", 1.3),
        ("free", 2.3),
        ("clean", 1.7),
        ("smart", 1.7),
        ("top", 0.8),
        ("advance", 1.0),
        ("advantage", 1.0),
        ("fortune", 1.7),
        ("wealth", 2.2),
        ("rich", 1.9),
        // negative
        ("bad", -2.5),
        ("worse", -2.1),
        ("worst", -3.1),
        ("poor", -2.1),
        ("weak", -1.9),
        ("weaker", -1.9),
        ("weakness", -1.6),
        ("loss", -1.3),
        ("losses", -1.7),
        ("lose", -1.7),
        ("losing", -1.6),
        ("lost", -1.3),
        ("decline", -1.0),
        ("declined", -1.0),
        ("declining", -1.2),
        ("drop", -1.1),
        ("dropped", -1.1),
        ("fall", -1.3),
        ("fell", -1.2),
        ("falling", -1.1),
        ("plunge", -1.9),
        ("plunged", -1.9),
        ("slump", -1.7),
        ("crash", -1.7),
        ("crashed", -1.8),
        ("collapse", -2.2),
        ("fail", -2.5),
        ("failed", -2.3),
        ("failure", -2.3),
        ("fails", -2.2),
        ("problem", -1.7),
        ("problems", -1.7),
        ("issue", -0.6),
        ("issues", -0.6),
        ("risk", -1.1),
        ("risks", -1.1),
        ("risky", -1.4),
        ("concern", -1.2),
        ("concerns", -1.2),
        ("concerned", -1.3),
        ("worry", -1.9),
        ("worried", -1.2),
        ("worries", -1.8),
        ("fear", -2.2),
        ("fears", -1.8),
        ("uncertain", -1.2),
        ("uncertainty", -1.4),
        ("recall", -1.1),
        ("recalls", -1.1),
        ("recalled", -1.1),
        ("lawsuit", -1.7),
        ("sue", -1.4),
        ("sued", -1.5),
        ("fraud", -2.8),
        ("scandal", -1.9),
        ("crisis", -3.1),
        ("threat", -2.4),
        ("threaten", -2.2),
        ("threatens", -2.1),
        ("warn", -1.4),
        ("warned", -1.5),
        ("warning", -1.4),
        ("danger", -2.4),
        ("dangerous", -2.1),
        ("death", -2.9),
        ("dead", -3.3),
        ("killed", -3.5),
        ("injured", -1.7),
        ("accident", -2.1),
        ("crashes", -1.7),
        ("damage", -2.2),
        ("damaged", -1.9),
        ("delay", -1.3),
        ("delayed", -0.9),
        ("cut", -1.1),
        ("cuts", -1.2),
        ("layoffs", -1.9),
        ("fired", -2.6),
        ("bankrupt", -2.6),
        ("bankruptcy", -2.6),
        ("debt", -1.5),
        ("penalty", -2.0),
        ("fine", 0.8),
        ("fined", -1.4),
        ("investigation", -0.8),
        ("probe", -0.5),
        ("criticism", -1.9),
        ("criticized", -1.9),
        ("angry", -2.3),
        ("anger", -2.7),
        ("sad", -2.1),
        ("disappointing", -2.2),
        ("disappointed", -1.9),
        ("disappointment", -2.3),
        ("terrible", -2.1),
        ("horrible", -2.5),
        ("awful", -2.0),
        ("hate", -2.7),
        ("pessimistic", -1.5),
        ("negative", -2.7),
        ("volatile", -1.0),
        ("volatility", -0.9),
        ("struggle", -1.3),
        ("struggling", -1.6),
        ("trouble", -1.7),
        ("troubled", -2.0),
        ("bubble", -0.5),
        ("downgrade", -1.3),
        ("downgraded", -1.4),
        ("slow", -0.7),
        ("slowdown", -1.2),
        ("shortage", -1.4),
        ("defect", -1.4),
        ("defects", -1.4),
        ("flaw", -1.4),
        ("flawed", -1.8),
        ("hack", -1.2),
        ("hacked", -1.7),
        ("breach", -1.6),
        ("ban", -2.6),
        ("banned", -2.0),
        ("strike", -1.0),
        ("protest", -1.0),
        ("dispute", -1.7),
        ("conflict", -1.3),
        ("war", -2.9),
        ("pain", -2.3),
        ("hurt", -2.4),
        ("miss", -0.6),
        ("missed", -1.2),
        ("wrong", -2.1),
        ("error", -1.7),
        ("mistake", -1.4),
        ("blame", -1.4),
        ("toxic", -2.4),
        ("unsafe", -2.2),
    ]
    .into_iter()
    .collect()
});

/// Intensity modifiers and their direction.
pub static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let incr = [
        "absolutely", "amazingly", "completely", "considerably", "decidedly", "deeply",
        "enormously", "entirely", "especially", "exceptionally", "extremely", "greatly",
        "highly", "hugely", "incredibly", "intensely", "majorly", "more", "most",
        "particularly", "really", "remarkably", "so", "substantially", "thoroughly",
        "totally", "tremendously", "very", "sharply", "significantly", "strongly",
    ];
    let decr = [
        "almost", "barely", "hardly", "less", "little", "marginally", "occasionally",
        "partly", "scarcely", "slightly", "somewhat", "sort", "kind",
    ];
    incr.into_iter()
        .map(|w| (w, BOOSTER_INCREMENT))
        .chain(decr.into_iter().map(|w| (w, -BOOSTER_INCREMENT)))
        .collect()
});

pub static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "no", "never", "none", "nothing", "nowhere", "neither", "nor", "cannot", "without",
        "rarely", "seldom", "despite", "aint", "arent", "cant", "couldnt", "didnt", "doesnt",
        "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neednt", "shant",
        "shouldnt", "wasnt", "werent", "wont", "wouldnt",
    ]
    .into_iter()
    .collect()
});

/// Whether `word` (lowercased) negates what follows.
pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(word) || word.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valences_stay_on_scale() {
        assert!(VALENCES.values().all(|v| (-4.0..=4.0).contains(v)));
    }

    #[test]
    fn test_negation_forms() {
        assert!(is_negation("not"));
        assert!(is_negation("doesn't"));
        assert!(is_negation("wasnt"));
        assert!(!is_negation("note"));
    }

    #[test]
    fn test_boosters_have_direction() {
        assert!(BOOSTERS["very"] > 0.0);
        assert!(BOOSTERS["slightly"] < 0.0);
    }
}
