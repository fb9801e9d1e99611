//! Lexicon-based polarity scoring.
//!
//! Produces a score in [-1.0, 1.0] by averaging the polarity of every
//! sentiment-bearing word in the text. A word directly after an intensifier
//! ("very", "really", ...) is amplified; a word within two tokens of a
//! negator ("not", "never", any "n't" contraction) is flipped and damped.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Multiplier applied to a sentiment word that follows a negator.
pub const NEGATION_FACTOR: f64 = -0.5;

/// How many tokens back a negator still applies.
const NEGATION_WINDOW: usize = 2;

/// (word, polarity)
const LEXICON_ENTRIES: &[(&str, f64)] = &[
    // positive
    ("amazing", 0.6),
    ("appreciate", 0.5),
    ("awesome", 1.0),
    ("best", 1.0),
    ("brilliant", 0.9),
    ("delighted", 0.7),
    ("easy", 0.43),
    ("enjoy", 0.4),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("fast", 0.2),
    ("fine", 0.42),
    ("glad", 0.5),
    ("good", 0.7),
    ("grateful", 0.6),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.5),
    ("impressed", 0.6),
    ("love", 0.5),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleased", 0.5),
    ("quick", 0.33),
    ("smooth", 0.4),
    ("thank", 0.2),
    ("thanks", 0.2),
    ("useful", 0.3),
    ("wonderful", 1.0),
    ("works", 0.1),
    // negative
    ("angry", -0.5),
    ("annoyed", -0.4),
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("broken", -0.4),
    ("confused", -0.4),
    ("confusing", -0.4),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("disgusting", -1.0),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failing", -0.5),
    ("frustrated", -0.7),
    ("frustrating", -0.6),
    ("furious", -0.9),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("impossible", -0.67),
    ("poor", -0.4),
    ("ridiculous", -0.33),
    ("sad", -0.5),
    ("slow", -0.3),
    ("stuck", -0.3),
    ("terrible", -1.0),
    ("unacceptable", -0.6),
    ("unhappy", -0.6),
    ("upset", -0.5),
    ("useless", -0.5),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// (word, multiplier)
const INTENSIFIER_ENTRIES: &[(&str, f64)] = &[
    ("absolutely", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("totally", 1.3),
    ("very", 1.3),
];

const NEGATORS: &[&str] = &["cannot", "never", "no", "nor", "not", "without"];

static LEXICON: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| LEXICON_ENTRIES.iter().copied().collect());

static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| INTENSIFIER_ENTRIES.iter().copied().collect());

/// Scores the sentiment polarity of free text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolarityScorer;

impl PolarityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Returns the mean polarity of the sentiment words in `text`, or 0.0 if
    /// there are none. Always within [-1.0, 1.0].
    pub fn score(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let tokens = tokenize(&lower);

        let polarities: Vec<f64> = tokens
            .iter()
            .enumerate()
            .filter_map(|(i, token)| {
                let base = *LEXICON.get(*token)?;
                let mut polarity = base;

                if let Some(factor) = i.checked_sub(1).and_then(|p| INTENSIFIERS.get(tokens[p])) {
                    polarity *= factor;
                }

                let window_start = i.saturating_sub(NEGATION_WINDOW);
                if tokens[window_start..i].iter().any(|t| is_negator(t)) {
                    polarity *= NEGATION_FACTOR;
                }

                Some(polarity.clamp(-1.0, 1.0))
            })
            .collect();

        if polarities.is_empty() {
            return 0.0;
        }

        let mean = polarities.iter().sum::<f64>() / polarities.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

fn tokenize(lower: &str) -> Vec<&str> {
    lower
        .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .map(|t| t.trim_matches(|c| c == '\'' || c == '’'))
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't") || token.ends_with("n’t")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        PolarityScorer::new().score(text)
    }

    #[test]
    fn text_without_sentiment_words_scores_zero() {
        assert_eq!(score("I can't log in, my password doesn't work"), 0.0);
        assert_eq!(score(""), 0.0);
    }

    #[test]
    fn positive_words_score_positive() {
        assert!(score("The new dashboard is great, thanks!") > 0.2);
    }

    #[test]
    fn negative_words_score_negative() {
        assert!(score("This is terrible and I am frustrated") < -0.2);
    }

    #[test]
    fn score_is_the_mean_of_word_polarities() {
        // great (0.8) and bad (-0.7)
        let s = score("great product, bad support");
        assert!((s - 0.05).abs() < 1e-9);
    }

    #[test]
    fn intensifier_amplifies_the_next_word() {
        let plain = score("good");
        let boosted = score("very good");
        assert!((boosted - plain * 1.3).abs() < 1e-9);
    }

    #[test]
    fn intensified_score_is_clamped() {
        assert_eq!(score("extremely awesome"), 1.0);
    }

    #[test]
    fn negator_flips_and_damps() {
        let s = score("this is not good");
        assert!((s - 0.7 * NEGATION_FACTOR).abs() < 1e-9);
    }

    #[test]
    fn contraction_counts_as_negator() {
        assert!(score("it isn't bad") > 0.0);
        assert!(score("I don’t love it") < 0.0);
    }

    #[test]
    fn negator_outside_window_is_ignored() {
        let s = score("not that i think it is good");
        assert!((s - 0.7).abs() < 1e-9);
    }

    #[test]
    fn casing_does_not_matter() {
        assert_eq!(score("GREAT"), score("great"));
    }

    #[test]
    fn score_stays_in_range() {
        let texts = [
            "awful awful awful",
            "really really perfect",
            "not not not terrible",
            "the best, the worst",
        ];
        for text in texts {
            let s = score(text);
            assert!((-1.0..=1.0).contains(&s), "{} scored {}", text, s);
        }
    }
}
