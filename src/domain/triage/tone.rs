//! Tone enum and the polarity thresholds that select it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::issue_type::fold_label;

/// Scores strictly above this are `Positive`.
pub const POSITIVE_THRESHOLD: f64 = 0.2;

/// Scores strictly below this are `Negative`.
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

/// Coarse emotional tone of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tone {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Positive, Tone::Negative, Tone::Neutral];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Positive => "Positive",
            Tone::Negative => "Negative",
            Tone::Neutral => "Neutral",
        }
    }

    /// Matches a free-form label against the known tones, ignoring case.
    pub fn from_label(raw: &str) -> Option<Tone> {
        let wanted = fold_label(raw);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|candidate| fold_label(candidate.label()) == wanted)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Maps a polarity score in [-1.0, 1.0] to a tone.
///
/// Both thresholds are strict: exactly 0.2 and -0.2 are `Neutral`.
pub fn tone_for_polarity(score: f64) -> Tone {
    if score > POSITIVE_THRESHOLD {
        Tone::Positive
    } else if score < NEGATIVE_THRESHOLD {
        Tone::Negative
    } else {
        Tone::Neutral
    }
}
