//! Deterministic keyword and sentiment classifier.

use super::analysis::{
    RawExtraction, DEFAULT_SUGGESTED_FIX, ISSUE_TYPE_KEY, SUGGESTED_FIX_KEY, TONE_KEY,
};
use super::keyword_table::first_match;
use super::sentiment::PolarityScorer;
use super::tone::tone_for_polarity;
use super::{IssueType, Tone};

/// Rule-based classifier combining the keyword table with polarity scoring.
///
/// Holds no mutable state and can be shared freely across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedClassifier {
    scorer: PolarityScorer,
}

impl RuleBasedClassifier {
    pub fn new() -> Self {
        Self {
            scorer: PolarityScorer::new(),
        }
    }

    /// Returns the issue type and fix of the first matching keyword rule, or
    /// `(Other, "Review manually.")` when no trigger occurs.
    pub fn classify(&self, text: &str) -> (IssueType, &'static str) {
        let lower = text.to_lowercase();
        match first_match(&lower) {
            Some(rule) => (rule.issue_type, rule.suggested_fix),
            None => (IssueType::Other, DEFAULT_SUGGESTED_FIX),
        }
    }

    /// Classifies the tone of `text` from its polarity score.
    pub fn analyze_tone(&self, text: &str) -> Tone {
        tone_for_polarity(self.scorer.score(text))
    }

    /// Runs both classifications and reports them as a raw extraction.
    pub fn extract(&self, text: &str) -> RawExtraction {
        let (issue_type, suggested_fix) = self.classify(text);
        let tone = self.analyze_tone(text);

        RawExtraction::new()
            .with(ISSUE_TYPE_KEY, issue_type.label())
            .with(TONE_KEY, tone.label())
            .with(SUGGESTED_FIX_KEY, suggested_fix)
    }
}
