//! Reconciles strategy output into the canonical `AnalysisResult`.

use super::analysis::{
    AnalysisResult, RawExtraction, DEFAULT_SUGGESTED_FIX, ISSUE_TYPE_KEY, SUGGESTED_FIX_KEY,
    TONE_KEY, USER_GOAL_KEY,
};
use super::{IssueType, Tone};

/// Fills every canonical field from `raw`, falling back to defaults.
///
/// Total: never fails. Blank values count as absent, and `issue_type` / `tone`
/// values outside the known vocabulary become `Other` / `Neutral`.
pub fn normalize(raw: &RawExtraction) -> AnalysisResult {
    let issue_type = present(raw, ISSUE_TYPE_KEY)
        .and_then(IssueType::from_label)
        .unwrap_or_default();

    let tone = present(raw, TONE_KEY)
        .and_then(Tone::from_label)
        .unwrap_or_default();

    let suggested_fix = present(raw, SUGGESTED_FIX_KEY)
        .unwrap_or(DEFAULT_SUGGESTED_FIX)
        .to_string();

    let user_goal = present(raw, USER_GOAL_KEY).unwrap_or_default().to_string();

    AnalysisResult {
        issue_type,
        tone,
        suggested_fix,
        user_goal,
    }
}

fn present<'a>(raw: &'a RawExtraction, key: &str) -> Option<&'a str> {
    raw.get(key).map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_extraction_yields_defaults() {
        let result = normalize(&RawExtraction::new());
        assert_eq!(result.issue_type, IssueType::Other);
        assert_eq!(result.tone, Tone::Neutral);
        assert_eq!(result.suggested_fix, "Review manually.");
        assert_eq!(result.user_goal, "");
    }

    #[test]
    fn complete_extraction_is_carried_over() {
        let raw = RawExtraction::new()
            .with(ISSUE_TYPE_KEY, "Billing")
            .with(TONE_KEY, "Negative")
            .with(SUGGESTED_FIX_KEY, "Refund the duplicate charge.")
            .with(USER_GOAL_KEY, "Get money back");

        let result = normalize(&raw);
        assert_eq!(result.issue_type, IssueType::Billing);
        assert_eq!(result.tone, Tone::Negative);
        assert_eq!(result.suggested_fix, "Refund the duplicate charge.");
        assert_eq!(result.user_goal, "Get money back");
    }

    #[test]
    fn blank_values_count_as_missing() {
        let raw = RawExtraction::new()
            .with(ISSUE_TYPE_KEY, "")
            .with(TONE_KEY, "   ")
            .with(SUGGESTED_FIX_KEY, "\n");

        assert_eq!(normalize(&raw), AnalysisResult::default());
    }

    #[test]
    fn unknown_vocabulary_falls_back() {
        let raw = RawExtraction::new()
            .with(ISSUE_TYPE_KEY, "Account Deletion")
            .with(TONE_KEY, "Furious");

        let result = normalize(&raw);
        assert_eq!(result.issue_type, IssueType::Other);
        assert_eq!(result.tone, Tone::Neutral);
    }

    #[test]
    fn values_are_trimmed() {
        let raw = RawExtraction::new()
            .with(ISSUE_TYPE_KEY, " performance ")
            .with(SUGGESTED_FIX_KEY, "  Optimize system speed. ");

        let result = normalize(&raw);
        assert_eq!(result.issue_type, IssueType::Performance);
        assert_eq!(result.suggested_fix, "Optimize system speed.");
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let raw = RawExtraction::new().with("confidence", "0.9");
        assert_eq!(normalize(&raw), AnalysisResult::default());
    }
}
