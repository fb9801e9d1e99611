//! Structured-extraction prompt for the language model strategy.

use super::analysis::{ISSUE_TYPE_KEY, SUGGESTED_FIX_KEY, TONE_KEY, USER_GOAL_KEY};
use super::{IssueType, Tone};

/// Renders support messages into a fixed extraction prompt.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds the prompt for `message`, embedded verbatim.
    ///
    /// The reply schema lists exactly the four extraction keys and the
    /// allowed `issue_type` and `tone` values.
    pub fn build(&self, message: &str) -> String {
        format!(
            r#"You are a customer support triage assistant.

Read the customer message below and extract a structured summary.

Customer message:
"""
{message}
"""

Respond with a single JSON object and nothing else:
{{
  "{issue_key}": {issue_types},
  "{goal_key}": "what the customer is trying to achieve, in one short sentence",
  "{tone_key}": {tones},
  "{fix_key}": "one concrete next step for the support team"
}}

Rules:
- Use exactly one of the listed values for "{issue_key}" and "{tone_key}".
- Use "Other" when no category fits.
- Do not wrap the JSON in Markdown."#,
            message = message,
            issue_key = ISSUE_TYPE_KEY,
            goal_key = USER_GOAL_KEY,
            tone_key = TONE_KEY,
            fix_key = SUGGESTED_FIX_KEY,
            issue_types = alternatives(IssueType::ALL.iter().map(IssueType::label)),
            tones = alternatives(Tone::ALL.iter().map(Tone::label)),
        )
    }
}

/// Formats labels as `"A" | "B" | "C"`.
fn alternatives<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels
        .map(|label| format!("\"{}\"", label))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_message_verbatim() {
        let message = "My card was charged twice!\nOrder #123 \"urgent\"";
        let prompt = PromptBuilder::new().build(message);
        assert!(prompt.contains(message));
    }

    #[test]
    fn prompt_lists_every_schema_key() {
        let prompt = PromptBuilder::new().build("hi");
        for key in [ISSUE_TYPE_KEY, USER_GOAL_KEY, TONE_KEY, SUGGESTED_FIX_KEY] {
            assert!(prompt.contains(&format!("\"{}\":", key)), "missing {}", key);
        }
    }

    #[test]
    fn prompt_enumerates_allowed_values() {
        let prompt = PromptBuilder::new().build("hi");
        assert!(prompt.contains(
            r#""Login Issue" | "Bug" | "Billing" | "Feature Request" | "Performance" | "Other""#
        ));
        assert!(prompt.contains(r#""Positive" | "Negative" | "Neutral""#));
    }

    #[test]
    fn prompt_is_deterministic() {
        let builder = PromptBuilder::new();
        assert_eq!(builder.build("same"), builder.build("same"));
    }
}
