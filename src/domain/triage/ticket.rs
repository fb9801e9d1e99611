//! Field mapping handed to the ticket store.

use serde::Serialize;

use super::{AnalysisResult, IssueType, Tone};

/// Maximum number of characters of the message kept as the ticket title.
pub const TITLE_MAX_CHARS: usize = 100;

/// Status every new ticket is filed with.
pub const TICKET_STATUS: &str = "Logged";

/// Impact level every new ticket is filed with.
pub const IMPACT_LEVEL: &str = "Medium";

/// Projection of an analysis onto the fields a stored ticket carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketFields {
    pub title: String,
    pub issue_type: IssueType,
    pub tone: Tone,
    pub suggested_fix: String,
    pub status: &'static str,
    pub impact_level: &'static str,
}

impl TicketFields {
    /// Builds the ticket for `message` and its analysis.
    pub fn from_analysis(message: &str, result: &AnalysisResult) -> Self {
        Self {
            title: truncate_title(message),
            issue_type: result.issue_type,
            tone: result.tone,
            suggested_fix: result.suggested_fix.clone(),
            status: TICKET_STATUS,
            impact_level: IMPACT_LEVEL,
        }
    }
}

/// Returns the first `TITLE_MAX_CHARS` characters of `message`.
///
/// Counts Unicode scalar values, so multi-byte text is never split inside a
/// character.
pub fn truncate_title(message: &str) -> String {
    match message.char_indices().nth(TITLE_MAX_CHARS) {
        Some((byte_idx, _)) => message[..byte_idx].to_string(),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_message_is_kept_whole() {
        assert_eq!(truncate_title("payment failed"), "payment failed");
    }

    #[test]
    fn long_message_is_cut_at_one_hundred_chars() {
        let message = "x".repeat(250);
        let title = truncate_title(&message);
        assert_eq!(title.chars().count(), 100);
    }

    #[test]
    fn exactly_one_hundred_chars_is_untouched() {
        let message = "y".repeat(100);
        assert_eq!(truncate_title(&message), message);
    }

    #[test]
    fn multibyte_characters_are_not_split() {
        let message = "é".repeat(150);
        let title = truncate_title(&message);
        assert_eq!(title.chars().count(), 100);
        assert_eq!(title.len(), 200);
    }

    #[test]
    fn from_analysis_fills_fixed_constants() {
        let result = AnalysisResult {
            issue_type: IssueType::Bug,
            tone: Tone::Negative,
            suggested_fix: "Check error logs and resolve.".to_string(),
            user_goal: String::new(),
        };
        let ticket = TicketFields::from_analysis("error on save", &result);

        assert_eq!(ticket.title, "error on save");
        assert_eq!(ticket.issue_type, IssueType::Bug);
        assert_eq!(ticket.tone, Tone::Negative);
        assert_eq!(ticket.suggested_fix, "Check error logs and resolve.");
        assert_eq!(ticket.status, "Logged");
        assert_eq!(ticket.impact_level, "Medium");
    }

    proptest! {
        #[test]
        fn title_is_bounded_prefix(message in "\\PC{0,300}") {
            let title = truncate_title(&message);
            prop_assert!(title.chars().count() <= TITLE_MAX_CHARS);
            prop_assert!(message.starts_with(&title));
        }

        #[test]
        fn title_keeps_short_messages_whole(message in "\\PC{0,100}") {
            prop_assert_eq!(truncate_title(&message), message);
        }
    }
}
