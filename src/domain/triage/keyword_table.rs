//! Trigger keywords that select an issue category under the rule-based
//! strategy.

use super::IssueType;

/// One trigger substring and the classification it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub trigger: &'static str,
    pub issue_type: IssueType,
    pub suggested_fix: &'static str,
    /// Match only where the trigger starts a word.
    pub word_start: bool,
}

impl KeywordRule {
    /// Whether the trigger occurs in `lowercase_text` under this rule.
    pub fn matches(&self, lowercase_text: &str) -> bool {
        if !self.word_start {
            return lowercase_text.contains(self.trigger);
        }
        lowercase_text.match_indices(self.trigger).any(|(idx, _)| {
            lowercase_text[..idx]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric())
        })
    }
}

/// Declaration order is the tie-break: the first rule whose trigger occurs in
/// the message wins. Triggers are lowercase. "log in" sits ahead of
/// "password" so the two-word spelling classifies like "login"; it only
/// matches at a word start so "blog in" or "catalog in" do not trigger it.
pub const KEYWORD_TABLE: &[KeywordRule] = &[
    KeywordRule {
        trigger: "login",
        issue_type: IssueType::LoginIssue,
        suggested_fix: "Check login process and credentials.",
        word_start: false,
    },
    KeywordRule {
        trigger: "log in",
        issue_type: IssueType::LoginIssue,
        suggested_fix: "Check login process and credentials.",
        word_start: true,
    },
    KeywordRule {
        trigger: "password",
        issue_type: IssueType::LoginIssue,
        suggested_fix: "Provide clear password reset instructions.",
        word_start: false,
    },
    KeywordRule {
        trigger: "bug",
        issue_type: IssueType::Bug,
        suggested_fix: "Investigate and fix the reported bug.",
        word_start: false,
    },
    KeywordRule {
        trigger: "payment",
        issue_type: IssueType::Billing,
        suggested_fix: "Verify payment processing and errors.",
        word_start: false,
    },
    KeywordRule {
        trigger: "upgrade",
        issue_type: IssueType::FeatureRequest,
        suggested_fix: "Consider feature upgrade requests.",
        word_start: false,
    },
    KeywordRule {
        trigger: "slow",
        issue_type: IssueType::Performance,
        suggested_fix: "Optimize system speed.",
        word_start: false,
    },
    KeywordRule {
        trigger: "error",
        issue_type: IssueType::Bug,
        suggested_fix: "Check error logs and resolve.",
        word_start: false,
    },
];

/// Returns the first rule, in declaration order, whose trigger occurs in
/// `lowercase_text`.
pub fn first_match(lowercase_text: &str) -> Option<&'static KeywordRule> {
    KEYWORD_TABLE
        .iter()
        .find(|rule| rule.matches(lowercase_text))
}
