//! IssueType enum - coarse category of a support message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a support message is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IssueType {
    #[serde(rename = "Login Issue")]
    LoginIssue,
    #[serde(rename = "Bug")]
    Bug,
    #[serde(rename = "Billing")]
    Billing,
    #[serde(rename = "Feature Request")]
    FeatureRequest,
    #[serde(rename = "Performance")]
    Performance,
    #[default]
    #[serde(rename = "Other")]
    Other,
}

impl IssueType {
    /// Every category, in the order they are offered to the language model.
    pub const ALL: [IssueType; 6] = [
        IssueType::LoginIssue,
        IssueType::Bug,
        IssueType::Billing,
        IssueType::FeatureRequest,
        IssueType::Performance,
        IssueType::Other,
    ];

    /// Human-readable label, as stored on tickets.
    pub fn label(&self) -> &'static str {
        match self {
            IssueType::LoginIssue => "Login Issue",
            IssueType::Bug => "Bug",
            IssueType::Billing => "Billing",
            IssueType::FeatureRequest => "Feature Request",
            IssueType::Performance => "Performance",
            IssueType::Other => "Other",
        }
    }

    /// Matches a free-form label against the known categories.
    ///
    /// Comparison ignores case, whitespace, `_` and `-`, so `"login_issue"`,
    /// `"LOGIN ISSUE"` and `"Login-Issue"` all resolve to `LoginIssue`.
    pub fn from_label(raw: &str) -> Option<IssueType> {
        let wanted = fold_label(raw);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|candidate| fold_label(candidate.label()) == wanted)
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lowercases and strips separators so labels compare loosely.
pub(crate) fn fold_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
