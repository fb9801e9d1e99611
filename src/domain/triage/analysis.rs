//! Request, raw extraction and canonical result types of the triage pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{IssueType, Tone};
use crate::domain::foundation::ValidationError;

/// Key under which strategies report the issue category.
pub const ISSUE_TYPE_KEY: &str = "issue_type";
/// Key under which strategies report the tone.
pub const TONE_KEY: &str = "tone";
/// Key under which strategies report the remediation.
pub const SUGGESTED_FIX_KEY: &str = "suggested_fix";
/// Key under which strategies report what the customer is trying to do.
pub const USER_GOAL_KEY: &str = "user_goal";

/// Default remediation when nothing better is known.
pub const DEFAULT_SUGGESTED_FIX: &str = "Review manually.";

/// A single support message awaiting analysis.
///
/// The text is trimmed on construction and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    text: String,
}

impl AnalysisRequest {
    /// Creates a request, rejecting empty or whitespace-only text.
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Untyped key/value output of a strategy before normalization.
///
/// May be incomplete or hold values outside the canonical vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawExtraction(BTreeMap<String, String>);

impl RawExtraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawExtraction {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Canonical analysis of a support message. Every field always has a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub issue_type: IssueType,
    pub tone: Tone,
    pub suggested_fix: String,
    pub user_goal: String,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            issue_type: IssueType::Other,
            tone: Tone::Neutral,
            suggested_fix: DEFAULT_SUGGESTED_FIX.to_string(),
            user_goal: String::new(),
        }
    }
}
