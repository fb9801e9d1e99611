//! Request and response DTOs for the triage endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::triage::AnalysisResult;

/// Body of `POST /analyze-email`. A missing or `null` `email` reads as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeEmailRequest {
    #[serde(default)]
    pub email: Option<String>,
}

impl AnalyzeEmailRequest {
    pub fn into_text(self) -> String {
        self.email.unwrap_or_default()
    }
}

/// Successful analysis envelope.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeEmailResponse {
    pub status: &'static str,
    pub data: AnalysisData,
}

/// Canonical analysis as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisData {
    pub issue_type: String,
    pub tone: String,
    pub suggested_fix: String,
    pub user_goal: String,
}

impl From<AnalysisResult> for AnalysisData {
    fn from(result: AnalysisResult) -> Self {
        Self {
            issue_type: result.issue_type.label().to_string(),
            tone: result.tone.label().to_string(),
            suggested_fix: result.suggested_fix,
            user_goal: result.user_goal,
        }
    }
}

impl AnalyzeEmailResponse {
    pub fn success(result: AnalysisResult) -> Self {
        Self {
            status: "success",
            data: result.into(),
        }
    }
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
