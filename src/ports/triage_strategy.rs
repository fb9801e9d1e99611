//! Triage Strategy Port - the classification capability the pipeline is
//! polymorphic over.
//!
//! Exactly one strategy is active per deployment, chosen from configuration
//! at startup. Every strategy reports a `RawExtraction`; the pipeline
//! normalizes it, so the canonical result shape never depends on which
//! strategy ran.

use async_trait::async_trait;

use crate::domain::foundation::RequestId;
use crate::domain::triage::{normalize, AnalysisResult, RawExtraction, TriageError};

/// A classification strategy.
#[async_trait]
pub trait TriageStrategy: Send + Sync {
    /// Extracts raw fields from `text`.
    async fn extract(&self, request_id: RequestId, text: &str)
        -> Result<RawExtraction, TriageError>;

    /// Short name for logs ("rule_based", "llm").
    fn name(&self) -> &'static str;

    /// Extracts and normalizes in one step.
    async fn classify(
        &self,
        request_id: RequestId,
        text: &str,
    ) -> Result<AnalysisResult, TriageError> {
        let raw = self.extract(request_id, text).await?;
        Ok(normalize(&raw))
    }
}
