//! Rule-based TriageStrategy - keyword table plus polarity scoring.

use async_trait::async_trait;

use crate::domain::foundation::RequestId;
use crate::domain::triage::{RawExtraction, RuleBasedClassifier, TriageError};
use crate::ports::TriageStrategy;

/// Deterministic strategy; never calls out and never fails on valid input.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedStrategy {
    classifier: RuleBasedClassifier,
}

impl RuleBasedStrategy {
    pub fn new() -> Self {
        Self {
            classifier: RuleBasedClassifier::new(),
        }
    }
}

#[async_trait]
impl TriageStrategy for RuleBasedStrategy {
    async fn extract(
        &self,
        request_id: RequestId,
        text: &str,
    ) -> Result<RawExtraction, TriageError> {
        let raw = self.classifier.extract(text);
        tracing::debug!(%request_id, fields = raw.len(), "rule-based extraction complete");
        Ok(raw)
    }

    fn name(&self) -> &'static str {
        "rule_based"
    }
}
