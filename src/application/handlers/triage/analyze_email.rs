//! AnalyzeEmail - Command handler for triaging one support message.
//!
//! Validates the message, classifies it with the configured strategy and
//! files the result as a ticket. Steps run strictly in that order and stop
//! at the first failure, so nothing is stored for a message that failed
//! validation or extraction.

use std::sync::Arc;

use crate::domain::foundation::RequestId;
use crate::domain::triage::{AnalysisRequest, AnalysisResult, Service, TicketFields, TriageError};
use crate::ports::{TicketStore, TriageStrategy};

/// Command to analyze a support message.
#[derive(Debug, Clone)]
pub struct AnalyzeEmailCommand {
    pub text: String,
}

impl AnalyzeEmailCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Handler for analyzing support messages.
pub struct AnalyzeEmailHandler {
    strategy: Arc<dyn TriageStrategy>,
    store: Arc<dyn TicketStore>,
    collection_id: String,
}

impl AnalyzeEmailHandler {
    pub fn new(
        strategy: Arc<dyn TriageStrategy>,
        store: Arc<dyn TicketStore>,
        collection_id: impl Into<String>,
    ) -> Self {
        Self {
            strategy,
            store,
            collection_id: collection_id.into(),
        }
    }

    pub async fn handle(&self, cmd: AnalyzeEmailCommand) -> Result<AnalysisResult, TriageError> {
        let request_id = RequestId::new();

        // 1. Reject empty input before any outbound call
        let request = AnalysisRequest::new(&cmd.text)?;

        // 2. Classify
        let result = self
            .strategy
            .classify(request_id, request.text())
            .await?;

        tracing::debug!(
            %request_id,
            strategy = self.strategy.name(),
            issue_type = %result.issue_type,
            tone = %result.tone,
            "message classified"
        );

        // 3. File the ticket
        let ticket = TicketFields::from_analysis(request.text(), &result);
        self.store
            .create_page(&self.collection_id, &ticket)
            .await
            .map_err(|e| {
                tracing::error!(%request_id, error = %e, "failed to store ticket");
                TriageError::service(Service::TicketStore, e.to_string())
            })?;

        tracing::info!(%request_id, issue_type = %result.issue_type, "ticket created");
        Ok(result)
    }
}
