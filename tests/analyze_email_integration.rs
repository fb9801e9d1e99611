//! Integration tests for the analyze-email pipeline.
//!
//! Drives `AnalyzeEmailHandler` end to end with both strategies, a mock
//! completion provider and the in-memory ticket store.

use std::sync::Arc;

use support_triage::adapters::ai::MockAIProvider;
use support_triage::adapters::storage::InMemoryTicketStore;
use support_triage::adapters::triage::{LlmExtractionStrategy, RuleBasedStrategy};
use support_triage::application::{AnalyzeEmailCommand, AnalyzeEmailHandler};
use support_triage::domain::foundation::ErrorCode;
use support_triage::domain::triage::{IssueType, Tone, TriageError};
use support_triage::ports::AIError;

// =============================================================================
// Test Infrastructure
// =============================================================================

const COLLECTION: &str = "support-db";

fn rule_based_pipeline() -> (AnalyzeEmailHandler, InMemoryTicketStore) {
    let store = InMemoryTicketStore::new();
    let handler = AnalyzeEmailHandler::new(
        Arc::new(RuleBasedStrategy::new()),
        Arc::new(store.clone()),
        COLLECTION,
    );
    (handler, store)
}

fn llm_pipeline(provider: MockAIProvider) -> (AnalyzeEmailHandler, InMemoryTicketStore) {
    let store = InMemoryTicketStore::new();
    let handler = AnalyzeEmailHandler::new(
        Arc::new(LlmExtractionStrategy::new(Arc::new(provider))),
        Arc::new(store.clone()),
        COLLECTION,
    );
    (handler, store)
}

// =============================================================================
// Rule-based strategy
// =============================================================================

#[tokio::test]
async fn login_complaint_end_to_end() {
    let (handler, store) = rule_based_pipeline();

    let result = handler
        .handle(AnalyzeEmailCommand::new(
            "I can't log in, my password doesn't work",
        ))
        .await
        .unwrap();

    assert_eq!(result.issue_type, IssueType::LoginIssue);
    assert_eq!(result.suggested_fix, "Check login process and credentials.");
    assert_eq!(result.user_goal, "");

    let tickets = store.tickets().await;
    assert_eq!(tickets.len(), 1);
    let ticket = &tickets[0];
    assert_eq!(ticket.collection_id, COLLECTION);
    assert_eq!(ticket.fields.issue_type, IssueType::LoginIssue);
    assert_eq!(ticket.fields.tone, result.tone);
    assert_eq!(ticket.fields.status, "Logged");
    assert_eq!(ticket.fields.impact_level, "Medium");
}

#[tokio::test]
async fn first_trigger_in_table_order_wins() {
    let (handler, _store) = rule_based_pipeline();

    // "payment" precedes "error" in the table
    let result = handler
        .handle(AnalyzeEmailCommand::new("Payment error when checking out"))
        .await
        .unwrap();

    assert_eq!(result.issue_type, IssueType::Billing);
}

#[tokio::test]
async fn happy_customer_is_positive() {
    let (handler, _store) = rule_based_pipeline();

    let result = handler
        .handle(AnalyzeEmailCommand::new(
            "Thanks, the new dashboard is great and I love it",
        ))
        .await
        .unwrap();

    assert_eq!(result.issue_type, IssueType::Other);
    assert_eq!(result.tone, Tone::Positive);
    assert_eq!(result.suggested_fix, "Review manually.");
}

#[tokio::test]
async fn long_message_title_is_truncated() {
    let (handler, store) = rule_based_pipeline();
    let message = "The export is slow. ".repeat(30);

    handler
        .handle(AnalyzeEmailCommand::new(message.clone()))
        .await
        .unwrap();

    let title = store.tickets().await[0].fields.title.clone();
    assert_eq!(title.chars().count(), 100);
    assert!(message.starts_with(&title));
}

#[tokio::test]
async fn whitespace_only_message_is_rejected() {
    let (handler, store) = rule_based_pipeline();

    let err = handler
        .handle(AnalyzeEmailCommand::new(" \t\n "))
        .await
        .unwrap_err();

    assert!(matches!(err, TriageError::Validation { .. }));
    assert_eq!(store.ticket_count().await, 0);
}

// =============================================================================
// Language model strategy
// =============================================================================

#[tokio::test]
async fn llm_unknown_labels_fall_back_to_defaults() {
    let provider = MockAIProvider::new()
        .with_response(r#"{"issue_type":"Shipping","tone":"Furious","user_goal":"track my parcel"}"#);
    let (handler, store) = llm_pipeline(provider);

    let result = handler
        .handle(AnalyzeEmailCommand::new("Where is my parcel?"))
        .await
        .unwrap();

    assert_eq!(result.issue_type, IssueType::Other);
    assert_eq!(result.tone, Tone::Neutral);
    assert_eq!(result.suggested_fix, "Review manually.");
    assert_eq!(result.user_goal, "track my parcel");
    assert_eq!(store.ticket_count().await, 1);
}

#[tokio::test]
async fn llm_fenced_reply_is_accepted() {
    let provider = MockAIProvider::new().with_response(
        "```json\n{\"issue_type\":\"Bug\",\"tone\":\"Negative\",\"suggested_fix\":\"Reproduce the crash\",\"user_goal\":\"save work\"}\n```",
    );
    let (handler, _store) = llm_pipeline(provider);

    let result = handler
        .handle(AnalyzeEmailCommand::new("App crashes when I save"))
        .await
        .unwrap();

    assert_eq!(result.issue_type, IssueType::Bug);
    assert_eq!(result.tone, Tone::Negative);
    assert_eq!(result.suggested_fix, "Reproduce the crash");
}

#[tokio::test]
async fn llm_malformed_reply_creates_no_ticket() {
    let provider = MockAIProvider::new().with_response("I think this is a bug.");
    let (handler, store) = llm_pipeline(provider);

    let err = handler
        .handle(AnalyzeEmailCommand::new("App crashes when I save"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::MalformedResponse);
    assert_eq!(store.ticket_count().await, 0);
}

#[tokio::test]
async fn llm_rate_limit_surfaces_as_service_error() {
    let provider = MockAIProvider::new().with_error(AIError::rate_limited(20));
    let (handler, store) = llm_pipeline(provider.clone());

    let err = handler
        .handle(AnalyzeEmailCommand::new("Billing question"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::AIProviderError);
    assert_eq!(provider.call_count(), 1);
    assert_eq!(store.ticket_count().await, 0);
}

#[tokio::test]
async fn store_failure_is_not_retried() {
    let (handler, store) = rule_based_pipeline();
    store.fail_with("notion is down").await;

    let err = handler
        .handle(AnalyzeEmailCommand::new("payment failed"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::StoreError);
    assert!(err.message().contains("notion is down"));
    assert_eq!(store.ticket_count().await, 0);
}
