//! Language model TriageStrategy.
//!
//! Sends the extraction prompt through an `AIProvider` and decodes the
//! reply into a `RawExtraction`. The reply must be a JSON object; anything
//! else is a `MalformedResponse`. No retries.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::domain::foundation::RequestId;
use crate::domain::triage::{PromptBuilder, RawExtraction, Service, TriageError};
use crate::ports::{AIProvider, CompletionRequest, MessageRole, RequestMetadata, TriageStrategy};

/// Default sampling temperature for extraction.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Default completion length cap.
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// Standing instruction sent ahead of the extraction prompt.
const SYSTEM_INSTRUCTION: &str =
    "You triage customer support messages. Reply with one JSON object only.";

/// Extraction through a language model.
pub struct LlmExtractionStrategy {
    ai_provider: Arc<dyn AIProvider>,
    prompt_builder: PromptBuilder,
    temperature: f32,
    max_tokens: u32,
}

impl LlmExtractionStrategy {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self {
            ai_provider,
            prompt_builder: PromptBuilder::new(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn build_request(&self, request_id: RequestId, text: &str) -> CompletionRequest {
        let metadata = RequestMetadata::new(request_id, format!("triage-{}", request_id));

        CompletionRequest::new(metadata)
            .with_message(MessageRole::System, SYSTEM_INSTRUCTION)
            .with_message(MessageRole::User, self.prompt_builder.build(text))
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
            .with_json_response()
    }
}

/// Removes a surrounding Markdown code fence, optionally tagged `json` in
/// any letter case.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = inner.strip_suffix("```") else {
        return trimmed;
    };
    let inner = match inner.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &inner[4..],
        _ => inner,
    };
    inner.trim()
}

/// Decodes a completion reply into raw fields.
///
/// Strings are kept as-is, numbers and booleans are stringified, `null`
/// and nested values are dropped.
pub fn parse_reply(reply: &str) -> Result<RawExtraction, TriageError> {
    let body = strip_code_fence(reply);

    let parsed: Value = serde_json::from_str(body)
        .map_err(|e| TriageError::malformed_response(format!("reply is not valid JSON: {}", e)))?;

    let object: Map<String, Value> = match parsed {
        Value::Object(object) => object,
        other => {
            return Err(TriageError::malformed_response(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut raw = RawExtraction::new();
    for (key, value) in object {
        match value {
            Value::String(s) => raw.insert(key, s),
            Value::Number(n) => raw.insert(key, n.to_string()),
            Value::Bool(b) => raw.insert(key, b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => {}
        }
    }
    Ok(raw)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl TriageStrategy for LlmExtractionStrategy {
    async fn extract(
        &self,
        request_id: RequestId,
        text: &str,
    ) -> Result<RawExtraction, TriageError> {
        let request = self.build_request(request_id, text);

        let response = self
            .ai_provider
            .complete(request)
            .await
            .map_err(|e| TriageError::service(Service::Completion, e.to_string()))?;

        tracing::debug!(
            %request_id,
            model = %response.model,
            tokens = response.usage.total_tokens,
            "completion received"
        );

        if response.truncated {
            tracing::warn!(
                %request_id,
                max_tokens = self.max_tokens,
                "completion reply hit the token limit"
            );
        }

        parse_reply(&response.content).map_err(|e| {
            tracing::warn!(%request_id, error = %e, "discarding malformed completion reply");
            match (response.truncated, e) {
                (true, TriageError::Extraction { detail, .. }) => TriageError::malformed_response(
                    format!("reply truncated at {} tokens: {}", self.max_tokens, detail),
                ),
                (_, e) => e,
            }
        })
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::ports::AIError;
    use crate::domain::triage::{ExtractionErrorKind, IssueType, Tone};

    fn strategy(provider: MockAIProvider) -> LlmExtractionStrategy {
        LlmExtractionStrategy::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn well_formed_reply_is_normalized() {
        let provider = MockAIProvider::new().with_response(
            r#"{"issue_type":"Billing","user_goal":"get a refund","tone":"Negative","suggested_fix":"Refund the duplicate charge"}"#,
        );

        let result = strategy(provider)
            .classify(RequestId::new(), "I was charged twice")
            .await
            .unwrap();

        assert_eq!(result.issue_type, IssueType::Billing);
        assert_eq!(result.tone, Tone::Negative);
        assert_eq!(result.user_goal, "get a refund");
        assert_eq!(result.suggested_fix, "Refund the duplicate charge");
    }

    #[tokio::test]
    async fn request_carries_prompt_and_sampling_settings() {
        let provider = MockAIProvider::new().with_response("{}");
        let strategy = strategy(provider.clone()).with_max_tokens(150);
        let request_id = RequestId::new();

        strategy.extract(request_id, "app is slow").await.unwrap();

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        let request = &calls[0];
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert_eq!(request.messages[0].content, SYSTEM_INSTRUCTION);
        assert_eq!(request.messages[1].role, MessageRole::User);
        assert!(request.messages[1].content.contains("app is slow"));
        assert_eq!(request.temperature, Some(DEFAULT_TEMPERATURE));
        assert_eq!(request.max_tokens, Some(150));
        assert!(request.json_response);
        assert_eq!(request.metadata.trace_id, format!("triage-{}", request_id));
    }

    #[tokio::test]
    async fn non_json_reply_is_malformed() {
        let provider = MockAIProvider::new().with_response("Sure! The issue is a bug.");

        let err = strategy(provider)
            .classify(RequestId::new(), "error on save")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TriageError::Extraction {
                kind: ExtractionErrorKind::MalformedResponse,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn provider_failure_is_service_error() {
        let provider = MockAIProvider::new().with_error(AIError::unavailable("overloaded"));

        let err = strategy(provider)
            .extract(RequestId::new(), "hello")
            .await
            .unwrap_err();

        match err {
            TriageError::Service { service, message } => {
                assert_eq!(service, Service::Completion);
                assert!(message.contains("overloaded"));
            }
            other => panic!("expected service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn truncated_reply_reports_token_limit() {
        let provider = MockAIProvider::new().with_truncated_response(r#"{"issue_type": "Bu"#);

        let err = strategy(provider)
            .with_max_tokens(20)
            .extract(RequestId::new(), "crash on save")
            .await
            .unwrap_err();

        match err {
            TriageError::Extraction { kind, detail } => {
                assert_eq!(kind, ExtractionErrorKind::MalformedResponse);
                assert!(detail.starts_with("reply truncated at 20 tokens"), "{}", detail);
            }
            other => panic!("expected extraction error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_object_yields_defaults() {
        let provider = MockAIProvider::new().with_response("{}");

        let result = strategy(provider)
            .classify(RequestId::new(), "hello")
            .await
            .unwrap();

        assert_eq!(result.issue_type, IssueType::Other);
        assert_eq!(result.tone, Tone::Neutral);
        assert_eq!(result.suggested_fix, "Review manually.");
        assert_eq!(result.user_goal, "");
    }

    #[test]
    fn fenced_reply_is_unwrapped() {
        let raw = parse_reply("```json\n{\"tone\": \"Positive\"}\n```").unwrap();
        assert_eq!(raw.get("tone"), Some("Positive"));

        let raw = parse_reply("```\n{\"tone\": \"Neutral\"}\n```").unwrap();
        assert_eq!(raw.get("tone"), Some("Neutral"));
    }

    #[test]
    fn fence_tag_is_case_insensitive() {
        let raw = parse_reply("```JSON\n{\"issue_type\": \"Bug\"}\n```").unwrap();
        assert_eq!(raw.get("issue_type"), Some("Bug"));

        let raw = parse_reply("```Json {\"tone\": \"Negative\"} ```").unwrap();
        assert_eq!(raw.get("tone"), Some("Negative"));
    }

    #[test]
    fn scalars_are_stringified_and_nested_values_dropped() {
        let raw = parse_reply(
            r#"{"user_goal": 42, "tone": true, "issue_type": null, "suggested_fix": ["a"], "extra": {"k": 1}}"#,
        )
        .unwrap();

        assert_eq!(raw.get("user_goal"), Some("42"));
        assert_eq!(raw.get("tone"), Some("true"));
        assert_eq!(raw.get("issue_type"), None);
        assert_eq!(raw.get("suggested_fix"), None);
        assert_eq!(raw.get("extra"), None);
    }

    #[test]
    fn json_array_is_malformed() {
        let err = parse_reply(r#"["Bug"]"#).unwrap_err();
        assert_eq!(
            err,
            TriageError::malformed_response("expected a JSON object, got an array")
        );
    }
}
