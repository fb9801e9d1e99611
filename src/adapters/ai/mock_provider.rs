//! Mock AI Provider - scripted completions for tests and local runs.
//!
//! Replies are queued and consumed in order; once the queue is empty every
//! call gets an empty JSON object. All requests are recorded.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo, TokenUsage,
};

/// Reply given once the configured queue is exhausted.
const DEFAULT_MOCK_CONTENT: &str = "{}";

/// Scripted AIProvider. Clones share the queue and call history.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    replies: Arc<Mutex<VecDeque<Result<MockReply, AIError>>>>,
    info: ProviderInfo,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

#[derive(Debug)]
struct MockReply {
    content: String,
    truncated: bool,
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a complete reply.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(Ok(MockReply {
            content: content.into(),
            truncated: false,
        }))
    }

    /// Queues a reply cut off at the token limit.
    pub fn with_truncated_response(self, content: impl Into<String>) -> Self {
        self.push(Ok(MockReply {
            content: content.into(),
            truncated: true,
        }))
    }

    /// Queues a failure.
    pub fn with_error(self, error: AIError) -> Self {
        self.push(Err(error))
    }

    fn push(self, reply: Result<MockReply, AIError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        self.calls.lock().unwrap().push(request);

        let reply = self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(MockReply {
                content: DEFAULT_MOCK_CONTENT.to_string(),
                truncated: false,
            })
        })?;

        Ok(CompletionResponse {
            usage: TokenUsage::new(10, reply.content.len() as u32),
            content: reply.content,
            model: self.info.model.clone(),
            truncated: reply.truncated,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
