//! Notion Ticket Store - Implementation of TicketStore backed by a Notion
//! database.
//!
//! Each ticket becomes one page created with `POST /v1/pages`, parented to
//! the database whose id is passed as the collection id. Property names
//! must exist in the target database:
//!
//! | Property         | Notion type    |
//! |------------------|----------------|
//! | `Message Snippet`| title          |
//! | `Issue Type`     | multi_select   |
//! | `Tone`           | select         |
//! | `Proposed Fix`   | rich_text      |
//! | `Status`         | select         |
//! | `Impact Level`   | select         |

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde_json::{json, Value};
use std::time::Duration;

use crate::domain::triage::TicketFields;
use crate::ports::{StoreError, TicketStore};

/// Configuration for the Notion store.
#[derive(Debug, Clone)]
pub struct NotionConfig {
    /// Integration token.
    api_key: Secret<String>,
    /// Base URL for the API (default: https://api.notion.com/v1).
    pub base_url: String,
    /// Value of the `Notion-Version` header.
    pub notion_version: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl NotionConfig {
    /// Creates a new configuration with the given integration token.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.notion.com/v1".to_string(),
            notion_version: "2022-06-28".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the API version header.
    pub fn with_notion_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = version.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Notion-backed ticket store.
pub struct NotionTicketStore {
    config: NotionConfig,
    client: Client,
}

impl NotionTicketStore {
    pub fn new(config: NotionConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn pages_url(&self) -> String {
        format!("{}/pages", self.config.base_url.trim_end_matches('/'))
    }

    /// Renders the page-creation payload for `ticket`.
    fn page_payload(collection_id: &str, ticket: &TicketFields) -> Value {
        json!({
            "parent": { "database_id": collection_id },
            "properties": {
                "Message Snippet": {
                    "title": [{ "text": { "content": ticket.title } }]
                },
                "Issue Type": {
                    "multi_select": [{ "name": ticket.issue_type.label() }]
                },
                "Tone": {
                    "select": { "name": ticket.tone.label() }
                },
                "Proposed Fix": {
                    "rich_text": [{ "text": { "content": ticket.suggested_fix } }]
                },
                "Status": {
                    "select": { "name": ticket.status }
                },
                "Impact Level": {
                    "select": { "name": ticket.impact_level }
                }
            }
        })
    }

    async fn handle_response_status(
        &self,
        collection_id: &str,
        response: Response,
    ) -> Result<(), StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u32>().ok());
        let body = response.text().await.unwrap_or_default();
        let message = Self::error_message(&body);

        match status.as_u16() {
            401 | 403 => Err(StoreError::AuthenticationFailed),
            404 => Err(StoreError::CollectionNotFound(collection_id.to_string())),
            429 => Err(StoreError::RateLimited {
                retry_after_secs: retry_after.unwrap_or(1),
            }),
            400..=499 => Err(StoreError::Rejected(message)),
            _ => Err(StoreError::Unavailable(format!("{}: {}", status, message))),
        }
    }

    /// Pulls `message` out of a Notion error body, falling back to the raw body.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
            .unwrap_or_else(|| body.to_string())
    }
}

#[async_trait]
impl TicketStore for NotionTicketStore {
    async fn create_page(
        &self,
        collection_id: &str,
        ticket: &TicketFields,
    ) -> Result<(), StoreError> {
        let payload = Self::page_payload(collection_id, ticket);

        let response = self
            .client
            .post(self.pages_url())
            .bearer_auth(self.config.api_key())
            .header("Notion-Version", &self.config.notion_version)
            .json(&payload)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        self.handle_response_status(collection_id, response).await?;

        tracing::debug!(collection_id, issue_type = %ticket.issue_type, "Notion page created");
        Ok(())
    }
}
