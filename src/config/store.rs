//! Ticket store (Notion) configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Ticket store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Notion integration token
    pub api_key: Secret<String>,

    /// Database that receives one page per ticket
    pub database_id: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the Notion-Version header
    #[serde(default = "default_notion_version")]
    pub notion_version: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("STORE__API_KEY"));
        }
        if self.database_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("STORE__DATABASE_ID"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidUrl("store.base_url"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://api.notion.com/v1".to_string()
}

fn default_notion_version() -> String {
    "2022-06-28".to_string()
}

fn default_timeout() -> u64 {
    30
}
