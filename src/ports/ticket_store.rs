//! Ticket Store Port - Interface for the document database tickets land in.
//!
//! The store is write-only from the pipeline's point of view: tickets are
//! created and never read back.

use async_trait::async_trait;

use crate::domain::triage::TicketFields;

/// Port for persisting tickets.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Creates one page (ticket) in the collection identified by
    /// `collection_id`.
    async fn create_page(&self, collection_id: &str, ticket: &TicketFields)
        -> Result<(), StoreError>;
}

/// Ticket store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// API key rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Collection does not exist or is not shared with the integration.
    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    /// Rate limited by the store.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Store rejected the page payload.
    #[error("rejected: {0}")]
    Rejected(String),

    /// Store is unavailable.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_displays_correctly() {
        assert_eq!(
            StoreError::CollectionNotFound("db-1".to_string()).to_string(),
            "collection not found: db-1"
        );
        assert_eq!(
            StoreError::RateLimited { retry_after_secs: 3 }.to_string(),
            "rate limited: retry after 3s"
        );
    }
}
