//! In-Memory Ticket Store Adapter
//!
//! Keeps created tickets in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::triage::TicketFields;
use crate::ports::{StoreError, TicketStore};

/// A ticket as recorded by the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTicket {
    pub collection_id: String,
    pub fields: TicketFields,
}

/// In-memory storage for tickets
#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketStore {
    tickets: Arc<RwLock<Vec<StoredTicket>>>,
    failure: Arc<RwLock<Option<String>>>,
}

impl InMemoryTicketStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail with `StoreError::Unavailable`.
    pub async fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write().await = Some(message.into());
    }

    /// All tickets written so far, in order.
    pub async fn tickets(&self) -> Vec<StoredTicket> {
        self.tickets.read().await.clone()
    }

    /// Get the number of stored tickets
    pub async fn ticket_count(&self) -> usize {
        self.tickets.read().await.len()
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn create_page(
        &self,
        collection_id: &str,
        ticket: &TicketFields,
    ) -> Result<(), StoreError> {
        if let Some(message) = self.failure.read().await.clone() {
            return Err(StoreError::Unavailable(message));
        }

        self.tickets.write().await.push(StoredTicket {
            collection_id: collection_id.to_string(),
            fields: ticket.clone(),
        });
        Ok(())
    }
}
