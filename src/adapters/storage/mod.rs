//! Ticket Store Adapters
//!
//! - `NotionTicketStore` - Notion database pages
//! - `InMemoryTicketStore` - Development and testing

mod in_memory_ticket_store;
mod notion_ticket_store;

pub use in_memory_ticket_store::{InMemoryTicketStore, StoredTicket};
pub use notion_ticket_store::{NotionConfig, NotionTicketStore};
