//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Language model completion service
//! - `TicketStore` - Document database tickets are written to
//! - `TriageStrategy` - Interchangeable classification strategies

mod ai_provider;
mod ticket_store;
mod triage_strategy;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Message, MessageRole,
    ProviderInfo, RequestMetadata, TokenUsage,
};
pub use ticket_store::{StoreError, TicketStore};
pub use triage_strategy::TriageStrategy;
