//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Language model providers (OpenAI, mock)
//! - `storage` - Ticket stores (Notion, in-memory)
//! - `triage` - Classification strategies
//! - `http` - REST API

pub mod ai;
pub mod http;
pub mod storage;
pub mod triage;
