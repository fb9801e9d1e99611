//! Application handlers.
//!
//! Command handlers that orchestrate domain operations through ports.

pub mod triage;

pub use triage::{AnalyzeEmailCommand, AnalyzeEmailHandler};
