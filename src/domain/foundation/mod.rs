//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error types that the triage domain builds on.

mod errors;
mod ids;

pub use errors::{ErrorCode, ValidationError};
pub use ids::RequestId;
