//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, error codes)
//! - `triage` - Classification, extraction and normalization of support messages

pub mod foundation;
pub mod triage;
