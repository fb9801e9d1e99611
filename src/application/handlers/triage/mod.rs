//! Triage handlers.

mod analyze_email;

pub use analyze_email::{AnalyzeEmailCommand, AnalyzeEmailHandler};
