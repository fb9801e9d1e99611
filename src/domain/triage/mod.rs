//! Triage domain - turns a support message into a canonical analysis.
//!
//! Two strategies feed the same normalizer:
//!
//! - `RuleBasedClassifier` - keyword table plus polarity scoring
//! - language model extraction, driven by the prompt from `PromptBuilder`
//!   (see `adapters::triage`)
//!
//! Both emit a `RawExtraction`; `normalize` turns it into an
//! `AnalysisResult`, and `TicketFields` projects that onto the ticket store.

mod analysis;
mod classifier;
mod errors;
mod issue_type;
mod keyword_table;
mod normalizer;
mod prompt;
mod sentiment;
mod ticket;
mod tone;

pub use analysis::{
    AnalysisRequest, AnalysisResult, RawExtraction, DEFAULT_SUGGESTED_FIX, ISSUE_TYPE_KEY,
    SUGGESTED_FIX_KEY, TONE_KEY, USER_GOAL_KEY,
};
pub use classifier::RuleBasedClassifier;
pub use errors::{ExtractionErrorKind, Service, TriageError};
pub use issue_type::IssueType;
pub use keyword_table::{first_match, KeywordRule, KEYWORD_TABLE};
pub use normalizer::normalize;
pub use prompt::PromptBuilder;
pub use sentiment::PolarityScorer;
pub use ticket::{truncate_title, TicketFields, IMPACT_LEVEL, TICKET_STATUS, TITLE_MAX_CHARS};
pub use tone::{tone_for_polarity, Tone, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
