//! TriageStrategy implementations.
//!
//! - `RuleBasedStrategy` - keyword table and polarity scoring, no I/O
//! - `LlmExtractionStrategy` - structured extraction through an `AIProvider`

mod llm_extractor;
mod rule_based;

pub use llm_extractor::{
    parse_reply, LlmExtractionStrategy, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
pub use rule_based::RuleBasedStrategy;
