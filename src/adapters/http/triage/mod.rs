//! Triage HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{AnalysisData, AnalyzeEmailRequest, AnalyzeEmailResponse, ErrorResponse};
pub use handlers::{TriageHandlers, EMPTY_EMAIL_MESSAGE, HOME_BANNER};
pub use routes::triage_routes;
