//! HTTP routes for triage endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analyze_email, home, TriageHandlers};

/// Creates the triage router with all endpoints.
pub fn triage_routes(handlers: TriageHandlers) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/analyze-email", post(analyze_email))
        .with_state(handlers)
}
