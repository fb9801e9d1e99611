//! HTTP handlers for triage endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::{AnalyzeEmailCommand, AnalyzeEmailHandler};
use crate::domain::triage::TriageError;

use super::dto::{AnalyzeEmailRequest, AnalyzeEmailResponse, ErrorResponse};

/// Message returned when the request carries no usable text.
pub const EMPTY_EMAIL_MESSAGE: &str = "No email content provided";

/// Error code for bodies that fail JSON extraction.
pub const INVALID_REQUEST_CODE: &str = "INVALID_REQUEST";

/// Plain-text banner served on `GET /`.
pub const HOME_BANNER: &str = "Support triage service is running";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TriageHandlers {
    analyze_handler: Arc<AnalyzeEmailHandler>,
}

impl TriageHandlers {
    pub fn new(analyze_handler: Arc<AnalyzeEmailHandler>) -> Self {
        Self { analyze_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Liveness banner
pub async fn home() -> &'static str {
    HOME_BANNER
}

/// POST /analyze-email - Classify a message and file a ticket
pub async fn analyze_email(
    State(handlers): State<TriageHandlers>,
    payload: Result<Json<AnalyzeEmailRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return handle_rejection(rejection),
    };
    let cmd = AnalyzeEmailCommand::new(req.into_text());

    match handlers.analyze_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(AnalyzeEmailResponse::success(result))).into_response(),
        Err(e) => handle_triage_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Reports a body that could not be extracted with the extractor's status.
fn handle_rejection(rejection: JsonRejection) -> Response {
    tracing::debug!(status = %rejection.status(), "rejected request body");
    (
        rejection.status(),
        Json(ErrorResponse::new(INVALID_REQUEST_CODE, rejection.body_text())),
    )
        .into_response()
}

fn handle_triage_error(error: TriageError) -> Response {
    let code = error.code().to_string();
    match &error {
        TriageError::Validation { field, .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(code, EMPTY_EMAIL_MESSAGE).with_details(json!({ "field": field }))),
        )
            .into_response(),
        TriageError::Extraction { .. } | TriageError::Service { .. } => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse::new(code, error.message())),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::triage::Service;

    #[test]
    fn validation_error_maps_to_400() {
        let response = handle_triage_error(TriageError::validation("text", "empty"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn malformed_reply_maps_to_502() {
        let response = handle_triage_error(TriageError::malformed_response("not json"));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn service_failure_maps_to_502() {
        let response =
            handle_triage_error(TriageError::service(Service::TicketStore, "unauthorized"));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
