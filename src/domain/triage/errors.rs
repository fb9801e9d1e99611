//! Triage pipeline error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Why a language model reply could not be turned into an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionErrorKind {
    /// The reply was not a JSON object.
    MalformedResponse,
}

/// Outbound collaborator that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Completion,
    TicketStore,
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Service::Completion => write!(f, "completion service"),
            Service::TicketStore => write!(f, "ticket store"),
        }
    }
}

/// Errors surfaced by the triage pipeline. None are retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriageError {
    /// Input rejected before any classification ran.
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    /// Language model reply could not be decoded.
    #[error("Extraction failed ({kind:?}): {detail}")]
    Extraction {
        kind: ExtractionErrorKind,
        detail: String,
    },

    /// An outbound call failed; carries the collaborator's own message.
    #[error("{service} failed: {message}")]
    Service { service: Service, message: String },
}

impl TriageError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        TriageError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn malformed_response(detail: impl Into<String>) -> Self {
        TriageError::Extraction {
            kind: ExtractionErrorKind::MalformedResponse,
            detail: detail.into(),
        }
    }

    pub fn service(service: Service, message: impl Into<String>) -> Self {
        TriageError::Service {
            service,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TriageError::Validation { .. } => ErrorCode::ValidationFailed,
            TriageError::Extraction { .. } => ErrorCode::MalformedResponse,
            TriageError::Service {
                service: Service::Completion,
                ..
            } => ErrorCode::AIProviderError,
            TriageError::Service {
                service: Service::TicketStore,
                ..
            } => ErrorCode::StoreError,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<ValidationError> for TriageError {
    fn from(err: ValidationError) -> Self {
        TriageError::validation(err.field().to_string(), err.to_string())
    }
}
