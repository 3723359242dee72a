//! HTTP error handling and response conversion.
//!
//! Domain errors are mapped to status codes and a JSON body of the form
//! `{"error": "..."}`, with extra fields for the cases the web form displays.

use crate::domain::distance::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Request validation failed (400).
    ValidationError(String),

    /// One or both pincodes are absent from the reference table (404).
    PincodeNotFound(Vec<String>),

    /// The routing provider failed and the strict policy is active.
    Routing {
        message: String,
        status: Option<u16>,
        code: String,
    },

    /// Database operation failed (500).
    Database(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::PincodeNotFound(codes) => write!(f, "Pincode not found: {}", codes.join(", ")),
            Self::Routing { message, code, .. } => {
                write!(f, "Routing error ({}): {}", code, message)
            }
            Self::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    ///
    /// Routing failures pass the provider's error status through. Without one, a
    /// missing route is a 404, a timeout a 504 and anything else a 502.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::PincodeNotFound(_) => StatusCode::NOT_FOUND,
            Self::Routing { status, code, .. } => status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(match code.as_str() {
                    "NO_ROUTE" => StatusCode::NOT_FOUND,
                    "TIMEOUT" => StatusCode::GATEWAY_TIMEOUT,
                    _ => StatusCode::BAD_GATEWAY,
                }),
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing body. Infrastructure details stay in the logs.
    fn body(&self) -> Value {
        match self {
            Self::ValidationError(msg) => json!({ "error": msg }),
            Self::PincodeNotFound(codes) => json!({
                "error": "One or both pincodes not found",
                "missing": codes,
            }),
            // `code` is the numeric status sent, as the web form reads it.
            Self::Routing { message, code, .. } => json!({
                "error": "Failed to calculate distance between the given pincodes",
                "details": message,
                "code": self.status_code().as_u16(),
                "reason": code,
            }),
            Self::Database(_) => json!({ "error": "Database operation failed" }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("error={}", self);
        } else {
            tracing::warn!("error={}", self);
        }

        (status, Json(self.body())).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(msg) => AppError::ValidationError(msg),
            DomainError::NotFound { missing } => AppError::PincodeNotFound(missing),
            DomainError::RoutingFailed {
                message,
                status,
                code,
            } => AppError::Routing {
                message,
                status,
                code,
            },
            DomainError::InfrastructureError(msg) => {
                tracing::error!(infrastructure_error = %msg);
                AppError::Database(msg)
            }
        }
    }
}
