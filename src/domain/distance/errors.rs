use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Pincode not found: {}", .missing.join(", "))]
    NotFound { missing: Vec<String> },
    #[error("Routing failed: {message}")]
    RoutingFailed {
        message: String,
        /// HTTP status reported by the routing provider, if it answered at all.
        status: Option<u16>,
        /// Coarse failure kind (`TIMEOUT`, `NO_ROUTE`, ...) or the provider status as text.
        code: String,
    },
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
