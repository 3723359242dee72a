use crate::domain::pincode::entity::Coordinates;
use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;

/// First route candidate returned by the provider, in provider units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummary {
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("Routing request timed out")]
    Timeout,

    #[error("Routing request failed: {0}")]
    Transport(String),

    /// Non-2xx answer. `message` is the provider's own explanation when it sent one.
    #[error("Routing provider returned {status}: {message}")]
    Api {
        status: u16,
        message: String,
        body: Value,
    },

    #[error("No route candidates in provider response")]
    NoRoute { body: Value },

    #[error("Malformed provider response: {0}")]
    Malformed(String),
}

impl RoutingError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short code stored in the failure log: the HTTP status when there is one.
    pub fn error_code(&self) -> String {
        match self {
            Self::Timeout => "TIMEOUT".into(),
            Self::Transport(_) => "TRANSPORT".into(),
            Self::Api { status, .. } => status.to_string(),
            Self::NoRoute { .. } => "NO_ROUTE".into(),
            Self::Malformed(_) => "MALFORMED_RESPONSE".into(),
        }
    }

    /// Provider-facing message without the local prefix added by `Display`.
    pub fn provider_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Raw payload kept in the failure log for later analysis.
    pub fn diagnostic(&self) -> Value {
        match self {
            Self::Api { body, .. } | Self::NoRoute { body } => body.clone(),
            Self::Timeout | Self::Transport(_) | Self::Malformed(_) => {
                json!({ "error": self.to_string() })
            }
        }
    }
}

/// Road routing between two points.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    async fn route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RouteSummary, RoutingError>;
}
