use crate::domain::pincode::entity::Coordinates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted record of failed resolutions for one ordered (from, to) pincode pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FailureRecord {
    pub id: Uuid,
    pub from_pincode: String,
    pub to_pincode: String,
    pub from_lat: f64,
    pub from_lng: f64,
    pub to_lat: f64,
    pub to_lng: f64,
    pub error_message: String,
    pub error_code: Option<String>,
    pub response_data: serde_json::Value,
    pub retry_count: i32,
    pub first_seen_at: DateTime<Utc>,
    pub last_attempt_at: DateTime<Utc>,
}

/// Fields written by one failed attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureReport {
    pub from_pincode: String,
    pub to_pincode: String,
    pub from: Coordinates,
    pub to: Coordinates,
    pub error_message: String,
    pub error_code: String,
    pub response_data: serde_json::Value,
}
