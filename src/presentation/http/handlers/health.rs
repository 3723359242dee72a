use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    /// Whether the reference table holds any pincode. `None` when the database is down.
    has_data: Option<bool>,
    routing_failure_policy: String,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    // Check Database Connectivity
    let db_status = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "up",
        Err(e) => {
            tracing::error!("Health check failed: Database unreachable: {}", e);
            "down"
        }
    };

    let has_data = if db_status == "up" {
        match state.pincode_repo.find_any().await {
            Ok(sample) => Some(sample.is_some()),
            Err(e) => {
                tracing::warn!("Health check could not read pincodes: {}", e);
                None
            }
        }
    } else {
        None
    };

    if has_data == Some(false) {
        tracing::warn!("Connected to the database but the pincode table is empty");
    }

    let status = if db_status == "up" {
        "healthy"
    } else {
        "unhealthy"
    };

    let response = HealthResponse {
        status,
        database: db_status,
        has_data,
        routing_failure_policy: state.resolve_distance.policy().to_string(),
        version: env!("CARGO_PKG_VERSION"),
    };

    let code = if status == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}
