use super::{
    handlers::{distance, health, pincodes},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Distance, under the path the web form already posts to
        .route("/api/get-distance", post(distance::get_distance))
        .route("/api/v1/distance", post(distance::get_distance))
        // Reference lookups
        .route("/api/v1/pincodes/{code}", get(pincodes::get_pincode))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
