use crate::application::resolve_distance::dto::{DistanceResponse, ResolveDistanceRequest};
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{Json, extract::State, extract::rejection::JsonRejection};

pub async fn get_distance(
    State(state): State<AppState>,
    payload: Result<Json<ResolveDistanceRequest>, JsonRejection>,
) -> Result<Json<DistanceResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::ValidationError(e.body_text()))?;
    let result = state.resolve_distance.execute(request).await?;
    Ok(Json(result.into()))
}
