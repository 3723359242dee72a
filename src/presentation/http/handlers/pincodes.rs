use crate::domain::pincode::value_objects::PinCode;
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

#[derive(Serialize)]
pub struct CoordinatesBody {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize)]
pub struct PincodeResponse {
    pub pincode: String,
    pub location: String,
    pub district: Option<String>,
    pub state: Option<String>,
    pub coordinates: CoordinatesBody,
}

pub async fn get_pincode(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<PincodeResponse>, AppError> {
    let pin = PinCode::parse(&code)?;
    let entry = state
        .pincode_repo
        .find_by_code(&pin)
        .await?
        .ok_or_else(|| AppError::PincodeNotFound(vec![pin.value.clone()]))?;

    Ok(Json(PincodeResponse {
        location: entry.location_label(),
        coordinates: CoordinatesBody {
            latitude: entry.latitude,
            longitude: entry.longitude,
        },
        pincode: entry.pincode,
        district: entry.district,
        state: entry.state_name,
    }))
}
