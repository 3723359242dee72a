use crate::domain::distance::entity::{DistanceResult, LocationDescriptor};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body of a distance request. Missing fields are treated as empty input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveDistanceRequest {
    #[serde(default, alias = "from")]
    pub pincode1: Option<String>,
    #[serde(default, alias = "to")]
    pub pincode2: Option<String>,
}

impl ResolveDistanceRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            pincode1: Some(origin.into()),
            pincode2: Some(destination.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LocationDto {
    pub pincode: String,
    pub location: String,
}

impl From<LocationDescriptor> for LocationDto {
    fn from(d: LocationDescriptor) -> Self {
        Self {
            pincode: d.pincode,
            location: d.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResponse {
    /// Kilometres, two decimals.
    pub distance: f64,
    /// Minutes.
    #[ts(type = "number")]
    pub duration: i64,
    pub source: LocationDto,
    pub destination: LocationDto,
    /// Set when the figures come from the straight-line estimate instead of road routing.
    pub is_approximate: bool,
}

impl From<DistanceResult> for DistanceResponse {
    fn from(r: DistanceResult) -> Self {
        Self {
            distance: r.distance_km,
            duration: r.duration_minutes,
            source: r.origin.into(),
            destination: r.destination.into(),
            is_approximate: r.is_approximate,
        }
    }
}
