use super::geometry::{
    estimate_duration_minutes, great_circle_between, meters_to_km, round_to_hundredths,
    seconds_to_minutes,
};
use super::routing::RouteSummary;
use crate::domain::pincode::entity::PincodeEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDescriptor {
    pub pincode: String,
    pub location: String,
}

impl From<&PincodeEntry> for LocationDescriptor {
    fn from(entry: &PincodeEntry) -> Self {
        Self {
            pincode: entry.pincode.clone(),
            location: entry.location_label(),
        }
    }
}

/// Outcome of one resolution. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    pub distance_km: f64,
    pub duration_minutes: i64,
    pub origin: LocationDescriptor,
    pub destination: LocationDescriptor,
    pub is_approximate: bool,
}

impl DistanceResult {
    pub fn from_route(origin: &PincodeEntry, destination: &PincodeEntry, route: RouteSummary) -> Self {
        Self {
            distance_km: meters_to_km(route.distance_meters),
            duration_minutes: seconds_to_minutes(route.duration_seconds),
            origin: origin.into(),
            destination: destination.into(),
            is_approximate: false,
        }
    }

    pub fn approximate(
        origin: &PincodeEntry,
        destination: &PincodeEntry,
        average_speed_kmh: f64,
    ) -> Self {
        let distance_km =
            great_circle_between(origin.coordinates(), destination.coordinates());
        Self {
            distance_km: round_to_hundredths(distance_km),
            duration_minutes: estimate_duration_minutes(distance_km, average_speed_kmh),
            origin: origin.into(),
            destination: destination.into(),
            is_approximate: true,
        }
    }
}
