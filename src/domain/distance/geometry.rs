//! Straight-line distance used when road routing is unavailable.
//!
//! Great-circle distance always underestimates road distance, so any result built from
//! these functions is reported as approximate.

use crate::domain::pincode::entity::Coordinates;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average road speed assumed when turning a straight-line distance into a travel time.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 40.0;

/// Haversine distance in kilometres between two points given in degrees.
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // Clamp guards asin against rounding pushing `a` a hair above 1 for antipodal points.
    let c = 2.0 * a.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * c
}

pub fn great_circle_between(from: Coordinates, to: Coordinates) -> f64 {
    great_circle_distance(from.latitude, from.longitude, to.latitude, to.longitude)
}

/// Minutes needed to cover `distance_km` at `speed_kmh`, rounded to the nearest minute.
pub fn estimate_duration_minutes(distance_km: f64, speed_kmh: f64) -> i64 {
    if speed_kmh <= 0.0 {
        return 0;
    }
    ((distance_km / speed_kmh) * 60.0).round() as i64
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn meters_to_km(meters: f64) -> f64 {
    round_to_hundredths(meters / 1000.0)
}

pub fn seconds_to_minutes(seconds: f64) -> i64 {
    (seconds / 60.0).round() as i64
}
