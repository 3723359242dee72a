use crate::domain::distance::errors::DomainError;
use serde::{Deserialize, Serialize};

/// Label used when the reference table has no post office name for a code.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// A point in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Placeholder written to the failure log when a side could not be resolved.
    pub const ZERO: Coordinates = Coordinates {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::ValidationError(format!(
                "latitude {} is outside [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::ValidationError(format!(
                "longitude {} is outside [-180, 180]",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Longitude-first pair, the axis order GeoJSON and the routing provider expect.
    pub fn lon_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

/// One row of the postal code reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PincodeEntry {
    pub pincode: String,
    pub latitude: f64,
    pub longitude: f64,
    pub circle_name: Option<String>,
    pub region_name: Option<String>,
    pub division_name: Option<String>,
    pub office_name: Option<String>,
    pub office_type: Option<String>,
    pub delivery: Option<String>,
    pub district: Option<String>,
    pub state_name: Option<String>,
}

impl PincodeEntry {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Rejects rows whose coordinates fall outside WGS84 ranges. The reference table is
    /// filled by an external loader that may bypass the column constraints.
    pub fn checked(self) -> Result<Self, DomainError> {
        Coordinates::new(self.latitude, self.longitude).map_err(|e| {
            DomainError::InfrastructureError(format!(
                "pincode {} has invalid coordinates: {}",
                self.pincode, e
            ))
        })?;
        Ok(self)
    }

    pub fn location_label(&self) -> String {
        self.office_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_LOCATION)
            .to_string()
    }
}
