use crate::domain::distance::routing::RoutingError;
use crate::domain::pincode::{entity::Coordinates, value_objects::PinCode};
use serde_json::{Value, json};

/// One failed resolution as seen by the caller.
///
/// `None` coordinates mean "not known here"; the recorder projects them from the
/// reference table, falling back to (0, 0).
#[derive(Debug, Clone, PartialEq)]
pub struct FailedAttempt {
    pub from_pincode: PinCode,
    pub to_pincode: PinCode,
    pub from: Option<Coordinates>,
    pub to: Option<Coordinates>,
    pub error_message: String,
    pub error_code: String,
    pub response_data: Value,
}

impl FailedAttempt {
    /// Sides the lookup did not find are written as (0, 0) without asking the store again.
    pub fn missing_pincodes(
        from_pincode: &PinCode,
        to_pincode: &PinCode,
        from: Option<Coordinates>,
        to: Option<Coordinates>,
        missing: &[String],
    ) -> Self {
        Self {
            from_pincode: from_pincode.clone(),
            to_pincode: to_pincode.clone(),
            from: Some(from.unwrap_or(Coordinates::ZERO)),
            to: Some(to.unwrap_or(Coordinates::ZERO)),
            error_message: format!("Pincode not found in database: {}", missing.join(", ")),
            error_code: "NOT_FOUND".into(),
            response_data: json!({ "missing": missing }),
        }
    }

    pub fn routing(
        from_pincode: &PinCode,
        to_pincode: &PinCode,
        from: Coordinates,
        to: Coordinates,
        err: &RoutingError,
    ) -> Self {
        Self {
            from_pincode: from_pincode.clone(),
            to_pincode: to_pincode.clone(),
            from: Some(from),
            to: Some(to),
            error_message: err.provider_message(),
            error_code: err.error_code(),
            response_data: err.diagnostic(),
        }
    }
}
