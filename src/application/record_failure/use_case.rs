use super::dto::FailedAttempt;
use crate::domain::{
    failure_log::{entity::FailureReport, repository::FailureLogRepository},
    pincode::{entity::Coordinates, repository::PincodeRepository, value_objects::PinCode},
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Writes failed resolutions to the failure log.
///
/// Never fails. Write errors are only reported through `tracing`.
pub struct RecordFailureUseCase {
    failures: Arc<dyn FailureLogRepository>,
    pincodes: Arc<dyn PincodeRepository>,
}

impl RecordFailureUseCase {
    pub fn new(
        failures: Arc<dyn FailureLogRepository>,
        pincodes: Arc<dyn PincodeRepository>,
    ) -> Self {
        Self { failures, pincodes }
    }

    #[instrument(skip_all, fields(from = %attempt.from_pincode, to = %attempt.to_pincode))]
    pub async fn execute(&self, attempt: FailedAttempt) {
        let (from, to) = tokio::join!(
            self.coordinates_for(&attempt.from_pincode, attempt.from),
            self.coordinates_for(&attempt.to_pincode, attempt.to),
        );

        let report = FailureReport {
            from_pincode: attempt.from_pincode.value,
            to_pincode: attempt.to_pincode.value,
            from,
            to,
            error_message: attempt.error_message,
            error_code: attempt.error_code,
            response_data: attempt.response_data,
        };

        match self.failures.upsert_failure(&report).await {
            Ok(record) => info!(
                retry_count = record.retry_count,
                error_code = %report.error_code,
                "Logged failed attempt: {}",
                report.error_message
            ),
            Err(e) => error!(
                error = %e,
                from_pincode = %report.from_pincode,
                to_pincode = %report.to_pincode,
                failure = %report.error_message,
                "Failed to log error to database"
            ),
        }
    }

    async fn coordinates_for(&self, code: &PinCode, known: Option<Coordinates>) -> Coordinates {
        if let Some(coords) = known {
            return coords;
        }
        match self.pincodes.find_coordinates(code).await {
            Ok(coords) => coords.unwrap_or(Coordinates::ZERO),
            Err(e) => {
                warn!(pincode = %code, error = %e, "Coordinate lookup for failure log failed");
                Coordinates::ZERO
            }
        }
    }
}
