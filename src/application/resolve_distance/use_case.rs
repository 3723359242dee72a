use super::dto::ResolveDistanceRequest;
use crate::application::record_failure::{dto::FailedAttempt, use_case::RecordFailureUseCase};
use crate::domain::{
    distance::{
        entity::DistanceResult,
        errors::DomainError,
        geometry::DEFAULT_AVERAGE_SPEED_KMH,
        policy::RoutingFailurePolicy,
        routing::RoutingProvider,
    },
    pincode::{entity::PincodeEntry, repository::PincodeRepository, value_objects::PinCode},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Turns two postal codes into a driving distance and travel time.
pub struct ResolveDistanceUseCase {
    pincodes: Arc<dyn PincodeRepository>,
    routing: Arc<dyn RoutingProvider>,
    failures: Arc<RecordFailureUseCase>,
    policy: RoutingFailurePolicy,
    average_speed_kmh: f64,
}

impl ResolveDistanceUseCase {
    pub fn new(
        pincodes: Arc<dyn PincodeRepository>,
        routing: Arc<dyn RoutingProvider>,
        failures: Arc<RecordFailureUseCase>,
        policy: RoutingFailurePolicy,
    ) -> Self {
        Self {
            pincodes,
            routing,
            failures,
            policy,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
        }
    }

    pub fn with_average_speed(mut self, average_speed_kmh: f64) -> Self {
        self.average_speed_kmh = average_speed_kmh;
        self
    }

    pub fn policy(&self) -> RoutingFailurePolicy {
        self.policy
    }

    #[instrument(skip_all, fields(from = ?request.pincode1, to = ?request.pincode2))]
    pub async fn execute(
        &self,
        request: ResolveDistanceRequest,
    ) -> Result<DistanceResult, DomainError> {
        let (from_code, to_code) = validate(&request)?;

        let (origin, destination) = tokio::try_join!(
            self.pincodes.find_by_code(&from_code),
            self.pincodes.find_by_code(&to_code),
        )?;

        let (origin, destination) = match (origin, destination) {
            (Some(origin), Some(destination)) => (origin, destination),
            (origin, destination) => {
                let missing: Vec<String> = [(&from_code, &origin), (&to_code, &destination)]
                    .into_iter()
                    .filter(|(_, entry)| entry.is_none())
                    .map(|(code, _)| code.value.clone())
                    .collect();
                warn!(missing = ?missing, "Pincode lookup failed");
                self.failures
                    .execute(FailedAttempt::missing_pincodes(
                        &from_code,
                        &to_code,
                        origin.as_ref().map(PincodeEntry::coordinates),
                        destination.as_ref().map(PincodeEntry::coordinates),
                        &missing,
                    ))
                    .await;
                return Err(DomainError::NotFound { missing });
            }
        };

        debug!(
            source = ?origin.coordinates().lon_lat(),
            destination = ?destination.coordinates().lon_lat(),
            "Requesting road route"
        );

        match self
            .routing
            .route(origin.coordinates(), destination.coordinates())
            .await
        {
            Ok(summary) => Ok(DistanceResult::from_route(&origin, &destination, summary)),
            Err(err) => {
                warn!(error = %err, policy = %self.policy, "Routing provider failed");
                self.failures
                    .execute(FailedAttempt::routing(
                        &from_code,
                        &to_code,
                        origin.coordinates(),
                        destination.coordinates(),
                        &err,
                    ))
                    .await;

                match self.policy {
                    RoutingFailurePolicy::Strict => Err(DomainError::RoutingFailed {
                        message: err.provider_message(),
                        status: err.status(),
                        code: err.error_code(),
                    }),
                    RoutingFailurePolicy::Fallback => {
                        let result = DistanceResult::approximate(
                            &origin,
                            &destination,
                            self.average_speed_kmh,
                        );
                        info!(
                            distance_km = result.distance_km,
                            "Answering with straight-line estimate"
                        );
                        Ok(result)
                    }
                }
            }
        }
    }
}

/// Checks run before touching any store. Nothing here is logged to the failure log.
fn validate(request: &ResolveDistanceRequest) -> Result<(PinCode, PinCode), DomainError> {
    let raw_from = request.pincode1.as_deref().unwrap_or_default();
    let raw_to = request.pincode2.as_deref().unwrap_or_default();
    if raw_from.trim().is_empty() || raw_to.trim().is_empty() {
        return Err(DomainError::ValidationError(
            "Both pincodes are required".into(),
        ));
    }

    let from = PinCode::parse(raw_from)?;
    let to = PinCode::parse(raw_to)?;
    if from == to {
        return Err(DomainError::ValidationError(
            "Source and destination pincodes must be different".into(),
        ));
    }
    Ok((from, to))
}
