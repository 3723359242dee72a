use super::types::{DirectionsCollection, provider_error_message};
use crate::domain::distance::routing::{RouteSummary, RoutingError, RoutingProvider};
use crate::domain::pincode::entity::Coordinates;
use async_trait::async_trait;
use reqwest::{Client, header};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// Driving directions from openrouteservice (`/v2/directions/{profile}/geojson`).
pub struct OpenRouteServiceProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    preference: String,
}

impl OpenRouteServiceProvider {
    /// `timeout` covers the whole exchange, body included; an expired request is a failure.
    pub fn new(
        api_key: String,
        base_url: &str,
        profile: &str,
        preference: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            endpoint: format!(
                "{}/v2/directions/{}/geojson",
                base_url.trim_end_matches('/'),
                profile
            ),
            preference,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RoutingProvider for OpenRouteServiceProvider {
    #[instrument(skip(self))]
    async fn route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RouteSummary, RoutingError> {
        let body = json!({
            "coordinates": [origin.lon_lat(), destination.lon_lat()],
            "preference": self.preference,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %self.endpoint, error = %e, "Failed to send directions request");
                classify(e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(classify)?;

        if !status.is_success() {
            let payload: Value =
                serde_json::from_str(&text).unwrap_or_else(|_| json!({ "raw": text }));
            let message = provider_error_message(&payload).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            warn!(status = status.as_u16(), %message, "Directions request rejected");
            return Err(RoutingError::Api {
                status: status.as_u16(),
                message,
                body: payload,
            });
        }

        let payload: Value = serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, body = %text, "Directions response is not JSON");
            RoutingError::Malformed(e.to_string())
        })?;
        let collection: DirectionsCollection = serde_json::from_value(payload.clone())
            .map_err(|e| RoutingError::Malformed(e.to_string()))?;

        let summary = collection
            .features
            .into_iter()
            .next()
            .and_then(|feature| feature.properties)
            .and_then(|properties| properties.summary)
            .ok_or(RoutingError::NoRoute { body: payload })?;

        debug!(
            distance_m = summary.distance,
            duration_s = summary.duration,
            "Route received"
        );
        Ok(RouteSummary {
            distance_meters: summary.distance,
            duration_seconds: summary.duration,
        })
    }
}

fn classify(err: reqwest::Error) -> RoutingError {
    if err.is_timeout() {
        RoutingError::Timeout
    } else {
        RoutingError::Transport(err.to_string())
    }
}
