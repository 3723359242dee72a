use serde::Deserialize;
use serde_json::Value;

// GeoJSON flavour of the openrouteservice directions response. Only the parts we read.

#[derive(Deserialize)]
pub struct DirectionsCollection {
    #[serde(default)]
    pub features: Vec<RouteFeature>,
}

#[derive(Deserialize)]
pub struct RouteFeature {
    #[serde(default)]
    pub properties: Option<RouteProperties>,
}

#[derive(Deserialize)]
pub struct RouteProperties {
    #[serde(default)]
    pub summary: Option<RouteSummaryPayload>,
}

/// openrouteservice drops zero-valued fields from the summary.
#[derive(Deserialize, Clone, Copy)]
pub struct RouteSummaryPayload {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
}

/// Pulls the human readable message out of an error body.
///
/// The service answers either `{"error": {"code": 2010, "message": "..."}}` or
/// `{"error": "..."}` depending on which layer rejected the request.
pub fn provider_error_message(body: &Value) -> Option<String> {
    let error = body.get("error")?;
    error
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| error.as_str())
        .map(str::to_string)
}
