use pin_distance_api::{
    domain::{
        distance::routing::{RoutingError, RoutingProvider},
        pincode::entity::Coordinates,
    },
    infrastructure::routing::openroute::OpenRouteServiceProvider,
};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

const DIRECTIONS_PATH: &str = "/v2/directions/driving-car/geojson";

fn provider(base_url: &str, timeout: Duration) -> OpenRouteServiceProvider {
    OpenRouteServiceProvider::new(
        "test-ors-key".into(),
        base_url,
        "driving-car",
        "recommended".into(),
        timeout,
    )
    .expect("failed to build provider")
}

fn varanasi() -> Coordinates {
    Coordinates::new(25.3176, 82.9739).unwrap()
}

fn delhi() -> Coordinates {
    Coordinates::new(28.7041, 77.1025).unwrap()
}

async fn respond_with(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn sends_lon_lat_pairs_with_key_and_reads_first_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DIRECTIONS_PATH))
        .and(header("authorization", "test-ors-key"))
        .and(body_json(json!({
            "coordinates": [[82.9739, 25.3176], [77.1025, 28.7041]],
            "preference": "recommended"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "FeatureCollection",
            "features": [
                { "properties": { "summary": { "distance": 812_345.6, "duration": 50_460.0 } } },
                { "properties": { "summary": { "distance": 1.0, "duration": 1.0 } } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let summary = provider(&server.uri(), Duration::from_secs(5))
        .route(varanasi(), delhi())
        .await
        .expect("route should succeed");

    assert_eq!(summary.distance_meters, 812_345.6);
    assert_eq!(summary.duration_seconds, 50_460.0);
}

#[tokio::test]
async fn empty_feature_list_is_no_route() {
    let server =
        respond_with(ResponseTemplate::new(200).set_body_json(json!({ "features": [] }))).await;

    let err = provider(&server.uri(), Duration::from_secs(5))
        .route(varanasi(), delhi())
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::NoRoute { .. }));
    assert_eq!(err.error_code(), "NO_ROUTE");
    assert_eq!(err.diagnostic(), json!({ "features": [] }));
}

#[tokio::test]
async fn feature_without_summary_is_no_route() {
    let server = respond_with(
        ResponseTemplate::new(200).set_body_json(json!({ "features": [{ "properties": {} }] })),
    )
    .await;

    let err = provider(&server.uri(), Duration::from_secs(5))
        .route(varanasi(), delhi())
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::NoRoute { .. }));
}

#[tokio::test]
async fn provider_error_keeps_status_message_and_body() {
    let body = json!({ "error": { "code": 2010, "message": "Could not find routable point" } });
    let server = respond_with(ResponseTemplate::new(404).set_body_json(body.clone())).await;

    let err = provider(&server.uri(), Duration::from_secs(5))
        .route(varanasi(), delhi())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.error_code(), "404");
    assert_eq!(err.provider_message(), "Could not find routable point");
    assert_eq!(err.diagnostic(), body);
}

#[tokio::test]
async fn flat_error_string_is_used_as_message() {
    let server = respond_with(
        ResponseTemplate::new(403)
            .set_body_json(json!({ "error": "Access to this API has been disallowed" })),
    )
    .await;

    let err = provider(&server.uri(), Duration::from_secs(5))
        .route(varanasi(), delhi())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(err.provider_message(), "Access to this API has been disallowed");
}

#[tokio::test]
async fn non_json_error_falls_back_to_reason_phrase() {
    let server =
        respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>")).await;

    let err = provider(&server.uri(), Duration::from_secs(5))
        .route(varanasi(), delhi())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert_eq!(err.provider_message(), "Bad Gateway");
    assert_eq!(err.diagnostic(), json!({ "raw": "<html>bad gateway</html>" }));
}

#[tokio::test]
async fn non_json_success_is_malformed() {
    let server = respond_with(ResponseTemplate::new(200).set_body_string("ok")).await;

    let err = provider(&server.uri(), Duration::from_secs(5))
        .route(varanasi(), delhi())
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::Malformed(_)));
    assert_eq!(err.error_code(), "MALFORMED_RESPONSE");
}

#[tokio::test]
async fn slow_provider_times_out() {
    let server = respond_with(
        ResponseTemplate::new(200)
            .set_body_json(json!({ "features": [] }))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let err = provider(&server.uri(), Duration::from_millis(200))
        .route(varanasi(), delhi())
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::Timeout), "got {:?}", err);
    assert_eq!(err.error_code(), "TIMEOUT");
}

#[tokio::test]
async fn unreachable_provider_is_a_transport_error() {
    let err = provider("http://127.0.0.1:1", Duration::from_secs(2))
        .route(varanasi(), delhi())
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::Transport(_)), "got {:?}", err);
}
