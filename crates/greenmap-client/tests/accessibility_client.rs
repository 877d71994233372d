//! Integration tests for `AccessibilityClient` using wiremock HTTP mocks.

use chrono::Utc;
use greenmap_client::{geometry_kind, AccessibilityClient, ClientError, FeedbackPayload};
use greenmap_core::LatLng;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SCORE_PATH: &str = "/api/v1/accessibility/accessibility-score";

fn test_client(server: &MockServer) -> AccessibilityClient {
    AccessibilityClient::new(&server.uri(), 5, "greenmap-test/0.1")
        .expect("client construction should not fail")
}

fn full_score_body() -> serde_json::Value {
    json!({
        "accessibility_score": 6.42,
        "scores": {
            "proximity": 7.1,
            "quantity": 4.51,
            "area": 8.0,
            "diversity": 5.0,
            "parks": [
                {
                    "gid": 11,
                    "name": "Jardim da Estrela",
                    "type": "garden",
                    "area": 46000.4,
                    "distance": 120.6,
                    "geometry": "{\"type\":\"Polygon\",\"coordinates\":[[[-9.16,38.71],[-9.15,38.71],[-9.15,38.72],[-9.16,38.71]]]}"
                },
                {
                    "gid": 12,
                    "name": "Parque Infantil",
                    "type": "playground",
                    "area": 900.0,
                    "distance": 310.2,
                    "geometry": {"type": "Point", "coordinates": [-9.158, 38.714]}
                }
            ]
        },
        "parks_found": 2,
        "buffer_m": 500,
        "nearest_park_route": {
            "type": "LineString",
            "coordinates": [[-9.1427, 38.7369], [-9.1500, 38.7200]]
        }
    })
}

#[tokio::test]
async fn accessibility_score_returns_parsed_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SCORE_PATH))
        .and(query_param("lat", "38.7369"))
        .and(query_param("lon", "-9.1427"))
        .and(query_param("buffer_m", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_score_body()))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server)
        .accessibility_score(LatLng::new(38.7369, -9.1427), 500.0)
        .await
        .expect("should parse score");

    assert!((result.accessibility_score - 6.42).abs() < 1e-12);
    assert_eq!(result.parks_found, 2);
    assert_eq!(result.scores.parks.len(), 2);
    assert_eq!(geometry_kind(&result.scores.parks[0].geometry), "Polygon");
    assert_eq!(result.scores.parks[1].kind.as_deref(), Some("playground"));
    assert_eq!(
        result.nearest_park_route.as_ref().map(geometry_kind),
        Some("LineString")
    );
}

#[tokio::test]
async fn accessibility_score_accepts_zero_park_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SCORE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessibility_score": 0.0,
            "scores": {"proximity": 0.0, "quantity": 0.0, "area": 0.0, "diversity": 0.0},
            "parks_found": 0
        })))
        .mount(&server)
        .await;

    let result = test_client(&server)
        .accessibility_score(LatLng::new(38.0, -9.0), 500.0)
        .await
        .unwrap();
    assert_eq!(result.parks_found, 0);
    assert!(result.scores.parks.is_empty());
}

#[tokio::test]
async fn accessibility_score_maps_422_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SCORE_PATH))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": "bad lat"})))
        .mount(&server)
        .await;

    let result = test_client(&server)
        .accessibility_score(LatLng::new(1.0, 2.0), 500.0)
        .await;
    assert!(
        matches!(result, Err(ClientError::UnexpectedStatus { status: 422, .. })),
        "expected UnexpectedStatus(422), got: {result:?}"
    );
}

#[tokio::test]
async fn accessibility_score_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SCORE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = test_client(&server)
        .accessibility_score(LatLng::new(1.0, 2.0), 500.0)
        .await;
    assert!(
        matches!(result, Err(ClientError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn submit_feedback_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/feedback/"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "lat": 38.7369,
            "lon": -9.1427,
            "liked": false,
            "accessibility_score": 6.42,
            "diversity_score": 5.0
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Feedback submitted successfully", "id": 3})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let payload = FeedbackPayload {
        lat: 38.7369,
        lon: -9.1427,
        liked: false,
        accessibility_score: 6.42,
        proximity_score: 7.1,
        quantity_score: 4.51,
        area_score: 8.0,
        diversity_score: 5.0,
        timestamp: Utc::now(),
    };

    test_client(&server)
        .submit_feedback(&payload)
        .await
        .expect("feedback should be accepted");
}

#[tokio::test]
async fn submit_feedback_surfaces_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/feedback/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let payload = FeedbackPayload {
        lat: 0.0,
        lon: 0.0,
        liked: true,
        accessibility_score: 0.0,
        proximity_score: 0.0,
        quantity_score: 0.0,
        area_score: 0.0,
        diversity_score: 0.0,
        timestamp: Utc::now(),
    };

    let result = test_client(&server).submit_feedback(&payload).await;
    assert!(
        matches!(result, Err(ClientError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}
