//! Health Check and Metrics API Tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{corte, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_probe_with_memory_storage() {
    let app = TestApp::new();

    let response = app.server.get("/health/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["storage"]["backend"], "memory");
}

#[tokio::test]
async fn test_metrics_count_requests_by_route() {
    let app = TestApp::new();
    app.server.post("/services").json(&corte()).await;
    app.server.get("/services/1").await;

    let response = app.server.get("/metrics").await;

    response.assert_status(StatusCode::OK);
    let text = response.text();
    assert!(text.contains("barbershop_http_requests_total"));
    assert!(text.contains(r#"path="/services/{id}""#));
    assert!(text.contains("barbershop_registrations_total"));
}
