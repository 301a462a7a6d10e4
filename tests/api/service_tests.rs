//! Service API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::{corte, TestApp};

/// Registering a service assigns the first id and echoes the submitted fields
#[tokio::test]
async fn test_register_service() {
    let app = TestApp::new();

    let response = app.server.post("/services").json(&corte()).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Corte");
    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["price"].as_f64(), Some(25.0));
    assert_eq!(body["duration"], 30);
}

/// A registered service can be read back by the id in its Location header
#[tokio::test]
async fn test_register_then_get_by_id() {
    let app = TestApp::new();

    let created = app
        .server
        .post("/services")
        .json(&json!({
            "name": "Barba",
            "description": "Barba com toalha quente",
            "price": 19.9,
            "duration": 20
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let location = created.header("location");
    let location = location.to_str().unwrap();

    let fetched = app.server.get(location).await;

    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), created.json::<Value>());
}

/// Ids are assigned in registration order
#[tokio::test]
async fn test_ids_increase() {
    let app = TestApp::new();

    let first: Value = app.server.post("/services").json(&corte()).await.json();
    let second: Value = app.server.post("/services").json(&corte()).await.json();

    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);
}

/// Repeated reads of unchanged state are identical
#[tokio::test]
async fn test_get_by_id_is_idempotent() {
    let app = TestApp::new();
    app.server.post("/services").json(&corte()).await;

    let first = app.server.get("/services/1").await;
    let second = app.server.get("/services/1").await;

    first.assert_status_ok();
    second.assert_status_ok();
    assert_eq!(first.text(), second.text());
}

/// Unknown ids are 404 and do not create anything
#[tokio::test]
async fn test_get_unknown_service() {
    let app = TestApp::new();

    let response = app.server.get("/services/1").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("service not found");

    // The failed lookup must not have consumed an id
    let created: Value = app.server.post("/services").json(&corte()).await.json();
    assert_eq!(created["id"], 1);
}

#[test_case(json!({}) ; "empty body")]
#[test_case(json!({"name": "", "price": 25, "duration": 30}) ; "empty name")]
#[test_case(json!({"name": "Corte", "duration": 30}) ; "missing price")]
#[test_case(json!({"name": "Corte", "price": -5, "duration": 30}) ; "negative price")]
#[test_case(json!({"name": "Corte", "price": 19.999, "duration": 30}) ; "price with three decimals")]
#[test_case(json!({"name": "Corte", "price": 123456789012.345, "duration": 30}) ; "price too large")]
#[test_case(json!({"name": "Corte", "price": 25}) ; "missing duration")]
#[test_case(json!({"name": "Corte", "price": 25, "duration": -10}) ; "negative duration")]
#[test_case(json!({"name": "Corte", "price": 25, "duration": "half an hour"}) ; "duration not a number")]
#[tokio::test]
async fn test_register_invalid_service(body: Value) {
    let app = TestApp::new();

    let response = app.server.post("/services").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_text("invalid data provided");

    // Nothing was stored
    app.server
        .get("/services/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_service_at_price_limit() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/services")
        .json(&json!({"name": "Pacote completo", "price": 99999999.99, "duration": 90}))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    let price = body["price"].as_f64().unwrap();
    assert!((price - 99999999.99).abs() < 0.001);
}
