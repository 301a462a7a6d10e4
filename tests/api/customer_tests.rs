//! Customer API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::{random_customer, TestApp};

#[tokio::test]
async fn test_register_customer() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/customers")
        .json(&json!({
            "name": "Alisson Alves",
            "phone": "88999632326",
            "email": "alisson@gmail.com"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({
        "id": 1,
        "name": "Alisson Alves",
        "phone": "88999632326",
        "email": "alisson@gmail.com"
    }));
}

#[tokio::test]
async fn test_get_customer_by_id() {
    let app = TestApp::new();
    let customer = random_customer();
    app.server.post("/customers").json(&customer).await;

    let response = app.server.get("/customers/1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], customer["name"]);
    assert_eq!(body["phone"], customer["phone"]);
    assert_eq!(body["email"], customer["email"]);
}

#[tokio::test]
async fn test_get_unknown_customer() {
    let app = TestApp::new();

    let response = app.server.get("/customers/7").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("customer not found");
}

#[tokio::test]
async fn test_register_customer_with_empty_body() {
    let app = TestApp::new();

    let response = app.server.post("/customers").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_text("invalid data provided");
    app.server
        .get("/customers/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_customers_and_services_have_separate_ids() {
    let app = TestApp::new();

    app.server.post("/customers").json(&random_customer()).await;
    let service: Value = app
        .server
        .post("/services")
        .json(&json!({"name": "Corte", "price": 25, "duration": 30}))
        .await
        .json();

    assert_eq!(service["id"], 1);
}

#[tokio::test]
async fn test_non_numeric_customer_id() {
    let app = TestApp::new();

    let response = app.server.get("/customers/alisson").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_text("invalid data provided");
}

#[test_case(json!({"name": "A".repeat(101), "phone": "88999632326", "email": "alisson@gmail.com"}) ; "name too long")]
#[test_case(json!({"name": "Alisson Alves", "phone": "9".repeat(33), "email": "alisson@gmail.com"}) ; "phone too long")]
#[test_case(json!({"name": "Alisson Alves", "phone": "88999632326", "email": format!("{}@gmail.com", "a".repeat(246))}) ; "email too long")]
#[tokio::test]
async fn test_register_customer_with_oversized_field(body: Value) {
    let app = TestApp::new();

    let response = app.server.post("/customers").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_text("invalid data provided");
    app.server
        .get("/customers/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
