//! Common Test Utilities
//!
//! Shared helpers and fixtures. Every `TestApp` runs the full router over
//! its own in-memory storage, so tests do not see each other's data.

use axum_test::TestServer;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};

use barbershop::presentation::http::routes;
use barbershop::startup::AppState;

/// Test application wrapping the real router
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    /// Create a new test application backed by in-memory repositories
    pub fn new() -> Self {
        let router = routes::create_router(AppState::in_memory());
        Self {
            server: TestServer::new(router).expect("Failed to create test server"),
        }
    }
}

/// Body of the canonical haircut service
pub fn corte() -> Value {
    json!({
        "name": "Corte",
        "price": 25,
        "duration": 30
    })
}

/// Body of a customer with generated contact details
pub fn random_customer() -> Value {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    let phone = format!("88{:09}", (0..1_000_000_000u32).fake::<u32>());

    json!({
        "name": name,
        "phone": phone,
        "email": email
    })
}
