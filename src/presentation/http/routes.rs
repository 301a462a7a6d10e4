//! Route Configuration
//!
//! The explicit route table: method + path to handler.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::shared::error::handle_panic;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    handlers::health::init_server_start();

    Router::new()
        // Services offered by the shop
        .route("/services", post(handlers::service::register))
        .route("/services/{id}", get(handlers::service::get_by_id))
        // Customers
        .route("/customers", post(handlers::customer::register))
        .route("/customers/{id}", get(handlers::customer::get_by_id))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // Panics become a plain 500; metrics wrap it so they are counted too
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}
