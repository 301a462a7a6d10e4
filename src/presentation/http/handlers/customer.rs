//! Customer Handlers
//!
//! `POST /customers` and `GET /customers/{id}`.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::application::dto::{CustomerRequestDto, CustomerResponseDto};
use crate::presentation::http::extractors::{EntityId, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Register a new customer
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CustomerRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let customer = state.customers.register(payload.into()).await?;
    let location = format!("/customers/{}", customer.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(customer)))
}

/// Get customer by ID
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<CustomerResponseDto>, AppError> {
    let customer = state.customers.get_by_id(id).await?;
    Ok(Json(customer))
}
