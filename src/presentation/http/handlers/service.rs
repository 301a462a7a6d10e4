//! Service Handlers
//!
//! `POST /services` and `GET /services/{id}`.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::application::dto::{ServiceDetailsDto, ServiceDto};
use crate::presentation::http::extractors::{EntityId, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Register a new service
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let details = state.services.register(payload.into_new_service()?).await?;
    let location = format!("/services/{}", details.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(details)))
}

/// Get service by ID
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<ServiceDetailsDto>, AppError> {
    let details = state.services.get_by_id(id).await?;
    Ok(Json(details))
}
