//! Service Catalog Service
//!
//! Registers and looks up the services the shop offers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::ServiceDetailsDto;
use crate::domain::{NewService, ServiceRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Service catalog trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceService: Send + Sync {
    /// Persist a new service and return it with its assigned ID.
    async fn register(&self, service: NewService) -> Result<ServiceDetailsDto, ServiceError>;

    /// Get service by ID
    async fn get_by_id(&self, id: i64) -> Result<ServiceDetailsDto, ServiceError>;
}

/// Service catalog errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("service not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            e @ ServiceError::NotFound => AppError::NotFound(e.to_string()),
            ServiceError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// ServiceService implementation
pub struct ServiceServiceImpl<R>
where
    R: ServiceRepository,
{
    service_repo: Arc<R>,
}

impl<R> ServiceServiceImpl<R>
where
    R: ServiceRepository,
{
    pub fn new(service_repo: Arc<R>) -> Self {
        Self { service_repo }
    }
}

#[async_trait]
impl<R> ServiceService for ServiceServiceImpl<R>
where
    R: ServiceRepository + 'static,
{
    async fn register(&self, service: NewService) -> Result<ServiceDetailsDto, ServiceError> {
        let saved = self
            .service_repo
            .save(service)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        metrics::record_registration("service");
        tracing::info!(service_id = saved.id, name = %saved.name, "Service registered");

        Ok(ServiceDetailsDto::from(saved))
    }

    async fn get_by_id(&self, id: i64) -> Result<ServiceDetailsDto, ServiceError> {
        let service = self
            .service_repo
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?
            .ok_or(ServiceError::NotFound)?;

        Ok(ServiceDetailsDto::from(service))
    }
}
