//! Customer Service
//!
//! Registers and looks up the shop's customers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::CustomerResponseDto;
use crate::domain::{CustomerRepository, NewCustomer};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Customer service trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Persist a new customer and return it with its assigned ID.
    async fn register(&self, customer: NewCustomer) -> Result<CustomerResponseDto, CustomerError>;

    /// Get customer by ID
    async fn get_by_id(&self, id: i64) -> Result<CustomerResponseDto, CustomerError>;
}

/// Customer service errors
#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("customer not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CustomerError> for AppError {
    fn from(e: CustomerError) -> Self {
        match e {
            e @ CustomerError::NotFound => AppError::NotFound(e.to_string()),
            CustomerError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// CustomerService implementation
pub struct CustomerServiceImpl<R>
where
    R: CustomerRepository,
{
    customer_repo: Arc<R>,
}

impl<R> CustomerServiceImpl<R>
where
    R: CustomerRepository,
{
    pub fn new(customer_repo: Arc<R>) -> Self {
        Self { customer_repo }
    }
}

#[async_trait]
impl<R> CustomerService for CustomerServiceImpl<R>
where
    R: CustomerRepository + 'static,
{
    async fn register(&self, customer: NewCustomer) -> Result<CustomerResponseDto, CustomerError> {
        let saved = self
            .customer_repo
            .save(customer)
            .await
            .map_err(|e| CustomerError::Internal(e.to_string()))?;

        metrics::record_registration("customer");
        tracing::info!(customer_id = saved.id, "Customer registered");

        Ok(CustomerResponseDto::from(saved))
    }

    async fn get_by_id(&self, id: i64) -> Result<CustomerResponseDto, CustomerError> {
        let customer = self
            .customer_repo
            .find_by_id(id)
            .await
            .map_err(|e| CustomerError::Internal(e.to_string()))?
            .ok_or(CustomerError::NotFound)?;

        Ok(CustomerResponseDto::from(customer))
    }
}
