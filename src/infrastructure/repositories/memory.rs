//! In-memory repositories.
//!
//! Used when no database URL is configured, and by the integration tests.
//! Identities are assigned from a per-repository counter starting at 1.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{
    Customer, CustomerRepository, NewCustomer, NewService, Service, ServiceRepository,
};
use crate::shared::error::AppError;

/// In-memory storage for services.
#[derive(Clone, Default)]
pub struct InMemoryServiceRepository {
    services: Arc<RwLock<HashMap<i64, Service>>>,
    last_id: Arc<AtomicI64>,
}

impl InMemoryServiceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceRepository for InMemoryServiceRepository {
    async fn save(&self, service: NewService) -> Result<Service, AppError> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let service = service.with_id(id);
        self.services.write().await.insert(id, service.clone());
        debug!(service_id = id, "Saved service to memory");
        Ok(service)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Service>, AppError> {
        Ok(self.services.read().await.get(&id).cloned())
    }
}

/// In-memory storage for customers.
#[derive(Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<i64, Customer>>>,
    last_id: Arc<AtomicI64>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn save(&self, customer: NewCustomer) -> Result<Customer, AppError> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let customer = customer.with_id(id);
        self.customers.write().await.insert(id, customer.clone());
        debug!(customer_id = id, "Saved customer to memory");
        Ok(customer)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        Ok(self.customers.read().await.get(&id).cloned())
    }
}
