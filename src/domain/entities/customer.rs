//! Customer entity and repository trait.
//!
//! Maps to the `customers` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A client of the shop.
///
/// Maps to the `customers` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(100) NOT NULL
/// - phone: VARCHAR(32) NOT NULL
/// - email: VARCHAR(255) NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// A customer that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl NewCustomer {
    /// Attach the identity assigned by storage.
    pub fn with_id(self, id: i64) -> Customer {
        Customer {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
        }
    }
}

/// Repository trait for Customer data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new customer and return it with its assigned ID.
    async fn save(&self, customer: NewCustomer) -> Result<Customer, AppError>;

    /// Find a customer by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;
}
