//! Service entity and repository trait.
//!
//! Maps to the `services` table in the database schema.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A service offered by the shop (a haircut, a beard trim, ...).
///
/// Maps to the `services` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(100) NOT NULL
/// - description: TEXT NULL
/// - price: NUMERIC(10,2) NOT NULL CHECK (price >= 0)
/// - duration: INTEGER NOT NULL CHECK (duration > 0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Storage-assigned identity
    pub id: i64,

    pub name: String,

    pub description: Option<String>,

    /// Price charged to the customer
    pub price: Decimal,

    /// Duration in minutes
    pub duration: i32,
}

/// A service that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub duration: i32,
}

impl NewService {
    /// Attach the identity assigned by storage.
    pub fn with_id(self, id: i64) -> Service {
        Service {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            duration: self.duration,
        }
    }
}

/// Repository trait for Service data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Persist a new service and return it with its assigned ID.
    async fn save(&self, service: NewService) -> Result<Service, AppError>;

    /// Find a service by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Service>, AppError>;
}
