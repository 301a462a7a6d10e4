//! Service Repository Implementation
//!
//! PostgreSQL implementation of the ServiceRepository trait.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::{NewService, Service, ServiceRepository};
use crate::shared::error::AppError;

/// Database row representation matching the services table schema.
#[derive(Debug, sqlx::FromRow)]
struct ServiceRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: Decimal,
    duration: i32,
}

impl ServiceRow {
    fn into_service(self) -> Service {
        Service {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            duration: self.duration,
        }
    }
}

/// PostgreSQL service repository implementation.
#[derive(Clone)]
pub struct PgServiceRepository {
    pool: PgPool,
}

impl PgServiceRepository {
    /// Create a new PgServiceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for PgServiceRepository {
    async fn save(&self, service: NewService) -> Result<Service, AppError> {
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
            INSERT INTO services (name, description, price, duration)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, duration
            "#,
        )
        .bind(&service.name)
        .bind(&service.description)
        .bind(service.price)
        .bind(service.duration)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_service())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Service>, AppError> {
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
            SELECT id, name, description, price, duration
            FROM services
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_service()))
    }
}
