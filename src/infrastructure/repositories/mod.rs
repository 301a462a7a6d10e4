//! Repository Implementations
//!
//! Implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgServiceRepository** / **PgCustomerRepository** - PostgreSQL, tables
//!   `services` and `customers`
//! - **InMemoryServiceRepository** / **InMemoryCustomerRepository** - process
//!   memory, used when no database is configured
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgCustomerRepository, PgServiceRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let service_repo = PgServiceRepository::new(pool.clone());
//!     let customer_repo = PgCustomerRepository::new(pool);
//! }
//! ```

pub mod customer_repository;
pub mod memory;
pub mod service_repository;

pub use customer_repository::PgCustomerRepository;
pub use memory::{InMemoryCustomerRepository, InMemoryServiceRepository};
pub use service_repository::PgServiceRepository;
