//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ServiceService**: the catalog of services the shop offers
//! - **CustomerService**: customer registration and lookup

pub mod customer_service;
pub mod service_service;

// Re-export service catalog types
pub use service_service::{ServiceError, ServiceService, ServiceServiceImpl};

// Re-export customer service types
pub use customer_service::{CustomerError, CustomerService, CustomerServiceImpl};

#[cfg(test)]
pub use customer_service::MockCustomerService;
#[cfg(test)]
pub use service_service::MockServiceService;
