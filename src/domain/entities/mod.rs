//! # Domain Entities
//!
//! - **Service**: something the shop offers, with a price and a duration
//! - **Customer**: a client of the shop and their contact details
//!
//! Each entity has an unsaved counterpart (`NewService`, `NewCustomer`)
//! that carries no identity, and a repository trait defining the two
//! storage operations the application needs: `save` and `find_by_id`.

mod customer;
mod service;

pub use customer::{Customer, CustomerRepository, NewCustomer};
pub use service::{NewService, Service, ServiceRepository};

#[cfg(test)]
pub use customer::MockCustomerRepository;
#[cfg(test)]
pub use service::MockServiceRepository;
