//! # Domain Layer
//!
//! Core records of the barbershop and the storage contracts they are
//! persisted through. Independent of HTTP and of any particular database.
//!
//! ## Structure
//!
//! - **entities**: `Service` and `Customer`, their unsaved forms, and the
//!   repository traits implemented in the infrastructure layer

pub mod entities;

// Re-export commonly used types
pub use entities::*;
