//! Presentation Layer
//!
//! HTTP route table, handlers and middleware.

pub mod http;
pub mod middleware;
