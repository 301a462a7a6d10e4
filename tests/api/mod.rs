//! REST API endpoint tests

mod customer_tests;
mod health_tests;
mod service_tests;
