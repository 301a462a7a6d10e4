//! Data Transfer Objects
//!
//! DTOs for API request/response serialization. Request DTOs never carry
//! an identity; response DTOs always do.

pub mod request;
pub mod response;

pub use request::{CustomerRequestDto, ServiceDto};
pub use response::{CustomerResponseDto, ServiceDetailsDto};
