//! Request DTOs
//!
//! Data structures for API request bodies.
//!
//! Fields are lenient on the wire: a missing string becomes empty and a
//! missing number becomes `None`, so an incomplete body is reported by
//! validation instead of failing inside the JSON decoder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::{NewCustomer, NewService};
use crate::shared::error::AppError;
use crate::shared::validation::not_blank;

/// Register service request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_price", skip_on_field_errors = false))]
pub struct ServiceDto {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(required(message = "is required"))]
    pub price: Option<Decimal>,

    /// Minutes
    #[validate(
        required(message = "is required"),
        range(min = 1, message = "must be at least one minute")
    )]
    pub duration: Option<i32>,
}

/// Prices are stored as `NUMERIC(10,2)`.
const PRICE_SCALE: u32 = 2;

fn max_price() -> Decimal {
    Decimal::new(9_999_999_999, PRICE_SCALE)
}

fn price_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn validate_price(dto: &ServiceDto) -> Result<(), ValidationError> {
    let Some(price) = dto.price else {
        return Ok(());
    };

    if price.is_sign_negative() && !price.is_zero() {
        return Err(price_error("price_negative", "price must not be negative"));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(price_error(
            "price_scale",
            "price must have at most two decimal places",
        ));
    }
    if price > max_price() {
        return Err(price_error("price_too_large", "price must be at most 99999999.99"));
    }
    Ok(())
}

impl ServiceDto {
    /// Convert a validated request into the unsaved domain record.
    pub fn into_new_service(self) -> Result<NewService, AppError> {
        let price = self
            .price
            .ok_or_else(|| AppError::Validation("price: is required".into()))?;
        let duration = self
            .duration
            .ok_or_else(|| AppError::Validation("duration: is required".into()))?;

        Ok(NewService {
            name: self.name,
            description: self.description,
            price,
            duration,
        })
    }
}

/// Register customer request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CustomerRequestDto {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        length(max = 32, message = "must be at most 32 characters")
    )]
    pub phone: String,

    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "must be at most 255 characters")
    )]
    pub email: String,
}

impl From<CustomerRequestDto> for NewCustomer {
    fn from(dto: CustomerRequestDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
        }
    }
}
