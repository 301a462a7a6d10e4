//! Response DTOs
//!
//! Data structures for API response bodies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Customer, Service};

/// Service response
///
/// `description` is always present in the body and is `null` when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetailsDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub duration: i32,
}

impl From<Service> for ServiceDetailsDto {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            name: service.name,
            description: service.description,
            price: service.price,
            duration: service.duration,
        }
    }
}

/// Customer response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponseDto {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl From<Customer> for CustomerResponseDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            phone: customer.phone,
            email: customer.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_details_serialization() {
        let dto = ServiceDetailsDto {
            id: 1,
            name: "Corte".into(),
            description: None,
            price: Decimal::from(25),
            duration: 30,
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Corte");
        assert!(value["description"].is_null());
        assert_eq!(value["price"].as_f64(), Some(25.0));
        assert_eq!(value["duration"], 30);
    }

    #[test]
    fn test_customer_response_serialization() {
        let dto = CustomerResponseDto::from(Customer {
            id: 7,
            name: "Alisson Alves".into(),
            phone: "88999632326".into(),
            email: "alisson@gmail.com".into(),
        });

        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "id": 7,
                "name": "Alisson Alves",
                "phone": "88999632326",
                "email": "alisson@gmail.com"
            })
        );
    }
}
