use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Inbound product creation request
///
/// Transient; exists only for the duration of one HTTP call.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[validate(length(min = 1, message = "Product name must not be empty"))]
    pub product_name: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom = "validate_price")]
    pub price: Decimal,
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(ValidationError::new("price_must_not_be_negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes_validation() {
        let request: ProductRequest =
            serde_json::from_str(r#"{"productName":"Widget","price":9.99}"#).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let request: ProductRequest =
            serde_json::from_str(r#"{"productName":"","price":9.99}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_negative_price_fails_validation() {
        let request: ProductRequest =
            serde_json::from_str(r#"{"productName":"Widget","price":-1.0}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_name_fails_deserialization() {
        let result = serde_json::from_str::<ProductRequest>(r#"{"price":9.99}"#);
        assert!(result.is_err());
    }
}
