use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Core event emitted when a product creation request has been accepted
///
/// Immutable once constructed; serialized as-is to the broker wire
/// format and deserialized identically on the consumer side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreatedEvent {
    pub product_id: Uuid,
    pub product_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl ProductCreatedEvent {
    /// Build a new event with a server-generated id and timestamp
    pub fn new(product_name: String, price: Decimal) -> Self {
        Self {
            product_id: Uuid::new_v4(),
            product_name,
            price,
            timestamp: Utc::now(),
        }
    }
}

/// Get the Pub/Sub channel a published message is routed to
pub fn event_channel(exchange: &str, routing_key: &str) -> String {
    format!("{}:{}", exchange, routing_key)
}
