use tracing::info;

use shared::messaging::{BrokerError, MessageHandler, ProductCreatedEvent};

/// Consume handler for product created events
///
/// Processing is a no-op beyond logging: no acknowledgment policy, no
/// retry, no dead-letter routing.
pub struct ProductEventListener;

#[async_trait::async_trait]
impl MessageHandler for ProductEventListener {
    async fn handle(&self, payload: &[u8]) -> Result<(), BrokerError> {
        let event: ProductCreatedEvent = serde_json::from_slice(payload).map_err(|e| {
            BrokerError::Serialization(format!("Failed to deserialize event: {}", e))
        })?;

        info!("Received event: {:?}", event);

        info!(
            "Processing new product notification for Product ID: {}...",
            event.product_id
        );

        info!(
            "Notification processed successfully for Product ID: {}",
            event.product_id
        );

        Ok(())
    }
}
