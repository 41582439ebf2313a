use std::sync::Arc;

use tracing::info;

use shared::messaging::{BrokerError, MessageBroker, ProductCreatedEvent};

use crate::models::ProductRequest;

/// Publish service for product creation requests
///
/// Holds the broker client and the statically configured exchange and
/// routing key.
pub struct ProductService {
    broker: Arc<dyn MessageBroker>,
    exchange: String,
    routing_key: String,
}

impl ProductService {
    pub fn new(broker: Arc<dyn MessageBroker>, exchange: String, routing_key: String) -> Self {
        Self {
            broker,
            exchange,
            routing_key,
        }
    }

    /// Accept a creation request, build the event record and publish it
    ///
    /// The database save is simulated; the only durable effect is the
    /// published event.
    pub async fn create_product(
        &self,
        request: ProductRequest,
    ) -> Result<ProductCreatedEvent, BrokerError> {
        info!("Saving product to the database... (simulated)");

        let event = ProductCreatedEvent::new(request.product_name, request.price);

        let payload = serde_json::to_vec(&event).map_err(|e| {
            BrokerError::Serialization(format!("Failed to serialize event: {}", e))
        })?;

        self.broker
            .publish(&self.exchange, &self.routing_key, &payload)
            .await?;

        info!(
            "Published product created event with Product ID: {}",
            event.product_id
        );

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use shared::messaging::MessageHandler;

    mock! {
        Broker {}

        #[async_trait]
        impl MessageBroker for Broker {
            async fn publish(
                &self,
                exchange: &str,
                routing_key: &str,
                payload: &[u8],
            ) -> Result<(), BrokerError>;

            async fn subscribe(
                &self,
                queue: &str,
                handler: Arc<dyn MessageHandler>,
            ) -> Result<(), BrokerError>;
        }
    }

    fn request(name: &str, price: &str) -> ProductRequest {
        ProductRequest {
            product_name: name.to_string(),
            price: price.parse().unwrap(),
        }
    }

    fn service(broker: MockBroker) -> ProductService {
        ProductService::new(
            Arc::new(broker),
            "product.events".to_string(),
            "product.created".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_product_publishes_exactly_once() {
        let mut broker = MockBroker::new();
        broker
            .expect_publish()
            .withf(|exchange, routing_key, payload| {
                let event: ProductCreatedEvent = serde_json::from_slice(payload).unwrap();
                exchange == "product.events"
                    && routing_key == "product.created"
                    && event.product_name == "Widget"
                    && event.price == "9.99".parse::<Decimal>().unwrap()
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let event = service(broker)
            .create_product(request("Widget", "9.99"))
            .await
            .unwrap();

        assert_eq!(event.product_name, "Widget");
    }

    #[tokio::test]
    async fn test_generated_ids_are_unique_for_identical_requests() {
        let mut broker = MockBroker::new();
        broker
            .expect_publish()
            .times(2)
            .returning(|_, _, _| Ok(()));

        let service = service(broker);
        let first = service
            .create_product(request("Widget", "9.99"))
            .await
            .unwrap();
        let second = service
            .create_product(request("Widget", "9.99"))
            .await
            .unwrap();

        assert_ne!(first.product_id, second.product_id);
    }

    #[tokio::test]
    async fn test_event_timestamp_is_within_call_window() {
        let mut broker = MockBroker::new();
        broker.expect_publish().times(1).returning(|_, _, _| Ok(()));

        let before = Utc::now();
        let event = service(broker)
            .create_product(request("Widget", "9.99"))
            .await
            .unwrap();
        let after = Utc::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[tokio::test]
    async fn test_publish_failure_propagates() {
        let mut broker = MockBroker::new();
        broker
            .expect_publish()
            .times(1)
            .returning(|_, _, _| Err(BrokerError::Publish("broker unavailable".to_string())));

        let result = service(broker).create_product(request("Widget", "9.99")).await;

        assert!(matches!(result, Err(BrokerError::Publish(_))));
    }
}
