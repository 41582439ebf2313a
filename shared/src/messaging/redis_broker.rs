use std::sync::Arc;

use futures_util::StreamExt;
use redis::AsyncCommands;
use tracing::{error, info};

use super::event_types::event_channel;
use super::{BrokerError, MessageBroker, MessageHandler};

/// Redis Pub/Sub implementation of the broker client
///
/// A message published to an exchange with a routing key lands on the
/// channel the pair derives; a queue is the channel name a consumer
/// subscribes to.
pub struct RedisBroker {
    redis_client: redis::Client,
}

impl RedisBroker {
    /// Create a new broker client
    pub fn new(redis_client: redis::Client) -> Self {
        Self { redis_client }
    }

    /// Create from Redis URL
    pub fn from_url(redis_url: &str) -> Result<Self, BrokerError> {
        let redis_client = redis::Client::open(redis_url)
            .map_err(|e| BrokerError::Connection(format!("Failed to create Redis client: {}", e)))?;
        Ok(Self { redis_client })
    }
}

#[async_trait::async_trait]
impl MessageBroker for RedisBroker {
    async fn publish(
        &self,
        exchange: &str,
        routing_key: &str,
        payload: &[u8],
    ) -> Result<(), BrokerError> {
        let channel = event_channel(exchange, routing_key);

        let mut conn = self
            .redis_client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| BrokerError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        conn.publish::<_, _, ()>(&channel, payload)
            .await
            .map_err(|e| BrokerError::Publish(format!("Failed to publish to {}: {}", channel, e)))?;

        info!("Published message to channel: {}", channel);
        Ok(())
    }

    async fn subscribe(
        &self,
        queue: &str,
        handler: Arc<dyn MessageHandler>,
    ) -> Result<(), BrokerError> {
        let conn = self
            .redis_client
            .get_async_connection()
            .await
            .map_err(|e| BrokerError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut pubsub = conn.into_pubsub();
        pubsub.subscribe(queue).await.map_err(|e| {
            BrokerError::Subscription(format!("Failed to subscribe to {}: {}", queue, e))
        })?;

        info!("Subscribed to queue: {}", queue);

        let mut stream = pubsub.on_message();
        while let Some(message) = stream.next().await {
            let payload: Vec<u8> = match message.get_payload() {
                Ok(payload) => payload,
                Err(e) => {
                    error!("Failed to read payload from {}: {}", queue, e);
                    continue;
                }
            };

            // A failed delivery is logged and skipped, not retried
            if let Err(e) = handler.handle(&payload).await {
                error!("Handler failed for message on {}: {}", queue, e);
            }
        }

        // The message stream only ends when the connection is gone
        Err(BrokerError::Connection(format!(
            "Subscription to {} ended unexpectedly",
            queue
        )))
    }
}
