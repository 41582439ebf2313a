/// Messaging and event handling utilities
pub mod event_types;
pub mod redis_broker;

pub use event_types::*;
pub use redis_broker::RedisBroker;

use std::sync::Arc;

/// Broker client trait for abstracting different messaging backends
#[async_trait::async_trait]
pub trait MessageBroker: Send + Sync {
    /// Publish a payload to an exchange with a routing key
    async fn publish(
        &self,
        exchange: &str,
        routing_key: &str,
        payload: &[u8],
    ) -> Result<(), BrokerError>;

    /// Register a handler against a named queue and drive deliveries
    /// until the underlying connection ends
    async fn subscribe(
        &self,
        queue: &str,
        handler: Arc<dyn MessageHandler>,
    ) -> Result<(), BrokerError>;
}

/// Handler invoked once per delivered message
#[async_trait::async_trait]
pub trait MessageHandler: Send + Sync {
    async fn handle(&self, payload: &[u8]) -> Result<(), BrokerError>;
}

/// Broker client errors
#[derive(Debug, thiserror::Error)]
pub enum BrokerError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Publish error: {0}")]
    Publish(String),

    #[error("Subscription error: {0}")]
    Subscription(String),

    #[error("Handler error: {0}")]
    Handler(String),
}

pub type BrokerResult<T> = Result<T, BrokerError>;
