mod config;
mod listener;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shared::messaging::{MessageBroker, RedisBroker};

use crate::config::Config;
use crate::listener::ProductEventListener;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting Notification Service...");

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;
    info!("Configuration loaded successfully");

    // Initialize broker client
    let broker = Arc::new(RedisBroker::from_url(&config.redis.url)?);
    info!("Broker client initialized");

    // Register the listener at startup
    let consumer = tokio::spawn(run_consumer(broker, config.broker.queue.clone()));

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Notification Service listening on {}", addr);

    let tcp_listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(tcp_listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Tear down the subscription on shutdown
    consumer.abort();
    info!("Notification Service stopped");

    Ok(())
}

/// Drive the queue subscription, reconnecting with a delay whenever the
/// broker connection drops
async fn run_consumer(broker: Arc<RedisBroker>, queue: String) {
    let handler = Arc::new(ProductEventListener);

    loop {
        info!("Registering listener on queue: {}", queue);

        if let Err(e) = broker.subscribe(&queue, handler.clone()).await {
            error!("Queue subscription lost: {}", e);
        }

        tokio::time::sleep(Duration::from_secs(5)).await;
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

async fn health_check() -> &'static str {
    "Notification Service is healthy"
}
