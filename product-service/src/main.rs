mod config;
mod handlers;
mod models;
mod services;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shared::messaging::RedisBroker;

use crate::config::Config;
use crate::services::ProductService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting Product Service...");

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;
    info!("Configuration loaded successfully");

    // Initialize broker client
    let broker = Arc::new(RedisBroker::from_url(&config.redis.url)?);
    info!("Broker client initialized");

    let product_service = Arc::new(ProductService::new(
        broker,
        config.broker.exchange.clone(),
        config.broker.routing_key.clone(),
    ));

    let state = AppState { product_service };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/products", post(handlers::product::create_product))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Product Service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
