//! Shared event types and broker client for the product event pipeline

// Re-export common dependencies
pub use anyhow;
pub use chrono;
pub use rust_decimal;
pub use serde;
pub use serde_json;
pub use thiserror;
pub use tracing;
pub use uuid;

// Export messaging module
pub mod messaging;
