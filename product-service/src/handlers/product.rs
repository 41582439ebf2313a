use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::models::ProductRequest;
use crate::AppState;

/// Fixed acknowledgment returned to the caller once the event is published
pub const CREATED_RESPONSE: &str = "Product creation request received and event published!";

/// Handle a product creation request
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<String, (StatusCode, String)> {
    tracing::info!(
        "Received product creation request: {}",
        payload.product_name
    );

    payload
        .validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Invalid request: {}", e)))?;

    state
        .product_service
        .create_product(payload)
        .await
        .map_err(|e| {
            (
                StatusCode::BAD_GATEWAY,
                format!("Failed to publish event: {}", e),
            )
        })?;

    Ok(CREATED_RESPONSE.to_string())
}
