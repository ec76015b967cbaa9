use axum::Json;
use crate::models::HealthResponse;
use tracing::debug;

/// Health check endpoint used to verify the server is running
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse::healthy())
}
