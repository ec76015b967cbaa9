use axum::Json;
use crate::models::HelloResponse;
use tracing::debug;

/// Return a simple Hello World payload for the frontend demo
pub async fn hello() -> Json<HelloResponse> {
    debug!("Hello requested");
    Json(HelloResponse::hello_world())
}
