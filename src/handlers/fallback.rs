use axum::{http::{StatusCode, Uri}, Json};
use crate::models::ErrorResponse;
use tracing::debug;

/// Fallback for paths without a registered route
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    debug!("No route for '{}'", uri.path());
    let status = StatusCode::NOT_FOUND;
    (status, Json(ErrorResponse::new(status, format!("Route '{}' not found", uri.path()))))
}
