use crate::handlers::{health_check, hello};
use axum::{routing::get, Router};

/// Create API routes
pub fn create_api_routes() -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/hello", get(hello))
}
