pub mod api;
pub mod cors;

use crate::{config::Config, docs::ApiDoc, handlers::not_found};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use api::create_api_routes;
pub use cors::CorsPolicy;

pub const OPENAPI_PATH: &str = "/openapi.json";
pub const DOCS_PATH: &str = "/docs";

/// Assemble the application: API routes, the OpenAPI document with Swagger UI,
/// the JSON 404 fallback, and the tracing and CORS layers on top of all of them.
pub fn create_app(config: &Config) -> Router {
    Router::new()
        .merge(create_api_routes())
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(config.cors_policy().layer()),
        )
}
