use utoipa::OpenApi;
use crate::models::*;

/// Health check
///
/// Used to verify the server is running.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    operation_id = "health_check",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Hello World
///
/// Returns a simple Hello World payload for the frontend demo.
#[utoipa::path(
    get,
    path = "/hello",
    tag = "Hello",
    operation_id = "get_hello",
    responses(
        (status = 200, description = "Greeting from the API", body = HelloResponse)
    )
)]
#[allow(dead_code)]
pub async fn get_hello_doc() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fullstack API Viewer Backend",
        version = "0.1.0",
        description = "Backend for the Fullstack API Viewer project.\n\nThe Electron/React frontend calls `GET /hello` to display a simple JSON response."
    ),
    paths(
        health_check_doc,
        get_hello_doc,
    ),
    components(
        schemas(HealthResponse, HelloResponse)
    ),
    tags(
        (name = "Health", description = "Health and status endpoints."),
        (name = "Hello", description = "Demo endpoints used by the Electron/React frontend.")
    )
)]
pub struct ApiDoc;
