use fullstack_api_viewer_backend::{
    create_app,
    routes::{DOCS_PATH, OPENAPI_PATH},
    Config, ServerError,
};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Load configuration before tracing so LOG_LEVEL can drive the filter
    let loaded = Config::load();
    let log_level = loaded
        .as_ref()
        .map(|config| config.effective_log_level().to_string())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("fullstack_api_viewer_backend={log_level},tower_http=debug,info").into()
        }))
        .init();

    info!("Starting server...");

    let config = loaded.unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
        Config::default()
    });

    let cors = config.cors_policy();
    info!("CORS policy: {}", cors.describe());
    if cors.allows_any_origin() && config.is_production() {
        warn!("CORS allows any origin in production; set CORS_ORIGINS to restrict it");
    }

    let app = create_app(&config);

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    info!("🚀 Server running on http://{}", addr);
    info!("📚 Swagger UI available at http://{}{}", addr, DOCS_PATH);
    info!("📄 OpenAPI document at http://{}{}", addr, OPENAPI_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
