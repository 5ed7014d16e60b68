use anyhow::Context;
use product_catalog_rust::config::{AppConfig, DEFAULT_CONFIG_PATH};
use product_catalog_rust::logging;
use product_catalog_rust::product::{AppState, ProductStore};
use product_catalog_rust::router::create_app_router;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (first argument overrides the config file path)
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = AppConfig::load_from(&config_path).context("failed to load configuration")?;

    logging::init(&config.logging.level);

    // Initialize application state
    let state = Arc::new(AppState::with_store(
        ProductStore::seeded(),
        config.pagination.default_limit,
    ));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let addr = config
        .socket_addr()
        .context("invalid server.host / server.port")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Server running on http://{}", addr);
    info!("   GET    /products            - list (category, search, page, limit)");
    info!("   GET    /products/stats/all  - counts per category");
    info!("   GET    /products/:id        - fetch one");
    info!("   POST   /products            - create");
    info!("   PUT    /products/:id        - replace fields");
    info!("   DELETE /products/:id        - delete");

    // Start the server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
