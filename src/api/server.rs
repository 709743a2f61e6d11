//! Web form server
//!
//! Axum router serving the upload form on `/` plus a JSON health check.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::handlers;
use super::page::FormPage;
use crate::config::WebConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub version: String,
    pub page: FormPage,
}

/// Build the application router
pub fn router(config: &WebConfig) -> anyhow::Result<Router> {
    let state = Arc::new(AppState {
        version: env!("CARGO_PKG_VERSION").to_string(),
        page: FormPage::new()?,
    });

    let app = Router::new()
        .route("/", get(handlers::index).post(handlers::upload))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http());
    Ok(app)
}

/// Run the web server until Ctrl+C / SIGTERM
pub async fn run_web_server(config: WebConfig) -> anyhow::Result<()> {
    // A subscriber may already be installed by an embedding binary
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheet2csv=info,tower_http=info".into()),
        )
        .try_init();

    let app = router(&config)?;

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("sheet2csv web form starting on http://{}", addr);
    info!(
        "   Upload limit: {} bytes, health: /health",
        config.max_upload_bytes
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("sheet2csv web form shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {}", e);
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

    info!("Shutdown signal received, stopping server...");
}
