//! Admin server: configuration, route table, version and health.

pub mod handlers;
pub mod ui;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::registry::Backend;
use self::handlers::*;

/// Read-only state shared by admin handlers.
#[derive(Debug, Clone)]
pub struct AdminState {
    pub config: Arc<ProxyConfig>,
    pub registry: Arc<dyn Backend>,
}

pub fn setup_admin_router(state: AdminState) -> Router {
    Router::new()
        .route("/api/config", get(get_config))
        .route("/api/routes", get(get_routes))
        .route("/api/version", get(get_version))
        .route("/routes", get(routes_page))
        .route("/health", get(health))
        .route("/", get(root))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serve the admin API until `shutdown` fires.
pub async fn serve(
    listener: TcpListener,
    state: AdminState,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "Admin server starting");

    axum::serve(listener, setup_admin_router(state))
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
        })
        .await?;

    tracing::info!("Admin server stopped");
    Ok(())
}
