//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use forwarding_proxy::config::{ProxyConfig, RegistryKind};
use forwarding_proxy::lifecycle::prepare;
use forwarding_proxy::{admin, Shutdown};
use tokio::net::TcpListener;

/// Config using the static registry with the given route text.
pub fn static_config(routes: &str) -> ProxyConfig {
    let mut config = ProxyConfig::default();
    config.registry.backend = RegistryKind::Static;
    config.registry.static_table.routes = routes.to_string();
    config
}

/// Start the admin server on an ephemeral port.
pub async fn start_admin(config: ProxyConfig) -> (SocketAddr, Shutdown) {
    let app = prepare(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = admin::serve(listener, app.admin_state(), rx).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// A client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
