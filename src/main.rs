//! forwarding-proxy daemon.
//!
//! # Architecture Overview
//!
//! ```text
//!   config file ──▶ config (load + validate)
//!                        │
//!                        ├──▶ provenance::ForwardingConfig (per listener, immutable)
//!                        ├──▶ registry (file / static route table)
//!                        └──▶ admin server (/api/config, /api/routes, /api/version,
//!                                           /routes, /health)
//!
//!   inbound request ──▶ http::forwarding_headers_middleware
//!                           ──▶ provenance::add_headers ──▶ upstream
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use forwarding_proxy::admin;
use forwarding_proxy::config::load_config;
use forwarding_proxy::lifecycle::{prepare, signals, Shutdown};
use forwarding_proxy::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "forwarding-proxy", version, about = "Reverse proxy provenance headers and admin API")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "forwarding-proxy.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(&args.config)?;
    logging::init(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %args.config.display(),
        "forwarding-proxy starting"
    );

    let app = prepare(config)?;

    if app.config.observability.metrics_enabled {
        match app.config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %app.config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&app.config.ui.addr).await?;

    let shutdown = Shutdown::new();
    let server = tokio::spawn(admin::serve(listener, app.admin_state(), shutdown.subscribe()));

    signals::wait_for_signal().await;
    shutdown.trigger();
    server.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
