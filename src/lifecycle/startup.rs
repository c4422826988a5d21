//! Startup orchestration.
//!
//! Turns a validated [`ProxyConfig`] into the shared, immutable pieces the
//! running process needs. Any failure here is fatal.

use std::sync::Arc;

use thiserror::Error;

use crate::admin::AdminState;
use crate::config::ProxyConfig;
use crate::provenance::{ForwardingConfig, InvalidSetting};
use crate::registry::{self, Backend, RegistryError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid forwarding settings: {0}")]
    Forwarding(#[from] InvalidSetting),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Everything built at startup, shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct App {
    pub config: Arc<ProxyConfig>,
    pub forwarding: Arc<ForwardingConfig>,
    pub registry: Arc<dyn Backend>,
}

impl App {
    pub fn admin_state(&self) -> AdminState {
        AdminState {
            config: self.config.clone(),
            registry: self.registry.clone(),
        }
    }
}

pub fn prepare(config: ProxyConfig) -> Result<App, StartupError> {
    let forwarding = ForwardingConfig::from_settings(&config.proxy)?;
    tracing::info!(
        client_ip_header = ?forwarding.client_ip_header(),
        tls_header = ?forwarding.tls_header(),
        local_ip = ?forwarding.local_ip(),
        "Forwarding configuration ready"
    );

    let registry: Arc<dyn Backend> = Arc::from(registry::from_config(&config.registry)?);

    Ok(App {
        config: Arc::new(config),
        forwarding: Arc::new(forwarding),
        registry,
    })
}
