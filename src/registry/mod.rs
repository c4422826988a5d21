//! Route registry subsystem.
//!
//! # Data Flow
//! ```text
//! RegistryConfig
//!     → file.rs (read route file once) ─┐
//!     → static_backend.rs (inline text) ┴→ routes.rs (parse)
//!     → RouteTable, served read-only by the admin API
//! ```
//!
//! # Design Decisions
//! - Backends load once at startup; there is no watch or reload
//! - Route selection and dispatch live elsewhere; this only owns the table

pub mod file;
pub mod routes;
pub mod static_backend;

use std::path::PathBuf;

use thiserror::Error;

use crate::config::{RegistryConfig, RegistryKind};

pub use file::FileBackend;
pub use routes::{Route, RouteError, RouteTable};
pub use static_backend::StaticBackend;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("cannot read routes from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid route table: {0}")]
    Routes(#[from] RouteError),
}

/// A source of routes.
pub trait Backend: Send + Sync + std::fmt::Debug {
    /// Backend name for logs and the admin API.
    fn name(&self) -> &'static str;

    fn routes(&self) -> &RouteTable;
}

/// Open the backend selected by `config`.
pub fn from_config(config: &RegistryConfig) -> Result<Box<dyn Backend>, RegistryError> {
    let backend: Box<dyn Backend> = match config.backend {
        RegistryKind::File => Box::new(FileBackend::new(&config.file.path)?),
        RegistryKind::Static => Box::new(StaticBackend::new(&config.static_table.routes)?),
    };

    tracing::info!(
        backend = backend.name(),
        routes = backend.routes().len(),
        "Route registry loaded"
    );
    Ok(backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticRegistryConfig;

    #[test]
    fn test_static_from_config() {
        let config = RegistryConfig {
            backend: RegistryKind::Static,
            static_table: StaticRegistryConfig {
                routes: "route add web / http://10.0.0.1/".into(),
            },
            ..Default::default()
        };
        let backend = from_config(&config).unwrap();
        assert_eq!(backend.name(), "static");
        assert_eq!(backend.routes().len(), 1);
    }

    #[test]
    fn test_missing_file_from_config() {
        let mut config = RegistryConfig::default();
        config.file.path = "/nonexistent/routes.txt".into();
        let err = from_config(&config).unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }
}
