//! Configuration validation.
//!
//! Serde handles syntax; this checks that values are usable: header names
//! and values can go on the wire, addresses parse, and the chosen registry
//! backend has what it needs. All problems are reported, not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{ProxyConfig, RegistryKind};
use crate::provenance::config::{header_name, header_value};
use crate::provenance::InvalidSetting;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Forwarding(#[from] InvalidSetting),

    #[error("{field}: {value:?} is not a valid socket address")]
    Address { field: &'static str, value: String },

    #[error("registry.file.path must be set for the file backend")]
    MissingRoutesFile,

    #[error("observability.log_level: unknown level {0:?}")]
    LogLevel(String),
}

pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let proxy = &config.proxy;

    if let Err(e) = header_name("proxy.client_ip_header", &proxy.client_ip_header) {
        errors.push(e.into());
    }
    if let Err(e) = header_name("proxy.tls_header", &proxy.tls_header) {
        errors.push(e.into());
    }
    if let Err(e) = header_value("proxy.tls_header_value", &proxy.tls_header_value) {
        errors.push(e.into());
    }
    if let Err(e) = header_value("proxy.local_ip", &proxy.local_ip) {
        errors.push(e.into());
    }

    if config.registry.backend == RegistryKind::File && config.registry.file.path.trim().is_empty() {
        errors.push(ValidationError::MissingRoutesFile);
    }

    check_address(&mut errors, "ui.addr", &config.ui.addr);
    if config.observability.metrics_enabled {
        check_address(&mut errors, "observability.metrics_address", &config.observability.metrics_address);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::Address {
            field,
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ProxyConfig::default()), Ok(()));
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = ProxyConfig::default();
        config.proxy.client_ip_header = "bad header".into();
        config.proxy.tls_header_value = "a\nb".into();
        config.registry.file.path = String::new();
        config.ui.addr = ":9998".into();
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::MissingRoutesFile));
        assert!(errors.contains(&ValidationError::LogLevel("loud".into())));
        assert!(errors.contains(&ValidationError::Address {
            field: "ui.addr",
            value: ":9998".into(),
        }));
    }

    #[test]
    fn test_static_backend_needs_no_file() {
        let mut config = ProxyConfig::default();
        config.registry.backend = RegistryKind::Static;
        config.registry.file.path = String::new();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ProxyConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
