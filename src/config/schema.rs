//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ProxyConfig {
    /// Provenance header settings for the listener.
    pub proxy: ProxySettings,

    /// Where the route table comes from.
    pub registry: RegistryConfig,

    /// Admin server and UI.
    pub ui: UiConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Per-listener forwarding settings. Empty strings disable a feature.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProxySettings {
    /// Header that always receives the client IP (e.g. "Client-IP").
    pub client_ip_header: String,

    /// Header set on requests that arrived over TLS.
    pub tls_header: String,

    /// Value for `tls_header`; may be empty.
    pub tls_header_value: String,

    /// This proxy's address, appended to `Forwarded` as `by=`.
    pub local_ip: String,
}

/// Registry backend selection.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RegistryKind {
    #[default]
    File,
    Static,
}

/// Route registry configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RegistryConfig {
    pub backend: RegistryKind,

    pub file: FileRegistryConfig,

    #[serde(rename = "static")]
    pub static_table: StaticRegistryConfig,
}

/// File registry: routes are read once from `path`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileRegistryConfig {
    pub path: String,
}

impl Default for FileRegistryConfig {
    fn default() -> Self {
        Self {
            path: "routes.txt".to_string(),
        }
    }
}

/// Static registry: routes are given inline.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StaticRegistryConfig {
    pub routes: String,
}

/// Admin server configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Admin server bind address.
    pub addr: String,

    /// Title shown in the route page header.
    pub title: String,

    /// Header bar color.
    pub color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:9998".to_string(),
            title: String::new(),
            color: "light-green".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
