//! Per-listener forwarding configuration.

use axum::http::{HeaderName, HeaderValue};
use thiserror::Error;

use crate::config::ProxySettings;

/// A forwarding setting that cannot be used on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSetting {
    #[error("{field}: {value:?} is not a valid header name")]
    HeaderName { field: &'static str, value: String },

    #[error("{field}: {value:?} is not a valid header value")]
    HeaderValue { field: &'static str, value: String },
}

/// Parse an optional header name. Empty means disabled.
pub fn header_name(field: &'static str, value: &str) -> Result<Option<HeaderName>, InvalidSetting> {
    if value.is_empty() {
        return Ok(None);
    }
    HeaderName::from_bytes(value.as_bytes())
        .map(Some)
        .map_err(|_| InvalidSetting::HeaderName {
            field,
            value: value.to_string(),
        })
}

/// Check that `value` may appear inside a header value.
pub fn header_value(field: &'static str, value: &str) -> Result<HeaderValue, InvalidSetting> {
    HeaderValue::from_str(value).map_err(|_| InvalidSetting::HeaderValue {
        field,
        value: value.to_string(),
    })
}

/// Immutable forwarding settings shared by every request on a listener.
///
/// Built once from [`ProxySettings`]; header names and values are checked
/// here so the per-request pipeline never has to.
#[derive(Debug, Clone)]
pub struct ForwardingConfig {
    client_ip_header: Option<HeaderName>,
    tls_header: Option<HeaderName>,
    tls_header_value: HeaderValue,
    local_ip: Option<String>,
}

impl ForwardingConfig {
    pub fn from_settings(settings: &ProxySettings) -> Result<Self, InvalidSetting> {
        let client_ip_header = header_name("proxy.client_ip_header", &settings.client_ip_header)?;
        let tls_header = header_name("proxy.tls_header", &settings.tls_header)?;
        let tls_header_value = header_value("proxy.tls_header_value", &settings.tls_header_value)?;
        let local_ip = if settings.local_ip.is_empty() {
            None
        } else {
            header_value("proxy.local_ip", &settings.local_ip)?;
            Some(settings.local_ip.clone())
        };

        Ok(Self {
            client_ip_header,
            tls_header,
            tls_header_value,
            local_ip,
        })
    }

    pub fn client_ip_header(&self) -> Option<&HeaderName> {
        self.client_ip_header.as_ref()
    }

    pub fn tls_header(&self) -> Option<&HeaderName> {
        self.tls_header.as_ref()
    }

    pub fn tls_header_value(&self) -> &HeaderValue {
        &self.tls_header_value
    }

    /// This proxy's own identifier for the `by=` token.
    pub fn local_ip(&self) -> Option<&str> {
        self.local_ip.as_deref()
    }
}

impl Default for ForwardingConfig {
    fn default() -> Self {
        Self {
            client_ip_header: None,
            tls_header: None,
            tls_header_value: HeaderValue::from_static(""),
            local_ip: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_disable_everything() {
        let config = ForwardingConfig::from_settings(&ProxySettings::default()).unwrap();
        assert!(config.client_ip_header().is_none());
        assert!(config.tls_header().is_none());
        assert!(config.local_ip().is_none());
        assert_eq!(config.tls_header_value(), "");
    }

    #[test]
    fn test_header_names_are_canonicalized() {
        let settings = ProxySettings {
            client_ip_header: "Client-IP".into(),
            tls_header: "X-Secure".into(),
            tls_header_value: "on".into(),
            local_ip: "5.6.7.8".into(),
        };
        let config = ForwardingConfig::from_settings(&settings).unwrap();
        assert_eq!(config.client_ip_header().unwrap().as_str(), "client-ip");
        assert_eq!(config.tls_header().unwrap().as_str(), "x-secure");
        assert_eq!(config.tls_header_value(), "on");
        assert_eq!(config.local_ip(), Some("5.6.7.8"));
    }

    #[test]
    fn test_invalid_header_name() {
        let settings = ProxySettings {
            client_ip_header: "Client IP".into(),
            ..Default::default()
        };
        let err = ForwardingConfig::from_settings(&settings).unwrap_err();
        assert_eq!(
            err,
            InvalidSetting::HeaderName {
                field: "proxy.client_ip_header",
                value: "Client IP".into(),
            }
        );
    }

    #[test]
    fn test_invalid_local_ip() {
        let settings = ProxySettings {
            local_ip: "5.6.7.8\r\nX-Evil: 1".into(),
            ..Default::default()
        };
        assert!(matches!(
            ForwardingConfig::from_settings(&settings),
            Err(InvalidSetting::HeaderValue { field: "proxy.local_ip", .. })
        ));
    }
}
