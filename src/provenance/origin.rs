//! Read-only facts about an inbound request.

use std::net::SocketAddr;

use axum::http::{header, Request};

use super::scheme::Scheme;

/// Where a request came from and how it arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOrigin {
    /// Peer address in `host:port` form. Not validated until the pipeline runs.
    pub remote_addr: String,
    /// A TLS session is active on the connection.
    pub secure: bool,
    /// Value of the request's `Upgrade` header, if any.
    pub upgrade: Option<String>,
}

impl RequestOrigin {
    pub fn new(remote_addr: impl Into<String>) -> Self {
        Self {
            remote_addr: remote_addr.into(),
            ..Self::default()
        }
    }

    pub fn with_tls(mut self) -> Self {
        self.secure = true;
        self
    }

    pub fn with_upgrade(mut self, upgrade: impl Into<String>) -> Self {
        self.upgrade = Some(upgrade.into());
        self
    }

    /// Capture the origin of `request` received from `remote_addr`.
    pub fn from_request<B>(request: &Request<B>, remote_addr: SocketAddr, secure: bool) -> Self {
        let upgrade = request
            .headers()
            .get(header::UPGRADE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        Self {
            remote_addr: remote_addr.to_string(),
            secure,
            upgrade,
        }
    }

    pub fn scheme(&self) -> Scheme {
        Scheme::classify(self.secure, self.upgrade.as_deref())
    }
}
