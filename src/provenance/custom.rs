//! Operator-configured headers.
//!
//! The client IP header is owned by this proxy and always overwritten. The
//! TLS marker header is only written for requests over TLS, and may carry
//! an empty value.

use axum::http::HeaderMap;

use super::address::Peer;
use super::config::ForwardingConfig;
use super::{write_header, WritePolicy};

pub(crate) fn inject(headers: &mut HeaderMap, peer: &Peer, secure: bool, config: &ForwardingConfig) {
    if let Some(name) = config.client_ip_header() {
        write_header(headers, name.clone(), peer.ip.clone(), WritePolicy::Overwrite);
    }

    if let (Some(name), true) = (config.tls_header(), secure) {
        write_header(
            headers,
            name.clone(),
            config.tls_header_value().clone(),
            WritePolicy::Overwrite,
        );
    }
}
