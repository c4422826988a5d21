//! Legacy `X-Forwarded-*` and `X-Real-Ip` headers.
//!
//! An earlier hop's value is authoritative: each header is only written
//! when it is absent. `X-Forwarded-For` is only written for WebSocket
//! upgrades; downstream frameworks key their upgrade handling off it.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use super::address::Peer;
use super::scheme::Scheme;
use super::{write_header, WritePolicy};

pub const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");
pub const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");
pub const X_FORWARDED_PORT: HeaderName = HeaderName::from_static("x-forwarded-port");
pub const X_REAL_IP: HeaderName = HeaderName::from_static("x-real-ip");

pub(crate) fn compose(headers: &mut HeaderMap, peer: &Peer, scheme: Scheme) {
    if scheme.is_websocket() {
        write_header(headers, X_FORWARDED_FOR, peer.ip.clone(), WritePolicy::KeepExisting);
    }
    write_header(
        headers,
        X_FORWARDED_PROTO,
        HeaderValue::from_static(scheme.as_str()),
        WritePolicy::KeepExisting,
    );
    write_header(headers, X_FORWARDED_PORT, peer.port.clone(), WritePolicy::KeepExisting);
    write_header(headers, X_REAL_IP, peer.ip.clone(), WritePolicy::KeepExisting);
}
