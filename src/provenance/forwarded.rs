//! The `Forwarded` header.
//!
//! The first hop records `for=` and `proto=`; every hop with a local
//! identifier appends its own `by=` token. Existing tokens are never
//! rewritten or reordered.

use axum::http::{header::FORWARDED, HeaderMap, HeaderValue};

use super::address::Peer;
use super::config::ForwardingConfig;
use super::scheme::Scheme;

/// Create or extend the `Forwarded` header.
pub(crate) fn compose(headers: &mut HeaderMap, peer: &Peer, scheme: Scheme, config: &ForwardingConfig) {
    let by = config.local_ip();

    // An empty value carries no facts and is treated as absent.
    let existing = headers.get(FORWARDED).filter(|v| !v.is_empty());

    let value = match (existing, by) {
        (Some(_), None) => return,
        (Some(current), Some(by)) => join(&[current.as_bytes(), b"; by=".as_slice(), by.as_bytes()]),
        (None, by) => {
            let mut parts = vec![
                b"for=".as_slice(),
                peer.ip.as_bytes(),
                b"; proto=".as_slice(),
                scheme.as_str().as_bytes(),
            ];
            if let Some(by) = by {
                parts.extend([b"; by=".as_slice(), by.as_bytes()]);
            }
            join(&parts)
        }
    };

    match value {
        Some(value) => {
            headers.insert(FORWARDED, value);
        }
        None => tracing::warn!("Forwarded header left unchanged: composed value is not a valid header value"),
    }
}

fn join(parts: &[&[u8]]) -> Option<HeaderValue> {
    HeaderValue::from_bytes(&parts.concat()).ok()
}
