//! Provenance header middleware.
//! Adds `Forwarded`, `X-Forwarded-*` and configured headers before a request
//! moves on to routing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::observability::metrics;
use crate::provenance::{add_headers, ForwardingConfig, RequestOrigin};

/// Request extension marking a connection that completed a TLS handshake.
/// Inserted by the TLS acceptor; absent on plaintext connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlsActive;

pub async fn forwarding_headers_middleware(
    State(config): State<Arc<ForwardingConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let secure = request.extensions().get::<TlsActive>().is_some();
    let origin = match request.extensions().get::<ConnectInfo<SocketAddr>>() {
        Some(ConnectInfo(remote)) => RequestOrigin::from_request(&request, *remote, secure),
        // Without connect info there is no peer address to report.
        None => RequestOrigin {
            secure,
            ..RequestOrigin::default()
        },
    };

    match add_headers(&origin, request.headers_mut(), &config) {
        Ok(()) => {
            let scheme = origin.scheme();
            tracing::debug!(remote = %origin.remote_addr, scheme = %scheme, "Provenance headers added");
            metrics::record_enriched(scheme);
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!(remote = %e.addr(), error = %e, "Rejecting request");
            metrics::record_rejected();
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
