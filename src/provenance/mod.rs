//! Request provenance headers.
//!
//! # Data Flow
//! ```text
//! RequestOrigin (peer address, TLS flag, Upgrade header)
//!     → address.rs (split host:port; failure rejects the request untouched)
//!     → scheme.rs (http / https / ws / wss)
//!     → forwarded.rs (create or extend `Forwarded`)
//!     → legacy.rs (X-Forwarded-For/Proto/Port, X-Real-Ip; first writer wins)
//!     → custom.rs (configured client IP and TLS marker headers)
//!     → HeaderMap, mutated in place
//! ```
//!
//! # Design Decisions
//! - The address is resolved before any header is touched, so a rejected
//!   request keeps its header map byte for byte
//! - Header names and values from configuration are checked once, when the
//!   listener's [`ForwardingConfig`] is built
//! - Each write states its [`WritePolicy`] explicitly

pub mod address;
pub mod config;
pub mod custom;
pub mod forwarded;
pub mod legacy;
pub mod origin;
pub mod scheme;

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use self::address::Peer;

pub use address::{split_host_port, AddressParseError};
pub use config::{ForwardingConfig, InvalidSetting};
pub use legacy::{X_FORWARDED_FOR, X_FORWARDED_PORT, X_FORWARDED_PROTO, X_REAL_IP};
pub use origin::RequestOrigin;
pub use scheme::Scheme;

/// What to do when a header is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// An existing value wins; only absent headers are written.
    KeepExisting,
    /// Replace whatever is there.
    Overwrite,
}

/// Write `value` under `name` according to `policy`. Returns whether the
/// header map changed.
pub(crate) fn write_header(
    headers: &mut HeaderMap,
    name: HeaderName,
    value: HeaderValue,
    policy: WritePolicy,
) -> bool {
    if policy == WritePolicy::KeepExisting && headers.contains_key(&name) {
        return false;
    }
    headers.insert(name, value);
    true
}

/// Add provenance headers for a request about to be forwarded upstream.
///
/// On error the header map is left exactly as it was passed in.
pub fn add_headers(
    origin: &RequestOrigin,
    headers: &mut HeaderMap,
    config: &ForwardingConfig,
) -> Result<(), AddressParseError> {
    let peer = Peer::resolve(&origin.remote_addr)?;
    let scheme = origin.scheme();

    forwarded::compose(headers, &peer, scheme, config);
    legacy::compose(headers, &peer, scheme);
    custom::inject(headers, &peer, origin.secure, config);

    Ok(())
}
