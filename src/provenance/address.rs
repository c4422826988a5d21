//! Peer address resolution.
//!
//! Splits the raw `host:port` text the frontend reports for a connection.
//! Bracketed IPv6 (`[::1]:443`) is accepted; the brackets are stripped and
//! the host is otherwise used verbatim.

use axum::http::HeaderValue;
use thiserror::Error;

/// The remote address could not be split into a host and a port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse {addr}")]
pub struct AddressParseError {
    addr: String,
}

impl AddressParseError {
    pub(crate) fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }

    /// The address exactly as it was received.
    pub fn addr(&self) -> &str {
        &self.addr
    }
}

/// Split `addr` into `(host, port)`.
///
/// The port must be a decimal number that fits in 16 bits. An empty host
/// (`":8080"`) is passed through.
pub fn split_host_port(addr: &str) -> Result<(&str, &str), AddressParseError> {
    let fail = || AddressParseError::new(addr);

    let (host, port) = match addr.strip_prefix('[') {
        Some(rest) => {
            let (host, tail) = rest.split_once(']').ok_or_else(fail)?;
            let port = tail.strip_prefix(':').ok_or_else(fail)?;
            if host.contains('[') {
                return Err(fail());
            }
            (host, port)
        }
        None => {
            let (host, port) = addr.rsplit_once(':').ok_or_else(fail)?;
            // Unbracketed IPv6 is ambiguous.
            if host.contains([':', '[', ']']) {
                return Err(fail());
            }
            (host, port)
        }
    };

    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) || port.parse::<u16>().is_err() {
        return Err(fail());
    }

    Ok((host, port))
}

/// A resolved peer, with host and port already validated as header values.
#[derive(Debug, Clone)]
pub(crate) struct Peer {
    pub ip: HeaderValue,
    pub port: HeaderValue,
}

impl Peer {
    pub fn resolve(addr: &str) -> Result<Self, AddressParseError> {
        let (host, port) = split_host_port(addr)?;
        let ip = HeaderValue::from_str(host).map_err(|_| AddressParseError::new(addr))?;
        let port = HeaderValue::from_str(port).map_err(|_| AddressParseError::new(addr))?;
        Ok(Self { ip, port })
    }
}
