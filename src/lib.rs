//! Request provenance headers for a reverse proxy, with the configuration,
//! route registry and admin server around them.

pub mod admin;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod provenance;
pub mod registry;

pub use config::schema::ProxyConfig;
pub use lifecycle::Shutdown;
pub use provenance::{add_headers, AddressParseError, ForwardingConfig, RequestOrigin, Scheme};
