//! HTTP frontend adapters.
//!
//! # Data Flow
//! ```text
//! accepted connection (ConnectInfo, TlsActive)
//!     → middleware/forwarding.rs (RequestOrigin → provenance::add_headers)
//!     → next service (routing, forwarding)
//! ```

pub mod middleware;

pub use middleware::{forwarding_headers_middleware, TlsActive};
