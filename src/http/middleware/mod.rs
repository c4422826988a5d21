pub mod forwarding;

pub use forwarding::{forwarding_headers_middleware, TlsActive};
