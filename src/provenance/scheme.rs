//! Forwarding scheme classification.

use std::fmt;

/// The logical protocol a request arrived over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
    Ws,
    Wss,
}

impl Scheme {
    /// Classify a request from its transport security and `Upgrade` header.
    ///
    /// The upgrade value is compared against `websocket` ignoring ASCII case.
    pub fn classify(secure: bool, upgrade: Option<&str>) -> Self {
        let websocket = upgrade.is_some_and(|u| u.eq_ignore_ascii_case("websocket"));
        match (secure, websocket) {
            (false, false) => Scheme::Http,
            (true, false) => Scheme::Https,
            (false, true) => Scheme::Ws,
            (true, true) => Scheme::Wss,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
            Scheme::Ws => "ws",
            Scheme::Wss => "wss",
        }
    }

    pub fn is_websocket(self) -> bool {
        matches!(self, Scheme::Ws | Scheme::Wss)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
