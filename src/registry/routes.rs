//! Static route table parsing.
//!
//! One command per line; blank lines and `#` comments are skipped.
//!
//! ```text
//! route add <service> <src> <dst> [weight <w>] [tags "<t1>,<t2>"]
//! route del <service> [<src> [<dst>]]
//! ```

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct RouteError {
    pub line: usize,
    pub reason: String,
}

/// A single route table entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub service: String,
    /// Host and/or path prefix, e.g. `example.com/api`.
    pub src: String,
    /// Upstream URL.
    pub dst: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Ordered list of routes, as declared.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn parse(text: &str) -> Result<Self, RouteError> {
        let mut table = RouteTable::default();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fail = |reason: &str| RouteError {
                line: idx + 1,
                reason: reason.to_string(),
            };

            let tokens = tokenize(line).ok_or_else(|| fail("unterminated quote"))?;
            let words: Vec<&str> = tokens.iter().map(String::as_str).collect();

            match words.as_slice() {
                ["route", "add", service, src, dst, opts @ ..] => {
                    if !dst.contains("://") {
                        return Err(fail(&format!("invalid destination {dst:?}")));
                    }
                    let mut route = Route {
                        service: service.to_string(),
                        src: src.to_string(),
                        dst: dst.to_string(),
                        weight: None,
                        tags: Vec::new(),
                    };
                    parse_options(&mut route, opts).map_err(|reason| fail(reason.as_str()))?;
                    table.routes.push(route);
                }
                ["route", "del", service, rest @ ..] if rest.len() <= 2 => {
                    let src = rest.first().copied();
                    let dst = rest.get(1).copied();
                    table.routes.retain(|r| {
                        !(r.service == *service
                            && src.map_or(true, |s| r.src == s)
                            && dst.map_or(true, |d| r.dst == d))
                    });
                }
                ["route", cmd, ..] => return Err(fail(&format!("unknown command {cmd:?}"))),
                _ => return Err(fail("expected a route command")),
            }
        }

        Ok(table)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn parse_options(route: &mut Route, mut opts: &[&str]) -> Result<(), String> {
    while let [key, value, rest @ ..] = opts {
        match *key {
            "weight" => {
                let weight: f64 = value.parse().map_err(|_| format!("invalid weight {value:?}"))?;
                if !(0.0..=1.0).contains(&weight) {
                    return Err(format!("weight {weight} out of range [0, 1]"));
                }
                route.weight = Some(weight);
            }
            "tags" => {
                route.tags = value
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            other => return Err(format!("unknown option {other:?}")),
        }
        opts = rest;
    }

    match opts {
        [] => Ok(()),
        [dangling, ..] => Err(format!("option {dangling:?} has no value")),
    }
}

/// Split on whitespace, keeping double-quoted sections together.
fn tokenize(line: &str) -> Option<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut started = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                started = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if started {
                    tokens.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            c => {
                current.push(c);
                started = true;
            }
        }
    }

    if in_quotes {
        return None;
    }
    if started {
        tokens.push(current);
    }
    Some(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let table = RouteTable::parse(
            "# edge routes\n\
             route add web example.com/ http://10.0.0.1:8080/\n\
             \n\
             route add api /api http://10.0.0.2:9000/ weight 0.5 tags \"blue, canary\"\n",
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        let routes: Vec<_> = table.iter().collect();
        assert_eq!(routes[0].service, "web");
        assert_eq!(routes[0].src, "example.com/");
        assert_eq!(routes[0].weight, None);
        assert_eq!(routes[1].weight, Some(0.5));
        assert_eq!(routes[1].tags, ["blue", "canary"]);
    }

    #[test]
    fn test_parse_del() {
        let table = RouteTable::parse(
            "route add a / http://1.1.1.1/\n\
             route add a /x http://1.1.1.2/\n\
             route add b / http://2.2.2.2/\n\
             route del a /x\n",
        )
        .unwrap();
        let services: Vec<_> = table.iter().map(|r| (r.service.as_str(), r.src.as_str())).collect();
        assert_eq!(services, [("a", "/"), ("b", "/")]);

        let table = RouteTable::parse("route add a / http://1.1.1.1/\nroute del a\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let err = RouteTable::parse("route add a / http://1/\n\nroute move a\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.to_string(), "line 3: unknown command \"move\"");
    }

    #[test]
    fn test_rejects_bad_input() {
        for text in [
            "hello",
            "route add a / 10.0.0.1:80",
            "route add a / http://x/ weight 2",
            "route add a / http://x/ weight",
            "route add a / http://x/ color red",
            "route add a / http://x/ tags \"unterminated",
            "route del",
        ] {
            assert!(RouteTable::parse(text).is_err(), "{text:?} should fail");
        }
    }

    #[test]
    fn test_serializes_as_array() {
        let table = RouteTable::parse("route add web / http://10.0.0.1/").unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "service": "web", "src": "/", "dst": "http://10.0.0.1/" }])
        );
    }
}
