//! HTML route page.

use std::fmt::Write;

use crate::config::UiConfig;
use crate::registry::RouteTable;

pub fn render_routes(ui: &UiConfig, routes: &RouteTable) -> String {
    let title = if ui.title.is_empty() { "forwarding-proxy" } else { ui.title.as_str() };

    let mut html = String::new();
    let _ = write!(
        html,
        "<!doctype html>\n<html>\n<head><title>{title} - routes</title></head>\n<body>\n\
         <header class=\"{color}\"><h1>{title}</h1><span>{version}</span></header>\n\
         <table>\n<tr><th>#</th><th>Service</th><th>Source</th><th>Dest</th><th>Weight</th><th>Tags</th></tr>\n",
        title = escape(title),
        color = escape(&ui.color),
        version = env!("CARGO_PKG_VERSION"),
    );

    for (i, route) in routes.iter().enumerate() {
        let weight = route.weight.map(|w| format!("{:.2}%", w * 100.0)).unwrap_or_default();
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            i + 1,
            escape(&route.service),
            escape(&route.src),
            escape(&route.dst),
            weight,
            escape(&route.tags.join(", ")),
        );
    }

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
