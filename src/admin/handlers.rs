use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use serde::Serialize;

use super::{ui, AdminState};
use crate::config::ProxyConfig;
use crate::registry::RouteTable;

#[derive(Debug, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
}

pub async fn get_config(State(state): State<AdminState>) -> Json<ProxyConfig> {
    Json(ProxyConfig::clone(&state.config))
}

pub async fn get_routes(State(state): State<AdminState>) -> Json<RouteTable> {
    Json(state.registry.routes().clone())
}

pub async fn get_version() -> Json<VersionInfo> {
    Json(VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn routes_page(State(state): State<AdminState>) -> Html<String> {
    Html(ui::render_routes(&state.config.ui, state.registry.routes()))
}

pub async fn health() -> &'static str {
    "OK\n"
}

pub async fn root() -> Redirect {
    Redirect::to("/routes")
}
