//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The spinner is a single page. This router server-renders it through
//! Leptos, serves the compiled WASM/JS/CSS bundle under `/pkg`, and exposes a
//! liveness probe. There is no API surface: all game state lives in the
//! browser.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes that exist independently of the Leptos app.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full host: probe routes, Leptos SSR for the page, and `/pkg` assets from
/// `site_root`.
pub fn app(leptos_options: LeptosOptions, site_root: &Path) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
