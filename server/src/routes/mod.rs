//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server holds no application data. It renders the Leptos shell for the
//! app routes, serves the compiled WASM/JS/CSS bundle under `/pkg` and
//! answers `/healthz`. Everything else about ShutterSpot happens in the
//! browser after hydration.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR app plus static assets and the health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section and no `LEPTOS_*` env).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .route("/healthz", get(health::healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(leptos_router
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
