//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the gateway proxy and liveness endpoint, then stitches
//! them with Leptos SSR rendering under a single Axum router. Paths the app
//! does not declare still render through Leptos so the not-found page comes
//! back with a 404 status.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use mantel_client::app::{App, shell};
use mantel_client::state::boot::BootConfig;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::proxy;
use crate::state::AppState;

/// Gateway routes: the API proxy under the configured prefix plus `/healthz`.
pub fn api_routes(state: AppState) -> Router {
    let prefix = state.config.api_prefix.clone();
    Router::new()
        .route(&prefix, any(proxy::forward))
        .route(&format!("{prefix}/{{*rest}}"), any(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: gateway routes + Leptos SSR + static bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section and no `LEPTOS_*` env).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;

    // Compiled WASM/JS/CSS and static images live under the site root.
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pages = page_routes(leptos_options, state.config.boot);

    Ok(api_routes(state)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/assets", ServeDir::new(site_root.join("assets")))
        .merge(pages)
        .layer(TraceLayer::new_for_http()))
}

/// SSR page routes. Paths `App` does not declare render its not-found view.
pub fn page_routes(leptos_options: LeptosOptions, boot: BootConfig) -> Router {
    let routes = generate_route_list(move || view! { <App boot/> });

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), boot)
        })
        .fallback({
            let opts = leptos_options.clone();
            move |req: Request| render_fallback(opts.clone(), boot, req)
        })
        .with_state(leptos_options)
}

/// Render the app for a path with no declared route.
async fn render_fallback(options: LeptosOptions, boot: BootConfig, req: Request) -> Response {
    let handler = leptos_axum::render_app_to_stream_with_context(
        {
            let options = options.clone();
            move || provide_context(options.clone())
        },
        move || shell(options.clone(), boot),
    );
    handler(req).await.into_response()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
