//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the health endpoint and stitches it with Leptos SSR
//! rendering under a single Axum router. Every Leptos route gets the shared
//! `ProductCatalog` as context; compiled assets are served from `/pkg`, and
//! unknown paths fall through to the Leptos not-found view. Trailing slashes
//! are trimmed before routing, so `/products/2/` resolves like `/products/2`
//! instead of landing in the fallback.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::extract::Request;
use axum::routing::{IntoMakeService, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower::Layer;
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router: health check, Leptos pages, static assets.
pub fn app(state: AppState) -> Router {
    let routes = generate_route_list(client::app::App);

    let site_root = PathBuf::from(&*state.leptos_options.site_root);
    let pkg_dir = site_root.join(&*state.leptos_options.site_pkg_dir);

    let catalog = state.catalog.clone();
    let shell_options = state.leptos_options.clone();

    Router::new()
        .route("/healthz", get(health::healthz))
        .leptos_routes_with_context(
            &state,
            routes,
            move || provide_context(catalog.clone()),
            move || client::app::shell(shell_options.clone()),
        )
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback(file_and_error_handler::<AppState, _>(client::app::shell))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Service handed to `axum::serve`: [`app`] behind trailing-slash trimming.
///
/// Path normalization has to wrap the router; a `Router::layer` runs after
/// the route has already been picked.
pub fn make_service(state: AppState) -> IntoMakeService<NormalizePath<Router>> {
    let app = NormalizePathLayer::trim_trailing_slash().layer(app(state));
    axum::ServiceExt::<Request>::into_make_service(app)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
