//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the Leptos SSR app, its static bundle under `/pkg`, and a
//! health probe into one Axum router. Identity configuration is provided to
//! every render as Leptos context and embedded in the HTML shell.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use genesis_client::app::{App, shell};
use genesis_client::net::config::IdentityConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn app(options: LeptosOptions, identity: IdentityConfig) -> Router {
    let routes = generate_route_list(App);
    let site_root_path = PathBuf::from(options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &options,
            routes,
            {
                let identity = identity.clone();
                move || provide_context(identity.clone())
            },
            {
                let opts = options.clone();
                move || shell(opts.clone(), identity.clone())
            },
        )
        .with_state(options);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
