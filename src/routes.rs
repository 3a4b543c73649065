//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`           - Health check: DB, view queue (public)
//! - `/api/*`                 - JSON API (reads public, writes need a session)
//! - `/`, `/startup/*`, ...   - Web pages (submission needs a session)
//! - `/static/*`              - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on submissions and sign-in
//! - **Authentication** - Signed session cookie (401 for API, redirect for pages)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Rate limiting keys on the peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::submit_layer());

    let api_router = Router::new()
        .merge(api::routes::public_routes())
        .merge(api_protected);

    let web_submit = web::routes::submit_routes().layer(rate_limit::submit_layer());

    let web_protected = web::routes::protected_routes()
        .merge(web_submit)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ));

    let web_session = web::routes::session_routes().layer(rate_limit::layer());

    let web_router = Router::new()
        .merge(web_protected)
        .merge(web_session)
        .merge(web::routes::public_routes());

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
