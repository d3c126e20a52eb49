//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`, `/register`, `/login` - public pages
//! - `/dashboard`, `/add`, `/delete/{id}`, `/update/{id}`, `/logout`
//!   - gated pages (session cookie required)
//! - `GET /health` - liveness and database check (public)
//! - `/static/*` - stylesheet assets
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Session auth** - cookie session on gated routes, redirecting to
//!   `/login` when absent
//! - **Path normalization** - trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::handlers::health_handler;
use crate::web::middleware::{tracing, web_auth};
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = web::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        web_auth::layer,
    ));

    let router = Router::new()
        .merge(web::routes::public_routes())
        .merge(protected)
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
