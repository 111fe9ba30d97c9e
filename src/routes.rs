//! Top-level router configuration combining page, JSON and static routes.
//!
//! # Route Structure
//!
//! - `/`, `/start-task`, `/metadata`, `/glossary`, `/demonstration`, `/about`
//!   - Dashboard pages (rate limited)
//! - `GET /navigate?page=<label>` - Sidebar page select (rate limited)
//! - `GET /health`     - Active collaborator adapters
//! - `/static/*`       - Stylesheet
//! - anything else     - JSON `404 Not Found`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the pages
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// The rate limiter keys on the peer address, so the result must be served
/// with connect info (see [`crate::server::run`]).
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let pages = web::routes::page_routes().layer(rate_limit::layer());

    let router = Router::new()
        .merge(pages)
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
