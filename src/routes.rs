//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`         - Health check with engine self-test (public)
//! - `POST /api/calculate`  - Compound interest calculation (rate limited)
//! - anything else          - JSON `404 Not Found`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::rate_limit::{self, RateLimitSettings};
use crate::api::middleware::tracing;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - token bucket settings for `/api`; when `behind_proxy` is set
///   the client IP is read from forwarding headers instead of the peer socket
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn app_router(state: AppState, rate_limit: RateLimitSettings) -> Result<NormalizePath<Router>> {
    let api_router = rate_limit::apply(api::routes::calculator_routes(), rate_limit)?;

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
