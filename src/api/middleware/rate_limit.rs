//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

/// Token bucket parameters for a group of routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    /// Seconds needed to replenish one request slot.
    pub period_seconds: u64,
    /// Requests a single client may send in a burst.
    pub burst: u32,
    /// Key clients by forwarded headers instead of the socket peer address.
    pub behind_proxy: bool,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            period_seconds: 2,
            burst: 100,
            behind_proxy: false,
        }
    }
}

/// Creates a rate limiter keyed by the socket peer address.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The server
/// must be started with connect info so the peer address is available.
///
/// # Errors
///
/// Returns an error if `period_seconds` or `burst` is zero.
pub fn layer(
    settings: RateLimitSettings,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(settings.period_seconds)
        .burst_size(settings.burst)
        .finish()
        .context("Invalid rate limit settings")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

/// Creates a rate limiter keyed by `X-Forwarded-For`, `X-Real-IP` or `Forwarded`,
/// falling back to the peer address.
///
/// Only use behind a trusted reverse proxy; clients can spoof these headers.
///
/// # Errors
///
/// Returns an error if `period_seconds` or `burst` is zero.
pub fn proxy_layer(
    settings: RateLimitSettings,
) -> Result<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_second(settings.period_seconds)
        .burst_size(settings.burst)
        .finish()
        .context("Invalid rate limit settings")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

/// Wraps `router` with the limiter matching `settings.behind_proxy`.
///
/// # Errors
///
/// See [`layer`].
pub fn apply(router: Router<AppState>, settings: RateLimitSettings) -> Result<Router<AppState>> {
    let router = if settings.behind_proxy {
        router.layer(proxy_layer(settings)?)
    } else {
        router.layer(layer(settings)?)
    };

    Ok(router)
}
