//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Every variable is optional.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IP from `X-Forwarded-For` / `X-Real-IP` (default: `false`)
//! - `RATE_LIMIT_PERIOD_SECONDS` - Seconds to replenish one request slot (default: 2)
//! - `RATE_LIMIT_BURST` - Requests allowed in a burst per client IP (default: 100)
//! - `MAX_PERIOD_YEARS` - Largest accepted years value (default: 100)
//! - `MAX_PERIOD_MONTHS` - Largest accepted months value (default: 12)
//! - `MAX_PERIOD_DAYS` - Largest accepted days value (default: 365)

use anyhow::Result;
use std::env;
use std::str::FromStr;

use crate::api::middleware::rate_limit::RateLimitSettings;
use crate::utils::period_bounds::PeriodBounds;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub rate_limit_period_seconds: u64,
    pub rate_limit_burst: u32,
    /// Upper limits applied to period fields before calculating.
    pub period_bounds: PeriodBounds,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = PeriodBounds::default();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            rate_limit_period_seconds: parse_or("RATE_LIMIT_PERIOD_SECONDS", 2),
            rate_limit_burst: parse_or("RATE_LIMIT_BURST", 100),
            period_bounds: PeriodBounds {
                max_years: parse_or("MAX_PERIOD_YEARS", defaults.max_years),
                max_months: parse_or("MAX_PERIOD_MONTHS", defaults.max_months),
                max_days: parse_or("MAX_PERIOD_DAYS", defaults.max_days),
            },
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - a rate limit setting is zero
    /// - a period bound is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.rate_limit_period_seconds == 0 {
            anyhow::bail!("RATE_LIMIT_PERIOD_SECONDS must be greater than 0");
        }

        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
        }

        let bounds = &self.period_bounds;
        if bounds.max_years == 0 || bounds.max_months == 0 || bounds.max_days == 0 {
            anyhow::bail!(
                "MAX_PERIOD_YEARS, MAX_PERIOD_MONTHS and MAX_PERIOD_DAYS must be greater than 0, got {}/{}/{}",
                bounds.max_years,
                bounds.max_months,
                bounds.max_days
            );
        }

        Ok(())
    }

    /// Rate limiter settings derived from this configuration.
    pub fn rate_limit(&self) -> RateLimitSettings {
        RateLimitSettings {
            period_seconds: self.rate_limit_period_seconds,
            burst: self.rate_limit_burst,
            behind_proxy: self.behind_proxy,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Rate limit: 1 request per {}s, burst {}{}",
            self.rate_limit_period_seconds,
            self.rate_limit_burst,
            if self.behind_proxy { " (behind proxy)" } else { "" }
        );
        tracing::info!(
            "  Period bounds: {} years, {} months, {} days",
            self.period_bounds.max_years,
            self.period_bounds.max_months,
            self.period_bounds.max_days
        );
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
