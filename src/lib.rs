//! # Compound Interest
//!
//! A compound interest calculator: principal, annual rate and a
//! years/months/days period in, interest earned and final amount out.
//!
//! ## Architecture
//!
//! - **Engine** ([`engine`]) - Input normalization, period conversion and compounding
//! - **Domain Layer** ([`domain`]) - Value types shared by every layer
//! - **Application Layer** ([`application`]) - Calculation service with logging
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//! - **Utilities** ([`utils`]) - Display formatting, input filters, period bounds
//!
//! Two front ends sit on top: the HTTP server (`src/main.rs`) and the
//! terminal calculator (`src/bin/calc.rs`).
//!
//! ## Conventions
//!
//! - Compounding is annual
//! - A period converts as `years + months/12 + days/365`
//! - Amounts are displayed in COP using the `es-CO` locale
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service
//! cargo run
//!
//! # Calculate from the terminal
//! cargo run --bin calc -- compute --principal 1000000 --rate 10 --years 1
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod engine;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Calculation, CalculatorService, RawCalculationInput};
    pub use crate::domain::entities::{
        CalculationResult, MonetaryAmount, NormalizedInput, Period, RatePercent,
    };
    pub use crate::engine::{ValidationError, compute, normalize, to_elapsed_years};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::period_bounds::PeriodBounds;
}
