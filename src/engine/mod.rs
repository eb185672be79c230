//! Compound interest engine.
//!
//! The engine is a set of pure, synchronous functions. A calculation runs in
//! three steps:
//!
//! 1. [`normalize`] parses the raw principal, rate and period fields
//! 2. [`to_elapsed_years`] converts the period to elapsed years
//! 3. [`compute`] applies annual compounding
//!
//! # Example
//!
//! ```
//! use compound_interest::engine::{compute, normalize};
//!
//! let input = normalize("1000000", "10", "1", "0", "0").unwrap();
//! let result = compute(
//!     input.principal.value(),
//!     input.rate.as_fraction(),
//!     input.period.elapsed_years(),
//! );
//! assert!((result.interest_earned.value() - 100_000.0).abs() < 1e-6);
//! ```

pub mod calculator;
pub mod error;
pub mod normalizer;
pub mod period;

pub use calculator::compute;
pub use error::{NumericField, ValidationError};
pub use normalizer::normalize;
pub use period::to_elapsed_years;
