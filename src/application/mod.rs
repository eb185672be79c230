//! Application layer services.
//!
//! Services wrap the pure [`crate::engine`] functions with logging and give
//! the HTTP handlers and the CLI a single entry point.
//!
//! # Available Services
//!
//! - [`services::calculator_service::CalculatorService`] - Normalize, convert and compute

pub mod services;
