//! Helpers shared by the HTTP API and the terminal calculator.
//!
//! - [`currency_format`] - `es-CO` currency formatting and result messages
//! - [`numeric_input`] - Keystroke filter for numeric fields
//! - [`period_bounds`] - Configurable range policy for period fields

pub mod currency_format;
pub mod numeric_input;
pub mod period_bounds;
