//! Core value types of the calculator.
//!
//! # Entity Types
//!
//! - [`MonetaryAmount`] - An amount in the fixed display currency
//! - [`RatePercent`] - An annual rate expressed as a percentage
//! - [`Period`] - A years/months/days triple
//! - [`NormalizedInput`] - Parsed field values
//! - [`CalculationResult`] - Interest earned and final amount
//!
//! None of these outlive a single calculation; nothing is persisted.

pub mod calculation;
pub mod money;
pub mod period;

pub use calculation::{CalculationResult, NormalizedInput};
pub use money::{MonetaryAmount, RatePercent};
pub use period::Period;
