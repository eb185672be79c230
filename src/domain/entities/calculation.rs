//! Normalized calculation input and its result.

use serde::Serialize;

use super::{MonetaryAmount, Period, RatePercent};

/// Field values after parsing and cleansing, ready for the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedInput {
    pub principal: MonetaryAmount,
    pub rate: RatePercent,
    pub period: Period,
}

/// Outcome of a single compound-interest calculation.
///
/// `final_amount - principal == interest_earned` always holds exactly, since
/// the interest is derived from the final amount rather than computed separately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub interest_earned: MonetaryAmount,
    pub final_amount: MonetaryAmount,
}
