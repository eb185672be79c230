//! Compound interest with annual compounding.

use crate::domain::entities::{CalculationResult, MonetaryAmount};

/// Applies annual compounding to `principal` over `elapsed_years`.
///
/// `rate_per_year` is a decimal fraction (`0.1` for 10 %). Negative rates are
/// accepted and produce depreciation. No rounding is applied.
///
/// ```text
/// final_amount    = principal * (1 + rate_per_year) ^ elapsed_years
/// interest_earned = final_amount - principal
/// ```
///
/// # Examples
///
/// ```
/// use compound_interest::engine::compute;
///
/// let result = compute(1_000_000.0, 0.10, 1.0);
/// assert!((result.final_amount.value() - 1_100_000.0).abs() < 1e-6);
/// assert!((result.interest_earned.value() - 100_000.0).abs() < 1e-6);
/// ```
pub fn compute(principal: f64, rate_per_year: f64, elapsed_years: f64) -> CalculationResult {
    // 0 * inf is NaN when the growth factor overflows.
    if principal == 0.0 {
        return CalculationResult {
            interest_earned: MonetaryAmount::new(0.0),
            final_amount: MonetaryAmount::new(0.0),
        };
    }

    let final_amount = principal * (1.0 + rate_per_year).powf(elapsed_years);
    let interest_earned = final_amount - principal;

    CalculationResult {
        interest_earned: MonetaryAmount::new(interest_earned),
        final_amount: MonetaryAmount::new(final_amount),
    }
}
