//! Period conversion under the fractional-year convention.
//!
//! A period of `years`, `months` and `days` is converted to elapsed years as
//!
//! ```text
//! elapsed_years = years + months / 12 + days / 365
//! ```
//!
//! Months are twelfths of a year and days are 1/365 of a year, independently
//! of each other. The day-denominated variant (`(years*365 + months*30 + days) / 365`)
//! is not supported; mixing the two would give different results for the same input.

/// Months in a compounding year.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Days in a compounding year.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Human-readable description of the conversion formula.
pub const CONVENTION: &str = "fractional-year: years + months/12 + days/365";

/// Converts a years/months/days triple into elapsed years.
///
/// No upper bound is applied here; range policy belongs to the caller
/// (see [`crate::utils::period_bounds`]).
pub fn to_elapsed_years(years: u32, months: u32, days: u32) -> f64 {
    f64::from(years) + f64::from(months) / MONTHS_PER_YEAR + f64::from(days) / DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_years() {
        assert_eq!(to_elapsed_years(1, 0, 0), 1.0);
        assert_eq!(to_elapsed_years(30, 0, 0), 30.0);
    }

    #[test]
    fn test_months_are_twelfths() {
        assert_eq!(to_elapsed_years(0, 6, 0), 0.5);
        assert_eq!(to_elapsed_years(0, 12, 0), 1.0);
    }

    #[test]
    fn test_days_are_365ths() {
        assert_eq!(to_elapsed_years(0, 0, 365), 1.0);
        assert!((to_elapsed_years(0, 0, 73) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_mixed_components() {
        let elapsed = to_elapsed_years(2, 3, 146);
        assert!((elapsed - 2.65).abs() < 1e-12);
    }

    #[test]
    fn test_zero_period() {
        assert_eq!(to_elapsed_years(0, 0, 0), 0.0);
    }

    #[test]
    fn test_thirty_days_is_not_a_month() {
        assert_ne!(to_elapsed_years(0, 0, 30), to_elapsed_years(0, 1, 0));
    }

    #[test]
    fn test_no_upper_bound() {
        assert_eq!(to_elapsed_years(1000, 0, 0), 1000.0);
        assert_eq!(to_elapsed_years(0, 24, 0), 2.0);
    }
}
