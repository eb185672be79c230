//! Monetary amount and annual rate value types.

use serde::Serialize;
use std::fmt;

/// An amount of money in the single display currency (COP).
///
/// Principals are non-negative. Interest may be negative when the rate is,
/// so the type itself does not enforce a sign.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct MonetaryAmount(f64);

impl MonetaryAmount {
    /// Wraps a raw value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// An annual interest rate expressed as a percentage (`12.5` means 12.5 %).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct RatePercent(f64);

impl RatePercent {
    pub fn new(percent: f64) -> Self {
        Self(percent)
    }

    /// Returns the percentage as entered.
    pub fn percent(self) -> f64 {
        self.0
    }

    /// Returns the rate as a decimal fraction (`12.5` becomes `0.125`).
    pub fn as_fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl fmt::Display for RatePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_as_fraction() {
        assert_eq!(RatePercent::new(10.0).as_fraction(), 0.1);
        assert_eq!(RatePercent::new(0.0).as_fraction(), 0.0);
        assert_eq!(RatePercent::new(-5.0).as_fraction(), -0.05);
    }

    #[test]
    fn test_monetary_amount_display() {
        assert_eq!(MonetaryAmount::new(1100000.0).to_string(), "1100000.00");
        assert_eq!(MonetaryAmount::new(0.005).to_string(), "0.01");
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_value(MonetaryAmount::new(12.5)).unwrap();
        assert_eq!(json, serde_json::json!(12.5));
    }
}
