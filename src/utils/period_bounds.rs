//! Range policy for period fields.
//!
//! The engine accepts any non-negative period. Front ends that want to keep
//! users within sensible limits check the normalized period against a
//! [`PeriodBounds`] before computing.

use serde::Serialize;

use crate::domain::entities::Period;

/// Errors produced when a period component exceeds its configured maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoundsViolation {
    #[error("Years must not exceed {max}, got {value}")]
    Years { value: u32, max: u32 },

    #[error("Months must not exceed {max}, got {value}")]
    Months { value: u32, max: u32 },

    #[error("Days must not exceed {max}, got {value}")]
    Days { value: u32, max: u32 },
}

impl BoundsViolation {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            BoundsViolation::Years { .. } => "years",
            BoundsViolation::Months { .. } => "months",
            BoundsViolation::Days { .. } => "days",
        }
    }

    /// Configured maximum for the offending field.
    pub fn max(&self) -> u32 {
        match *self {
            BoundsViolation::Years { max, .. }
            | BoundsViolation::Months { max, .. }
            | BoundsViolation::Days { max, .. } => max,
        }
    }

    /// Value that was rejected.
    pub fn value(&self) -> u32 {
        match *self {
            BoundsViolation::Years { value, .. }
            | BoundsViolation::Months { value, .. }
            | BoundsViolation::Days { value, .. } => value,
        }
    }
}

/// Inclusive upper limits for each period component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodBounds {
    pub max_years: u32,
    pub max_months: u32,
    pub max_days: u32,
}

impl Default for PeriodBounds {
    fn default() -> Self {
        Self {
            max_years: 100,
            max_months: 12,
            max_days: 365,
        }
    }
}

impl PeriodBounds {
    /// Checks each component in years, months, days order.
    ///
    /// # Errors
    ///
    /// Returns the first [`BoundsViolation`] found.
    pub fn check(&self, period: &Period) -> Result<(), BoundsViolation> {
        if period.years > self.max_years {
            return Err(BoundsViolation::Years {
                value: period.years,
                max: self.max_years,
            });
        }

        if period.months > self.max_months {
            return Err(BoundsViolation::Months {
                value: period.months,
                max: self.max_months,
            });
        }

        if period.days > self.max_days {
            return Err(BoundsViolation::Days {
                value: period.days,
                max: self.max_days,
            });
        }

        Ok(())
    }
}
