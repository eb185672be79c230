//! Calculation period entity.

use serde::Serialize;

use crate::engine::period::to_elapsed_years;

/// Duration over which interest compounds, split into calendar-free units.
///
/// Conversion to elapsed time uses the fixed convention described in
/// [`crate::engine::period`], never the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Period {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl Period {
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Returns true if every component is zero.
    pub fn is_empty(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Elapsed time in years.
    pub fn elapsed_years(&self) -> f64 {
        to_elapsed_years(self.years, self.months, self.days)
    }
}
