//! Calculation orchestration service.

use crate::domain::entities::{CalculationResult, NormalizedInput};
use crate::engine::{self, ValidationError};

/// Raw field values as entered by the user.
///
/// Blank strings stand for fields that were left empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCalculationInput<'a> {
    pub principal: &'a str,
    pub rate: &'a str,
    pub years: &'a str,
    pub months: &'a str,
    pub days: &'a str,
}

/// A completed calculation together with the values it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub input: NormalizedInput,
    pub elapsed_years: f64,
    pub result: CalculationResult,
}

/// Service running the normalize, convert, compute pipeline.
///
/// Stateless and cheap to clone. Front ends that enforce a range policy call
/// [`Self::normalize`] and [`Self::evaluate`] separately and check the period
/// in between.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    /// Parses and validates raw field values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNumber`] if the principal or rate are not
    /// numbers and [`ValidationError::NoPeriod`] if no period component is set.
    pub fn normalize(&self, raw: &RawCalculationInput<'_>) -> Result<NormalizedInput, ValidationError> {
        engine::normalize(raw.principal, raw.rate, raw.years, raw.months, raw.days).inspect_err(
            |err| {
                tracing::warn!(
                    principal = raw.principal,
                    rate = raw.rate,
                    years = raw.years,
                    months = raw.months,
                    days = raw.days,
                    "Rejected calculator input: {}",
                    err
                );
            },
        )
    }

    /// Computes interest for already normalized input.
    pub fn evaluate(&self, input: NormalizedInput) -> Calculation {
        let elapsed_years = input.period.elapsed_years();
        let result = engine::compute(
            input.principal.value(),
            input.rate.as_fraction(),
            elapsed_years,
        );

        tracing::debug!(
            principal = input.principal.value(),
            rate_percent = input.rate.percent(),
            elapsed_years,
            final_amount = result.final_amount.value(),
            "Computed compound interest"
        );

        Calculation {
            input,
            elapsed_years,
            result,
        }
    }

    /// Normalizes and evaluates in one step.
    ///
    /// # Errors
    ///
    /// See [`Self::normalize`].
    pub fn calculate(&self, raw: &RawCalculationInput<'_>) -> Result<Calculation, ValidationError> {
        let input = self.normalize(raw)?;
        Ok(self.evaluate(input))
    }
}
