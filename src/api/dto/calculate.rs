//! DTOs for the calculation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::{Calculation, RawCalculationInput};
use crate::domain::entities::Period;
use crate::utils::currency_format::{format_cop, result_message};

/// Raw form values to calculate interest for.
///
/// Fields are strings so that decorated input such as `"$ 1,000,000"` reaches
/// the normalizer unchanged. Omitted period fields count as blank.
#[derive(Debug, Deserialize, Validate)]
pub struct CalculateRequest {
    #[validate(length(max = 64))]
    pub principal: String,

    #[validate(length(max = 64))]
    pub rate: String,

    #[validate(length(max = 64))]
    pub years: Option<String>,

    #[validate(length(max = 64))]
    pub months: Option<String>,

    #[validate(length(max = 64))]
    pub days: Option<String>,
}

impl CalculateRequest {
    /// Borrows the request as service input.
    pub fn as_raw(&self) -> RawCalculationInput<'_> {
        RawCalculationInput {
            principal: &self.principal,
            rate: &self.rate,
            years: self.years.as_deref().unwrap_or_default(),
            months: self.months.as_deref().unwrap_or_default(),
            days: self.days.as_deref().unwrap_or_default(),
        }
    }
}

/// Calculation outcome with numeric values and their display form.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub principal: f64,
    pub rate_percent: f64,
    pub period: Period,
    pub elapsed_years: f64,
    pub interest_earned: f64,
    pub final_amount: f64,
    pub formatted: FormattedAmounts,
    pub message: String,
}

/// Amounts rendered in the fixed display locale.
#[derive(Debug, Serialize)]
pub struct FormattedAmounts {
    pub principal: String,
    pub interest_earned: String,
    pub final_amount: String,
}

impl From<&Calculation> for CalculateResponse {
    fn from(calculation: &Calculation) -> Self {
        let principal = calculation.input.principal.value();
        let interest_earned = calculation.result.interest_earned.value();
        let final_amount = calculation.result.final_amount.value();

        Self {
            principal,
            rate_percent: calculation.input.rate.percent(),
            period: calculation.input.period,
            elapsed_years: calculation.elapsed_years,
            interest_earned,
            final_amount,
            formatted: FormattedAmounts {
                principal: format_cop(principal),
                interest_earned: format_cop(interest_earned),
                final_amount: format_cop(final_amount),
            },
            message: result_message(interest_earned),
        }
    }
}
