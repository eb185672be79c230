//! Parsing and cleansing of raw calculator fields.
//!
//! # Rules
//!
//! 1. **Principal**: every character other than ASCII digits and `.` is
//!    stripped before parsing, so `"$ 1,500,000"` reads as `1500000`
//! 2. **Rate**: a percentage; surrounding whitespace and one trailing `%` are
//!    accepted, and values below -100 % are rejected
//! 3. **Period**: each component is read as its leading run of digits, so
//!    `"1.5"` is one and `"3 meses"` is three; blank or unparseable
//!    components count as zero, but only when at least one component is
//!    explicitly greater than zero
//!
//! Number checks run before the period check, so input that is wrong on
//! both counts reports [`ValidationError::InvalidNumber`].

use crate::domain::entities::{MonetaryAmount, NormalizedInput, Period, RatePercent};
use crate::engine::error::{NumericField, ValidationError};

/// Lowest accepted rate. Below this `1 + rate` is negative and has no real
/// fractional power.
const MIN_RATE_PERCENT: f64 = -100.0;

/// Normalizes raw field values into calculator input.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidNumber`] if the principal or rate cannot be
/// parsed as a finite number.
///
/// Returns [`ValidationError::NoPeriod`] if no period component is greater than zero.
///
/// # Examples
///
/// ```
/// use compound_interest::engine::{normalize, ValidationError};
///
/// let input = normalize("$ 1,000,000", "10", "1", "", "").unwrap();
/// assert_eq!(input.principal.value(), 1_000_000.0);
/// assert_eq!(input.rate.as_fraction(), 0.1);
///
/// assert_eq!(
///     normalize("1000", "5", "0", "0", "0").unwrap_err(),
///     ValidationError::NoPeriod
/// );
/// ```
pub fn normalize(
    raw_principal: &str,
    raw_rate: &str,
    raw_years: &str,
    raw_months: &str,
    raw_days: &str,
) -> Result<NormalizedInput, ValidationError> {
    let principal = parse_principal(raw_principal)?;
    let rate = parse_rate(raw_rate)?;
    let period = resolve_period([
        parse_component(raw_years),
        parse_component(raw_months),
        parse_component(raw_days),
    ])?;

    Ok(NormalizedInput {
        principal: MonetaryAmount::new(principal),
        rate: RatePercent::new(rate),
        period,
    })
}

/// Removes currency decoration, keeping only digits and decimal points.
pub fn clean_currency_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

fn parse_principal(raw: &str) -> Result<f64, ValidationError> {
    clean_currency_input(raw)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(ValidationError::InvalidNumber(NumericField::Principal))
}

fn parse_rate(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= MIN_RATE_PERCENT)
        .ok_or(ValidationError::InvalidNumber(NumericField::Rate))
}

/// Reads the leading integer of a period field, ignoring anything after it.
///
/// Signed, empty and digit-less values yield `None`.
fn parse_component(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..end].parse::<u32>().ok()
}

/// Applies the zero-fill rule to parsed period components.
fn resolve_period(components: [Option<u32>; 3]) -> Result<Period, ValidationError> {
    let [years, months, days] = components.map(|component| component.unwrap_or(0));
    let period = Period::new(years, months, days);

    // Zero-filled components only stand if some explicit component is positive.
    if period.is_empty() {
        return Err(ValidationError::NoPeriod);
    }

    Ok(period)
}
