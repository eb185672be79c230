//! Validation failures reported by the input normalizer.

use std::fmt;

/// Numeric input field that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Principal,
    Rate,
}

impl NumericField {
    pub fn as_str(self) -> &'static str {
        match self {
            NumericField::Principal => "principal",
            NumericField::Rate => "rate",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while normalizing raw calculator input.
///
/// Both variants are recoverable: the caller reports them to the user and
/// leaves any previous result untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("The {0} field is not a valid number")]
    InvalidNumber(NumericField),

    #[error("At least one of years, months or days must be greater than zero")]
    NoPeriod,
}
