//! Keystroke-level filter for numeric form fields.

use regex::Regex;
use std::sync::LazyLock;

/// Optional leading minus, digits, at most one decimal point.
static NUMERIC_INPUT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d*\.?\d*$").unwrap());

/// Returns true if `value` is an acceptable partial entry for a numeric field.
///
/// Intermediate states such as `""`, `"-"` and `"12."` are accepted so that a
/// user can keep typing. Whether the final value parses is decided by
/// [`crate::engine::normalize`].
pub fn is_valid_numeric_input(value: &str) -> bool {
    NUMERIC_INPUT_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_numbers() {
        assert!(is_valid_numeric_input("1000"));
        assert!(is_valid_numeric_input("12.5"));
        assert!(is_valid_numeric_input("-3"));
        assert!(is_valid_numeric_input(".5"));
    }

    #[test]
    fn test_accepts_partial_entries() {
        assert!(is_valid_numeric_input(""));
        assert!(is_valid_numeric_input("-"));
        assert!(is_valid_numeric_input("12."));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(!is_valid_numeric_input("abc"));
        assert!(!is_valid_numeric_input("1.2.3"));
        assert!(!is_valid_numeric_input("$100"));
        assert!(!is_valid_numeric_input("1,000"));
        assert!(!is_valid_numeric_input("--1"));
        assert!(!is_valid_numeric_input("1-"));
    }
}
