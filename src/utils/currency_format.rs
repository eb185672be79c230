//! Display formatting for monetary amounts in the `es-CO` locale.
//!
//! Amounts are always shown in Colombian pesos with two decimals, `.` as the
//! thousands separator and `,` as the decimal separator.

/// Currency code appended to result messages.
pub const CURRENCY_CODE: &str = "COP";

/// Formats an amount as `es-CO` currency.
///
/// Non-finite values render as `"$ -"`.
///
/// # Examples
///
/// ```
/// use compound_interest::utils::currency_format::format_cop;
///
/// assert_eq!(format_cop(100000.0), "$ 100.000,00");
/// assert_eq!(format_cop(-1234.5), "-$ 1.234,50");
/// ```
pub fn format_cop(amount: f64) -> String {
    if !amount.is_finite() {
        return "$ -".to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // A value like -0.001 rounds to zero and should not carry a sign.
    let sign = if amount < 0.0 && fixed != "0.00" {
        "-"
    } else {
        ""
    };

    format!("{sign}$ {},{fraction}", group_thousands(integer))
}

/// Builds the sentence shown next to a successful calculation.
pub fn result_message(interest_earned: f64) -> String {
    format!(
        "El interés ganado será: {} {CURRENCY_CODE}",
        format_cop(interest_earned)
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    grouped
}
