//! Display formatting for amounts and ratios.
//!
//! The engine's instructions carry raw [`Decimal`] values; these helpers
//! produce the strings the form actually shows (and that validation messages
//! embed), with US-style thousands grouping.

use rust_decimal::Decimal;

/// Formats a dollar amount with thousands separators, e.g. `$1,798.65`.
///
/// The fractional part is printed exactly as scaled in the input: a whole
/// `Decimal` renders without cents (`$1,000`), a two-place one with them.
pub fn usd(value: Decimal) -> String {
    let text = value.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text, None),
    };

    let grouped = group_thousands(&int_part);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}${grouped}.{frac}"),
        None => format!("{sign}${grouped}"),
    }
}

/// Formats a ratio percentage for display, e.g. `40.0%`.
pub fn percent(value: Decimal) -> String {
    format!("{value}%")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn usd_groups_thousands() {
        assert_eq!(usd(dec!(1000)), "$1,000");
        assert_eq!(usd(dec!(1000000)), "$1,000,000");
        assert_eq!(usd(dec!(123)), "$123");
    }

    #[test]
    fn usd_keeps_fractional_part_as_scaled() {
        assert_eq!(usd(dec!(1798.65)), "$1,798.65");
        assert_eq!(usd(dec!(555.56)), "$555.56");
    }

    #[test]
    fn usd_handles_negative_amounts() {
        assert_eq!(usd(dec!(-1234.50)), "-$1,234.50");
    }

    #[test]
    fn percent_appends_symbol() {
        assert_eq!(percent(dec!(40.0)), "40.0%");
        assert_eq!(percent(dec!(20.0)), "20.0%");
    }
}
