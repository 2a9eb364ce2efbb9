//! Raw form-field parsing.
//!
//! Field values arrive as the strings the operator typed. Parsing is
//! forgiving about presentation (whitespace, thousands separators, a leading
//! dollar sign) and treats anything unparseable as "no value yet" — the
//! validator decides what absence means, not the parser.

use rust_decimal::Decimal;

/// Normalizes typed input: trims, drops commas, drops any leading `$`.
fn normalize(raw: &str) -> String {
    raw.trim().trim_start_matches('$').replace(',', "")
}

/// Parses a typed dollar or percentage value.
///
/// Returns `None` for empty input, and also for garbage (logged at warn) —
/// a half-typed number should read as absent, not as an error.
pub fn parse_decimal_field(raw: &str) -> Option<Decimal> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().map_or_else(
        |e| {
            tracing::warn!(input = %raw, "unparseable numeric field: {}", e);
            None
        },
        Some,
    )
}

/// Parses a typed loan term in whole months.
///
/// Same absence semantics as [`parse_decimal_field`]; a zero or negative
/// term reads as absent since no loan can have one.
pub fn parse_term_field(raw: &str) -> Option<u32> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return None;
    }
    match normalized.parse::<u32>() {
        Ok(0) => None,
        Ok(months) => Some(months),
        Err(e) => {
            tracing::warn!(input = %raw, "unparseable term field: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // parse_decimal_field tests
    // =========================================================================

    #[test]
    fn parses_plain_number() {
        assert_eq!(parse_decimal_field("250000"), Some(dec!(250000)));
    }

    #[test]
    fn accepts_commas_and_dollar_sign() {
        assert_eq!(parse_decimal_field("$250,000"), Some(dec!(250000)));
        assert_eq!(parse_decimal_field("1,234.56"), Some(dec!(1234.56)));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_decimal_field("  6.5  "), Some(dec!(6.5)));
    }

    #[test]
    fn empty_input_is_absent() {
        assert_eq!(parse_decimal_field(""), None);
        assert_eq!(parse_decimal_field("   "), None);
    }

    #[test]
    fn garbage_is_absent() {
        assert_eq!(parse_decimal_field("abc"), None);
        assert_eq!(parse_decimal_field("12a"), None);
    }

    // =========================================================================
    // parse_term_field tests
    // =========================================================================

    #[test]
    fn parses_whole_months() {
        assert_eq!(parse_term_field("360"), Some(360));
    }

    #[test]
    fn zero_term_is_absent() {
        assert_eq!(parse_term_field("0"), None);
    }

    #[test]
    fn fractional_or_negative_term_is_absent() {
        assert_eq!(parse_term_field("12.5"), None);
        assert_eq!(parse_term_field("-12"), None);
    }

    #[test]
    fn empty_term_is_absent() {
        assert_eq!(parse_term_field(""), None);
    }
}
