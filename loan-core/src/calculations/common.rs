//! Shared rounding helpers for the financial calculations.
//!
//! Internal arithmetic always runs at full [`Decimal`] precision; these are
//! applied once, at the display boundary.

use rust_decimal::Decimal;

/// Rounds a dollar amount to two decimal places, half-up (midpoints away
/// from zero), per standard financial rounding.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a ratio percentage to one decimal place, half-up.
pub fn round_ratio(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
