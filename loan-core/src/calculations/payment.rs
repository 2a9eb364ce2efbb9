//! Amortized monthly payment estimation.
//!
//! Implements the standard fixed-payment amortization formula
//!
//! ```text
//! payment = amount * r * (1 + r)^n / ((1 + r)^n - 1)
//! ```
//!
//! where `r` is the monthly rate (`annual_rate_percent / 100 / 12`) and `n`
//! the term in months. A zero-rate loan makes the denominator vanish, so it
//! is handled as the straight division `amount / n` instead of letting a
//! non-finite value escape.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use loan_core::calculations::monthly_payment;
//!
//! let estimate = monthly_payment(dec!(300000), 360, dec!(6)).unwrap();
//! assert_eq!(estimate.monthly_payment, dec!(1798.65));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_currency;

/// A computed monthly payment, rounded to cents for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEstimate {
    pub monthly_payment: Decimal,
}

/// Estimates the fixed monthly payment for a loan.
///
/// Returns `None` when the inputs cannot yet produce an estimate: the
/// amount or term is not strictly positive, or the rate is negative.
/// A rate of exactly zero is a valid interest-free loan.
///
/// Pure: identical inputs always yield the identical estimate.
pub fn monthly_payment(
    amount: Decimal,
    term_months: u32,
    annual_rate_percent: Decimal,
) -> Option<PaymentEstimate> {
    if amount <= Decimal::ZERO || term_months == 0 || annual_rate_percent < Decimal::ZERO {
        tracing::debug!(
            %amount,
            term_months,
            %annual_rate_percent,
            "payment estimate not yet computable"
        );
        return None;
    }

    let term = Decimal::from(term_months);
    if annual_rate_percent.is_zero() {
        // Interest-free: principal spread evenly over the term.
        return Some(PaymentEstimate {
            monthly_payment: round_currency(amount / term),
        });
    }

    let monthly_rate = annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(12);
    let compound = compound_factor(monthly_rate, term_months);
    let payment = amount * monthly_rate * compound / (compound - Decimal::ONE);

    Some(PaymentEstimate {
        monthly_payment: round_currency(payment),
    })
}

/// Computes `(1 + rate)^term` at full `Decimal` precision.
///
/// Square-and-multiply keeps the multiplication count logarithmic in the
/// term, which matters little for a 360-month loan but costs nothing.
fn compound_factor(
    monthly_rate: Decimal,
    term_months: u32,
) -> Decimal {
    let mut base = Decimal::ONE + monthly_rate;
    let mut exponent = term_months;
    let mut result = Decimal::ONE;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result *= base;
        }
        exponent >>= 1;
        if exponent > 0 {
            base *= base;
        }
    }
    result
}
