//! Debt-to-income ratio calculation and banding.
//!
//! DTI is the operator's monthly debt obligations as a percentage of monthly
//! income (`annual_income / 12`). The ratio is classified into bands used by
//! lenders as a quick affordability signal; the thresholds come from
//! [`DtiBands`](crate::config::DtiBands) rather than being baked in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_ratio;
use crate::config::DtiBands;

/// Affordability band for a debt-to-income ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DtiBand {
    /// At or below the lower threshold (28% by default).
    Good,
    /// Above the lower threshold, at or below the upper (36% by default).
    Caution,
    /// Above the upper threshold.
    High,
}

impl DtiBand {
    /// The contextual text class the host form styles the ratio with.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Good => "text-success",
            Self::Caution => "text-warning",
            Self::High => "text-danger",
        }
    }
}

/// A computed debt-to-income ratio, rounded to one decimal for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtToIncome {
    pub ratio_percent: Decimal,
    pub band: DtiBand,
}

/// Computes the debt-to-income ratio.
///
/// Returns `None` unless both inputs are strictly positive. The band is
/// decided on the full-precision ratio before display rounding, so a value
/// that rounds onto a threshold still lands in the band it truly belongs to.
///
/// Pure: identical inputs always yield the identical result.
pub fn debt_to_income_ratio(
    annual_income: Decimal,
    monthly_debt_payments: Decimal,
    bands: &DtiBands,
) -> Option<DebtToIncome> {
    if annual_income <= Decimal::ZERO || monthly_debt_payments <= Decimal::ZERO {
        tracing::debug!(
            %annual_income,
            %monthly_debt_payments,
            "debt-to-income ratio not yet computable"
        );
        return None;
    }

    let monthly_income = annual_income / Decimal::from(12);
    let ratio = monthly_debt_payments / monthly_income * Decimal::ONE_HUNDRED;

    let band = if ratio <= bands.good_max {
        DtiBand::Good
    } else if ratio <= bands.caution_max {
        DtiBand::Caution
    } else {
        DtiBand::High
    };

    Some(DebtToIncome {
        ratio_percent: round_ratio(ratio),
        band,
    })
}
