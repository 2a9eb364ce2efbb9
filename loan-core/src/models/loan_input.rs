//! The numeric snapshot of one loan application form.
//!
//! Fields are filled in as the operator types; each is independently absent
//! until the matching field holds a parseable value. The snapshot lives for
//! one form render and is never persisted by this layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current values of the five numeric form fields.
///
/// Derived metrics (payment estimate, debt-to-income ratio) are always
/// recomputed from the snapshot at hand; nothing here caches a result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoanInput {
    /// Requested principal, in dollars.
    pub amount: Option<Decimal>,

    /// Repayment term, in whole months.
    pub term_months: Option<u32>,

    /// Annual interest rate as a percentage (6.5 means 6.5%).
    pub annual_interest_rate_percent: Option<Decimal>,

    /// Gross annual income, in dollars.
    pub annual_income: Option<Decimal>,

    /// Existing monthly debt obligations, in dollars.
    pub monthly_debt_payments: Option<Decimal>,
}

impl LoanInput {
    /// Clear every field, as on a form reset.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
