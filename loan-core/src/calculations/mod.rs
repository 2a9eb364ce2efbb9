pub mod common;
mod debt_to_income;
mod payment;

pub use debt_to_income::{DebtToIncome, DtiBand, debt_to_income_ratio};
pub use payment::{PaymentEstimate, monthly_payment};
