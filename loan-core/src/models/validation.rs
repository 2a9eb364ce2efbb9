//! Validation outcome types shared by every check in the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::display;

/// The form fields the engine can attach an outcome or instruction to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    LoanAmount,
    TermMonths,
    InterestRate,
    AnnualIncome,
    MonthlyDebtPayments,
    /// The supporting-document upload widget.
    Document,
}

impl FormField {
    /// The DOM id the host form renders this field under.
    pub fn dom_id(&self) -> &'static str {
        match self {
            Self::LoanAmount => "id_loan_amount",
            Self::TermMonths => "id_loan_term_months",
            Self::InterestRate => "id_interest_rate",
            Self::AnnualIncome => "id_annual_income",
            Self::MonthlyDebtPayments => "id_monthly_debt_payments",
            Self::Document => "id_document",
        }
    }
}

/// A single rule violation. The variants carry the configured bound they were
/// checked against so the rendered message always matches the active rules.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Minimum loan amount is {}", display::usd(*.minimum))]
    BelowMinimumAmount { minimum: Decimal },

    #[error("Maximum loan amount is {}", display::usd(*.maximum))]
    AboveMaximumAmount { maximum: Decimal },

    #[error("File size must be less than {}MB", *.max_size_bytes / (1024 * 1024))]
    FileTooLarge { max_size_bytes: u64 },

    #[error("Only PDF, JPG, and PNG files are allowed")]
    FileTypeNotAllowed,
}

/// Outcome of validating one field. Ephemeral; one per validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub field: FormField,
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    pub fn valid(field: FormField) -> Self {
        Self { field, error: None }
    }

    pub fn invalid(
        field: FormField,
        error: ValidationError,
    ) -> Self {
        Self {
            field,
            error: Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Human-readable message, present iff the result is invalid.
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn below_minimum_message_carries_grouped_bound() {
        let error = ValidationError::BelowMinimumAmount {
            minimum: dec!(1000),
        };

        assert_eq!(error.to_string(), "Minimum loan amount is $1,000");
    }

    #[test]
    fn above_maximum_message_carries_grouped_bound() {
        let error = ValidationError::AboveMaximumAmount {
            maximum: dec!(1000000),
        };

        assert_eq!(error.to_string(), "Maximum loan amount is $1,000,000");
    }

    #[test]
    fn file_too_large_message_states_limit_in_megabytes() {
        let error = ValidationError::FileTooLarge {
            max_size_bytes: 10 * 1024 * 1024,
        };

        assert_eq!(error.to_string(), "File size must be less than 10MB");
    }

    #[test]
    fn valid_result_has_no_message() {
        let result = ValidationResult::valid(FormField::LoanAmount);

        assert!(result.is_valid());
        assert_eq!(result.message(), None);
    }

    #[test]
    fn invalid_result_exposes_message() {
        let result = ValidationResult::invalid(FormField::Document, ValidationError::FileTypeNotAllowed);

        assert!(!result.is_valid());
        assert_eq!(
            result.message().as_deref(),
            Some("Only PDF, JPG, and PNG files are allowed")
        );
    }
}
