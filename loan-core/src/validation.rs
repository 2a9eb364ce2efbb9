//! Field-level validation rules.
//!
//! Both checks are pure: they read the value and the configured rules and
//! return a [`ValidationResult`]. How (and whether) the outcome is surfaced
//! is the caller's business; nothing here touches the UI.

use rust_decimal::Decimal;

use crate::config::{FileRules, LoanLimits};
use crate::models::{FileSelection, FormField, ValidationError, ValidationResult};

/// Checks a requested loan amount against the configured bounds.
///
/// An absent amount is valid: the operator has not expressed one yet, and
/// whether an empty field blocks submission is decided elsewhere.
pub fn validate_loan_amount(
    amount: Option<Decimal>,
    limits: &LoanLimits,
) -> ValidationResult {
    let Some(amount) = amount else {
        return ValidationResult::valid(FormField::LoanAmount);
    };

    if amount < limits.min_amount {
        ValidationResult::invalid(
            FormField::LoanAmount,
            ValidationError::BelowMinimumAmount {
                minimum: limits.min_amount,
            },
        )
    } else if amount > limits.max_amount {
        ValidationResult::invalid(
            FormField::LoanAmount,
            ValidationError::AboveMaximumAmount {
                maximum: limits.max_amount,
            },
        )
    } else {
        ValidationResult::valid(FormField::LoanAmount)
    }
}

/// Checks a picked file against the configured size and type rules.
///
/// Only the declared MIME type is examined; content sniffing and emptiness
/// checks belong to the server-side document pipeline. Only the upper size
/// bound is enforced, so a zero-byte selection passes.
pub fn validate_file(
    selection: &FileSelection,
    rules: &FileRules,
) -> ValidationResult {
    if selection.size_bytes > rules.max_size_bytes {
        tracing::debug!(
            file = %selection.name,
            size_bytes = selection.size_bytes,
            "file rejected: over size limit"
        );
        return ValidationResult::invalid(
            FormField::Document,
            ValidationError::FileTooLarge {
                max_size_bytes: rules.max_size_bytes,
            },
        );
    }

    if !rules
        .allowed_mime_types
        .iter()
        .any(|allowed| allowed == &selection.mime_type)
    {
        tracing::debug!(
            file = %selection.name,
            mime_type = %selection.mime_type,
            "file rejected: type not allowed"
        );
        return ValidationResult::invalid(FormField::Document, ValidationError::FileTypeNotAllowed);
    }

    ValidationResult::valid(FormField::Document)
}
