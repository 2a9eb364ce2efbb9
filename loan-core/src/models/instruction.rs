//! Declarative UI instructions.
//!
//! The rule engine never touches presentation APIs. Every operation returns a
//! list of [`UiInstruction`] values describing what the host layer should
//! render; the host owns the DOM, the CSS classes, and the timers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::DtiBand;
use crate::models::FormField;

/// Severity of a transient alert, matching the host's alert styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Success,
    Info,
    Warning,
    Danger,
}

impl AlertSeverity {
    /// The Bootstrap contextual class suffix the host form uses.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// One rendering step for the host UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiInstruction {
    /// Mark a field invalid and show `message` next to it.
    MarkFieldInvalid { field: FormField, message: String },

    /// Remove any error marking from a field.
    ClearFieldError { field: FormField },

    /// Show the monthly payment estimate (already rounded for display).
    ShowPaymentEstimate { monthly_payment: Decimal },

    /// Hide the payment estimate container.
    HidePaymentEstimate,

    /// Show the debt-to-income ratio with its band styling.
    ShowDebtToIncome { ratio_percent: Decimal, band: DtiBand },

    /// Hide the ratio container.
    HideDebtToIncome,

    /// Announce the chosen file on the upload area.
    ShowFileChosen { file_name: String },

    /// Set the upload progress bar, `percent` in [0, 100].
    SetUploadProgress { percent: Decimal },

    /// Replace the progress caption with the completion message.
    ShowUploadComplete,

    /// Show a transient alert that auto-dismisses after `auto_dismiss_ms`.
    ShowAlert {
        severity: AlertSeverity,
        message: String,
        auto_dismiss_ms: u64,
    },

    /// Arm the upload tick timer at the given cadence.
    ///
    /// Paired with [`UiInstruction::StopTicking`]; the engine guarantees a
    /// stop is emitted when the session completes or is superseded, so the
    /// host never leaks a timer.
    StartTicking { interval_ms: u64 },

    /// Disarm the upload tick timer.
    StopTicking,
}
