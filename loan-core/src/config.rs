//! Rule constants for the loan application form.
//!
//! Every bound the engine checks against lives here rather than inline in the
//! checking code, so a deployment can override any of them without touching
//! the rules themselves. All sections and fields are independently optional
//! when deserialized; anything omitted keeps its default.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Complete rule set for one form render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FormRules {
    pub loan: LoanLimits,
    pub file: FileRules,
    pub dti: DtiBands,
    pub timing: TimingRules,
}

/// Acceptable range for the requested loan amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanLimits {
    pub min_amount: Decimal,
    pub max_amount: Decimal,
}

impl Default for LoanLimits {
    fn default() -> Self {
        Self {
            min_amount: Decimal::new(1_000, 0),
            max_amount: Decimal::new(1_000_000, 0),
        }
    }
}

/// Constraints on an uploaded supporting document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRules {
    pub max_size_bytes: u64,

    /// Exact declared MIME types accepted, compared case-sensitively.
    /// `image/jpg` is not a registered type but browsers emit it, so the
    /// default set carries it alongside `image/jpeg`.
    pub allowed_mime_types: Vec<String>,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            max_size_bytes: 10 * 1024 * 1024,
            allowed_mime_types: vec![
                "application/pdf".to_string(),
                "image/jpeg".to_string(),
                "image/png".to_string(),
                "image/jpg".to_string(),
            ],
        }
    }
}

/// Debt-to-income banding thresholds, in ratio percentage points.
///
/// A ratio at or below `good_max` is Good, at or below `caution_max` is
/// Caution, anything above is High. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtiBands {
    pub good_max: Decimal,
    pub caution_max: Decimal,
}

impl Default for DtiBands {
    fn default() -> Self {
        Self {
            good_max: Decimal::new(28, 0),
            caution_max: Decimal::new(36, 0),
        }
    }
}

/// Cadences owned by the host's timer layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingRules {
    /// Interval between simulated upload progress ticks.
    pub tick_interval_ms: u64,
    /// How long a transient alert stays on screen before auto-dismissal.
    pub alert_dismiss_ms: u64,
}

impl Default for TimingRules {
    fn default() -> Self {
        Self {
            tick_interval_ms: 200,
            alert_dismiss_ms: 5_000,
        }
    }
}
