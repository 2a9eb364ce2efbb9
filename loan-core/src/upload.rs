//! The upload session lifecycle.
//!
//! One widget runs at most one session at a time through
//! `Idle -> Selected -> Uploading -> Complete`. `Selected` is only reachable
//! through a selection that passed [`validate_file`]; a rejected pick never
//! enters the machine. The transport here is simulated: progress advances by
//! a pseudo-random increment per timer tick, standing in for the variable
//! throughput of a real upload. A real transport would replace
//! [`ProgressSource`] with byte-progress callbacks and add a failed stage
//! with retry.
//!
//! The machine owns no timer. It emits [`UiInstruction::StartTicking`] and
//! [`UiInstruction::StopTicking`] so the host arms and disarms the cadence,
//! and a stop is always emitted when a running session completes or is
//! superseded.

use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{FileRules, TimingRules};
use crate::models::{AlertSeverity, FileSelection, UiInstruction};
use crate::validation::validate_file;

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadStage {
    Idle,
    Selected,
    Uploading,
    Complete,
}

/// Errors from driving the machine out of order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// `begin_upload` was called without a validated selection waiting.
    #[error("no validated file selection ready to upload (stage is {stage:?})")]
    NotReadyToUpload { stage: UploadStage },
}

/// Supplies the per-tick progress increment, in percentage points within
/// `[0, 15)`.
///
/// The default draws randomly to simulate uneven network throughput; tests
/// substitute a deterministic source.
pub trait ProgressSource {
    fn next_increment(&mut self) -> Decimal;
}

/// Random increments in whole hundredths of a point, so progress stays a
/// clean two-place decimal.
#[derive(Debug, Default)]
pub struct RandomProgress;

impl ProgressSource for RandomProgress {
    fn next_increment(&mut self) -> Decimal {
        Decimal::new(rand::thread_rng().gen_range(0..1500), 2)
    }
}

/// State machine for one upload widget.
pub struct UploadStateMachine {
    file_rules: FileRules,
    timing: TimingRules,
    progress_source: Box<dyn ProgressSource>,
    stage: UploadStage,
    selection: Option<FileSelection>,
    progress_percent: Decimal,
}

impl UploadStateMachine {
    pub fn new(
        file_rules: FileRules,
        timing: TimingRules,
    ) -> Self {
        Self::with_progress_source(file_rules, timing, Box::new(RandomProgress))
    }

    pub fn with_progress_source(
        file_rules: FileRules,
        timing: TimingRules,
        progress_source: Box<dyn ProgressSource>,
    ) -> Self {
        Self {
            file_rules,
            timing,
            progress_source,
            stage: UploadStage::Idle,
            selection: None,
            progress_percent: Decimal::ZERO,
        }
    }

    pub fn stage(&self) -> UploadStage {
        self.stage
    }

    /// The file of the current session, if one is active.
    pub fn selection(&self) -> Option<&FileSelection> {
        self.selection.as_ref()
    }

    /// Current progress in `[0, 100]`.
    pub fn progress_percent(&self) -> Decimal {
        self.progress_percent
    }

    /// Feeds a file pick or drop into the machine.
    ///
    /// An invalid selection yields a danger alert and changes nothing; in
    /// particular it does not disturb a session already uploading. A valid
    /// one supersedes whatever session existed (stopping its timer if it was
    /// running) and starts fresh at `Selected`.
    pub fn select(
        &mut self,
        selection: FileSelection,
    ) -> Vec<UiInstruction> {
        let verdict = validate_file(&selection, &self.file_rules);
        if let Some(message) = verdict.message() {
            return vec![UiInstruction::ShowAlert {
                severity: AlertSeverity::Danger,
                message,
                auto_dismiss_ms: self.timing.alert_dismiss_ms,
            }];
        }

        let mut instructions = Vec::new();
        if self.stage == UploadStage::Uploading {
            tracing::debug!(
                superseded = self.selection.as_ref().map(|s| s.name.as_str()),
                "upload in progress superseded by new selection"
            );
            instructions.push(UiInstruction::StopTicking);
        }

        tracing::debug!(file = %selection.name, "file selected");
        instructions.push(UiInstruction::ShowFileChosen {
            file_name: selection.name.clone(),
        });
        self.selection = Some(selection);
        self.progress_percent = Decimal::ZERO;
        self.stage = UploadStage::Selected;
        instructions
    }

    /// Starts uploading the selected file.
    ///
    /// Legal only from `Selected`; the transition graph is what guarantees a
    /// selection happens-before any tick of its session.
    pub fn begin_upload(&mut self) -> Result<Vec<UiInstruction>, UploadError> {
        if self.stage != UploadStage::Selected {
            return Err(UploadError::NotReadyToUpload { stage: self.stage });
        }

        self.stage = UploadStage::Uploading;
        self.progress_percent = Decimal::ZERO;
        Ok(vec![
            UiInstruction::SetUploadProgress {
                percent: Decimal::ZERO,
            },
            UiInstruction::StartTicking {
                interval_ms: self.timing.tick_interval_ms,
            },
        ])
    }

    /// Advances the simulated upload by one timer tick.
    ///
    /// Progress is monotonically non-decreasing and clamped to exactly 100
    /// on the completing tick. A tick arriving outside `Uploading` is a
    /// no-op: a queued timer callback can legitimately fire once after the
    /// session that armed it is gone.
    pub fn tick(&mut self) -> Vec<UiInstruction> {
        if self.stage != UploadStage::Uploading {
            tracing::debug!(stage = ?self.stage, "stray upload tick ignored");
            return Vec::new();
        }

        self.progress_percent += self.progress_source.next_increment();
        if self.progress_percent >= Decimal::ONE_HUNDRED {
            self.progress_percent = Decimal::ONE_HUNDRED;
            self.stage = UploadStage::Complete;
            tracing::debug!(
                file = self.selection.as_ref().map(|s| s.name.as_str()),
                "upload complete"
            );
            return vec![
                UiInstruction::SetUploadProgress {
                    percent: Decimal::ONE_HUNDRED,
                },
                UiInstruction::ShowUploadComplete,
                UiInstruction::StopTicking,
            ];
        }

        vec![UiInstruction::SetUploadProgress {
            percent: self.progress_percent,
        }]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    /// Advances by the same amount every tick.
    struct FixedStep(Decimal);

    impl ProgressSource for FixedStep {
        fn next_increment(&mut self) -> Decimal {
            self.0
        }
    }

    fn machine_with_step(step: Decimal) -> UploadStateMachine {
        UploadStateMachine::with_progress_source(
            FileRules::default(),
            TimingRules::default(),
            Box::new(FixedStep(step)),
        )
    }

    fn valid_pdf() -> FileSelection {
        FileSelection::new("statement.pdf", 1024 * 1024, "application/pdf")
    }

    fn oversized_pdf() -> FileSelection {
        FileSelection::new("archive.pdf", 20 * 1024 * 1024, "application/pdf")
    }

    // =========================================================================
    // select tests
    // =========================================================================

    #[test]
    fn new_machine_is_idle() {
        let machine = machine_with_step(dec!(10));

        assert_eq!(machine.stage(), UploadStage::Idle);
        assert_eq!(machine.selection(), None);
        assert_eq!(machine.progress_percent(), dec!(0));
    }

    #[test]
    fn valid_selection_moves_to_selected() {
        let mut machine = machine_with_step(dec!(10));

        let instructions = machine.select(valid_pdf());

        assert_eq!(machine.stage(), UploadStage::Selected);
        assert_eq!(machine.selection(), Some(&valid_pdf()));
        assert_eq!(
            instructions,
            vec![UiInstruction::ShowFileChosen {
                file_name: "statement.pdf".to_string()
            }]
        );
    }

    #[test]
    fn invalid_selection_stays_idle_with_alert() {
        let mut machine = machine_with_step(dec!(10));

        let instructions = machine.select(oversized_pdf());

        assert_eq!(machine.stage(), UploadStage::Idle);
        assert_eq!(machine.selection(), None);
        assert_eq!(
            instructions,
            vec![UiInstruction::ShowAlert {
                severity: AlertSeverity::Danger,
                message: "File size must be less than 10MB".to_string(),
                auto_dismiss_ms: 5000,
            }]
        );
    }

    #[test]
    fn wrong_type_selection_is_rejected() {
        let mut machine = machine_with_step(dec!(10));

        let instructions = machine.select(FileSelection::new("notes.txt", 100, "text/plain"));

        assert_eq!(machine.stage(), UploadStage::Idle);
        assert_eq!(
            instructions,
            vec![UiInstruction::ShowAlert {
                severity: AlertSeverity::Danger,
                message: "Only PDF, JPG, and PNG files are allowed".to_string(),
                auto_dismiss_ms: 5000,
            }]
        );
    }

    // =========================================================================
    // begin_upload tests
    // =========================================================================

    #[test]
    fn begin_upload_requires_a_selection() {
        let mut machine = machine_with_step(dec!(10));

        let result = machine.begin_upload();

        assert_eq!(
            result,
            Err(UploadError::NotReadyToUpload {
                stage: UploadStage::Idle
            })
        );
    }

    #[test]
    fn begin_upload_initializes_progress_and_arms_timer() {
        let mut machine = machine_with_step(dec!(10));
        machine.select(valid_pdf());

        let instructions = machine.begin_upload().unwrap();

        assert_eq!(machine.stage(), UploadStage::Uploading);
        assert_eq!(machine.progress_percent(), dec!(0));
        assert_eq!(
            instructions,
            vec![
                UiInstruction::SetUploadProgress { percent: dec!(0) },
                UiInstruction::StartTicking { interval_ms: 200 },
            ]
        );
    }

    #[test]
    fn begin_upload_twice_is_an_error() {
        let mut machine = machine_with_step(dec!(10));
        machine.select(valid_pdf());
        machine.begin_upload().unwrap();

        let result = machine.begin_upload();

        assert_eq!(
            result,
            Err(UploadError::NotReadyToUpload {
                stage: UploadStage::Uploading
            })
        );
    }

    // =========================================================================
    // tick tests
    // =========================================================================

    #[test]
    fn ticks_advance_monotonically_and_complete_at_exactly_100() {
        let mut machine = machine_with_step(dec!(40));
        machine.select(valid_pdf());
        machine.begin_upload().unwrap();

        assert_eq!(
            machine.tick(),
            vec![UiInstruction::SetUploadProgress { percent: dec!(40) }]
        );
        assert_eq!(
            machine.tick(),
            vec![UiInstruction::SetUploadProgress { percent: dec!(80) }]
        );

        // 80 + 40 overshoots; the machine clamps and finishes.
        let last = machine.tick();
        assert_eq!(
            last,
            vec![
                UiInstruction::SetUploadProgress {
                    percent: dec!(100)
                },
                UiInstruction::ShowUploadComplete,
                UiInstruction::StopTicking,
            ]
        );
        assert_eq!(machine.stage(), UploadStage::Complete);
        assert_eq!(machine.progress_percent(), dec!(100));
    }

    #[test]
    fn progress_never_exceeds_100_in_any_instruction() {
        let mut machine = machine_with_step(dec!(14.99));
        machine.select(valid_pdf());
        machine.begin_upload().unwrap();

        let mut previous = dec!(0);
        loop {
            let instructions = machine.tick();
            for instruction in &instructions {
                if let UiInstruction::SetUploadProgress { percent } = instruction {
                    assert!(*percent <= dec!(100));
                    assert!(*percent >= previous);
                    previous = *percent;
                }
            }
            if machine.stage() == UploadStage::Complete {
                break;
            }
        }

        assert_eq!(machine.progress_percent(), dec!(100));
    }

    #[test]
    fn zero_increment_keeps_uploading() {
        let mut machine = machine_with_step(dec!(0));
        machine.select(valid_pdf());
        machine.begin_upload().unwrap();

        let instructions = machine.tick();

        assert_eq!(machine.stage(), UploadStage::Uploading);
        assert_eq!(
            instructions,
            vec![UiInstruction::SetUploadProgress { percent: dec!(0) }]
        );
    }

    #[test]
    fn tick_outside_uploading_is_a_noop() {
        let mut machine = machine_with_step(dec!(60));

        assert_eq!(machine.tick(), Vec::new());

        machine.select(valid_pdf());
        assert_eq!(machine.tick(), Vec::new());

        machine.begin_upload().unwrap();
        machine.tick();
        machine.tick();
        assert_eq!(machine.stage(), UploadStage::Complete);

        // A stray queued tick after completion.
        assert_eq!(machine.tick(), Vec::new());
        assert_eq!(machine.progress_percent(), dec!(100));
    }

    // =========================================================================
    // supersession tests
    // =========================================================================

    #[test]
    fn valid_selection_supersedes_running_upload() {
        let mut machine = machine_with_step(dec!(30));
        machine.select(valid_pdf());
        machine.begin_upload().unwrap();
        machine.tick();

        let replacement = FileSelection::new("payslip.png", 2048, "image/png");
        let instructions = machine.select(replacement.clone());

        assert_eq!(machine.stage(), UploadStage::Selected);
        assert_eq!(machine.selection(), Some(&replacement));
        assert_eq!(machine.progress_percent(), dec!(0));
        assert_eq!(
            instructions,
            vec![
                UiInstruction::StopTicking,
                UiInstruction::ShowFileChosen {
                    file_name: "payslip.png".to_string()
                },
            ]
        );
    }

    #[test]
    fn invalid_selection_does_not_disturb_running_upload() {
        let mut machine = machine_with_step(dec!(30));
        machine.select(valid_pdf());
        machine.begin_upload().unwrap();
        machine.tick();

        let instructions = machine.select(oversized_pdf());

        assert_eq!(machine.stage(), UploadStage::Uploading);
        assert_eq!(machine.selection(), Some(&valid_pdf()));
        assert_eq!(machine.progress_percent(), dec!(30));
        assert!(matches!(
            instructions.as_slice(),
            [UiInstruction::ShowAlert { .. }]
        ));
    }

    #[test]
    fn complete_session_restarts_on_fresh_selection() {
        let mut machine = machine_with_step(dec!(100));
        machine.select(valid_pdf());
        machine.begin_upload().unwrap();
        machine.tick();
        assert_eq!(machine.stage(), UploadStage::Complete);

        let instructions = machine.select(valid_pdf());

        // The completed session already stopped its timer; no extra stop.
        assert_eq!(
            instructions,
            vec![UiInstruction::ShowFileChosen {
                file_name: "statement.pdf".to_string()
            }]
        );
        assert_eq!(machine.stage(), UploadStage::Selected);
        assert_eq!(machine.progress_percent(), dec!(0));
    }

    #[test]
    fn configured_timing_flows_into_instructions() {
        let timing = TimingRules {
            tick_interval_ms: 50,
            alert_dismiss_ms: 1000,
        };
        let mut machine = UploadStateMachine::with_progress_source(
            FileRules::default(),
            timing,
            Box::new(FixedStep(dec!(10))),
        );

        let rejected = machine.select(oversized_pdf());
        assert_eq!(
            rejected,
            vec![UiInstruction::ShowAlert {
                severity: AlertSeverity::Danger,
                message: "File size must be less than 10MB".to_string(),
                auto_dismiss_ms: 1000,
            }]
        );

        machine.select(valid_pdf());
        let started = machine.begin_upload().unwrap();
        assert_eq!(
            started[1],
            UiInstruction::StartTicking { interval_ms: 50 }
        );
    }
}
