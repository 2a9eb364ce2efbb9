//! Wires host events to the rule engine.
//!
//! The controller holds the per-render state (current input snapshot, the
//! upload machine, the session token) and translates each raw event into
//! validation, a fresh metric computation, or an upload transition, returning
//! the instructions the host should render. Derived metrics are never cached;
//! every refresh recomputes from the snapshot at hand.

use std::cell::RefCell;
use std::rc::Rc;

use rust_decimal::Decimal;

use loan_core::calculations::{debt_to_income_ratio, monthly_payment};
use loan_core::config::FormRules;
use loan_core::models::{FileSelection, FormField, LoanInput, UiInstruction};
use loan_core::upload::{ProgressSource, UploadStage, UploadStateMachine};
use loan_core::validation::validate_loan_amount;

use crate::fields::{parse_decimal_field, parse_term_field};
use crate::registry::{EventKind, EventPayload, HandlerRegistry};
use crate::session::{OutboundRequest, SecurityToken, authorized_request};

/// Widget id of the document upload area.
pub const UPLOAD_WIDGET: &str = "file-upload-area";

/// Controller for one rendered loan application form.
pub struct FormController {
    rules: FormRules,
    input: LoanInput,
    upload: UploadStateMachine,
    token: SecurityToken,
}

impl FormController {
    pub fn new(
        rules: FormRules,
        token: SecurityToken,
    ) -> Self {
        let upload = UploadStateMachine::new(rules.file.clone(), rules.timing.clone());
        Self {
            rules,
            input: LoanInput::default(),
            upload,
            token,
        }
    }

    /// Like [`FormController::new`] but with an injected progress source,
    /// for deterministic upload behavior in tests.
    pub fn with_progress_source(
        rules: FormRules,
        token: SecurityToken,
        progress_source: Box<dyn ProgressSource>,
    ) -> Self {
        let upload = UploadStateMachine::with_progress_source(
            rules.file.clone(),
            rules.timing.clone(),
            progress_source,
        );
        Self {
            rules,
            input: LoanInput::default(),
            upload,
            token,
        }
    }

    pub fn input(&self) -> &LoanInput {
        &self.input
    }

    pub fn upload_stage(&self) -> UploadStage {
        self.upload.stage()
    }

    /// The operator edited the loan amount.
    ///
    /// An out-of-range amount shows its error and leaves the stale estimate
    /// alone; a valid one clears the error and refreshes the estimate.
    pub fn handle_amount_input(
        &mut self,
        raw: &str,
    ) -> Vec<UiInstruction> {
        self.input.amount = parse_decimal_field(raw);

        let verdict = validate_loan_amount(self.input.amount, &self.rules.loan);
        match verdict.message() {
            Some(message) => vec![UiInstruction::MarkFieldInvalid {
                field: FormField::LoanAmount,
                message,
            }],
            None => {
                let mut instructions = vec![UiInstruction::ClearFieldError {
                    field: FormField::LoanAmount,
                }];
                instructions.push(self.payment_instruction());
                instructions
            }
        }
    }

    /// The operator edited the term.
    pub fn handle_term_input(
        &mut self,
        raw: &str,
    ) -> Vec<UiInstruction> {
        self.input.term_months = parse_term_field(raw);
        vec![self.payment_instruction()]
    }

    /// The operator edited the interest rate.
    pub fn handle_rate_input(
        &mut self,
        raw: &str,
    ) -> Vec<UiInstruction> {
        self.input.annual_interest_rate_percent = parse_decimal_field(raw);
        vec![self.payment_instruction()]
    }

    /// The operator edited the annual income.
    pub fn handle_income_input(
        &mut self,
        raw: &str,
    ) -> Vec<UiInstruction> {
        self.input.annual_income = parse_decimal_field(raw);

        let mut instructions = Vec::new();
        if self
            .input
            .annual_income
            .is_some_and(|income| income > Decimal::ZERO)
        {
            instructions.push(UiInstruction::ClearFieldError {
                field: FormField::AnnualIncome,
            });
        }
        instructions.push(self.dti_instruction());
        instructions
    }

    /// The operator edited the monthly debt payments.
    pub fn handle_monthly_debt_input(
        &mut self,
        raw: &str,
    ) -> Vec<UiInstruction> {
        self.input.monthly_debt_payments = parse_decimal_field(raw);
        vec![self.dti_instruction()]
    }

    /// A file was picked or dropped on the upload area.
    ///
    /// A valid selection starts its (simulated) upload immediately, as the
    /// form does; a rejected one surfaces only its alert.
    pub fn handle_file_selected(
        &mut self,
        selection: FileSelection,
    ) -> Vec<UiInstruction> {
        let mut instructions = self.upload.select(selection);
        if self.upload.stage() == UploadStage::Selected {
            match self.upload.begin_upload() {
                Ok(started) => instructions.extend(started),
                Err(error) => tracing::error!(%error, "could not start upload"),
            }
        }
        instructions
    }

    /// The host's upload timer fired.
    pub fn handle_tick(&mut self) -> Vec<UiInstruction> {
        self.upload.tick()
    }

    /// Builds the form submission request with the session token attached.
    pub fn submit_application(
        &self,
        url: &str,
    ) -> OutboundRequest {
        authorized_request(url, &self.token)
    }

    fn payment_instruction(&self) -> UiInstruction {
        let estimate = monthly_payment(
            self.input.amount.unwrap_or(Decimal::ZERO),
            self.input.term_months.unwrap_or(0),
            self.input
                .annual_interest_rate_percent
                .unwrap_or(Decimal::ZERO),
        );
        match estimate {
            Some(estimate) => UiInstruction::ShowPaymentEstimate {
                monthly_payment: estimate.monthly_payment,
            },
            None => UiInstruction::HidePaymentEstimate,
        }
    }

    fn dti_instruction(&self) -> UiInstruction {
        let dti = debt_to_income_ratio(
            self.input.annual_income.unwrap_or(Decimal::ZERO),
            self.input.monthly_debt_payments.unwrap_or(Decimal::ZERO),
            &self.rules.dti,
        );
        match dti {
            Some(dti) => UiInstruction::ShowDebtToIncome {
                ratio_percent: dti.ratio_percent,
                band: dti.band,
            },
            None => UiInstruction::HideDebtToIncome,
        }
    }
}

/// Installs the standard form bindings into a registry.
///
/// Field inputs, the upload area's file drop, and its timer tick all route
/// to the shared controller. Single-threaded by design; the whole engine
/// runs on the host's event callbacks.
pub fn wire(
    controller: Rc<RefCell<FormController>>,
    registry: &mut HandlerRegistry,
) {
    bind_field(registry, &controller, FormField::LoanAmount, |c, raw| {
        c.handle_amount_input(raw)
    });
    bind_field(registry, &controller, FormField::TermMonths, |c, raw| {
        c.handle_term_input(raw)
    });
    bind_field(registry, &controller, FormField::InterestRate, |c, raw| {
        c.handle_rate_input(raw)
    });
    bind_field(registry, &controller, FormField::AnnualIncome, |c, raw| {
        c.handle_income_input(raw)
    });
    bind_field(
        registry,
        &controller,
        FormField::MonthlyDebtPayments,
        |c, raw| c.handle_monthly_debt_input(raw),
    );

    let upload_controller = Rc::clone(&controller);
    registry.bind(
        UPLOAD_WIDGET,
        EventKind::FileDrop,
        Box::new(move |payload| match payload {
            EventPayload::FileDropped { selection } => upload_controller
                .borrow_mut()
                .handle_file_selected(selection.clone()),
            other => {
                tracing::warn!(?other, "file-drop handler got unexpected payload");
                Vec::new()
            }
        }),
    );

    let tick_controller = Rc::clone(&controller);
    registry.bind(
        UPLOAD_WIDGET,
        EventKind::TimerTick,
        Box::new(move |payload| match payload {
            EventPayload::TimerTick => tick_controller.borrow_mut().handle_tick(),
            other => {
                tracing::warn!(?other, "tick handler got unexpected payload");
                Vec::new()
            }
        }),
    );
}

fn bind_field(
    registry: &mut HandlerRegistry,
    controller: &Rc<RefCell<FormController>>,
    field: FormField,
    handle: fn(&mut FormController, &str) -> Vec<UiInstruction>,
) {
    let controller = Rc::clone(controller);
    registry.bind(
        field.dom_id(),
        EventKind::Input,
        Box::new(move |payload| match payload {
            EventPayload::FieldInput { value } => handle(&mut controller.borrow_mut(), value),
            other => {
                tracing::warn!(?field, ?other, "field handler got unexpected payload");
                Vec::new()
            }
        }),
    );
}
