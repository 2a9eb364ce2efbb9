mod file_selection;
mod instruction;
mod loan_input;
mod validation;

pub use file_selection::FileSelection;
pub use instruction::{AlertSeverity, UiInstruction};
pub use loan_input::LoanInput;
pub use validation::{FormField, ValidationError, ValidationResult};
