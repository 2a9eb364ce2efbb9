//! Client-side rule engine for the loan application form.
//!
//! Three leaf components — field validation, financial calculations, and the
//! upload session state machine — that read fresh input snapshots and emit
//! declarative [`UiInstruction`](models::UiInstruction) values for a host UI
//! layer to render. Nothing here performs I/O or holds state beyond one
//! form render.

pub mod calculations;
pub mod config;
pub mod display;
pub mod models;
pub mod upload;
pub mod validation;

pub use config::FormRules;
pub use models::*;
pub use upload::{ProgressSource, UploadError, UploadStage, UploadStateMachine};
