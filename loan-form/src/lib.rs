//! Host-side layer for the loan application form engine.
//!
//! [`loan_core`] holds the pure rules; this crate supplies everything a host
//! UI needs to drive them: raw field parsing, the event-handler registry,
//! the form controller that translates events into instructions, settings
//! loading, logging setup, and explicit session-token handling for outbound
//! requests.

pub mod controller;
pub mod fields;
pub mod logging;
pub mod registry;
pub mod session;
pub mod settings;

pub use controller::{FormController, UPLOAD_WIDGET, wire};
pub use registry::{EventKind, EventPayload, Handler, HandlerRegistry};
pub use session::{CSRF_HEADER, OutboundRequest, SecurityToken, authorized_request};
pub use settings::{SettingsError, load_rules};
