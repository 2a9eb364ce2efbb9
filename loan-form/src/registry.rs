//! Explicit event-handler registry.
//!
//! The original form bound handlers globally, jQuery-style. Here the host
//! registers each handler under an explicit (widget id, event kind) key and
//! calls [`HandlerRegistry::dispatch`] from its own event loop; the engine
//! never owns dispatch, and nothing is bound implicitly.

use std::collections::HashMap;

use loan_core::models::{FileSelection, UiInstruction};

/// What happened, from the host's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A field's value changed.
    Input,
    /// A file was picked or dropped on an upload area.
    FileDrop,
    /// A click on the widget.
    Click,
    /// The host's timer fired for this widget.
    TimerTick,
}

/// Event data handed to a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    FieldInput { value: String },
    FileDropped { selection: FileSelection },
    Click,
    TimerTick,
}

/// A registered handler: consumes the payload, returns rendering steps.
pub type Handler = Box<dyn FnMut(&EventPayload) -> Vec<UiInstruction>>;

/// Maps (widget id, event kind) to the handler the host installed.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<(String, EventKind), Handler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a handler, replacing any previous binding for the same key.
    pub fn bind(
        &mut self,
        widget_id: impl Into<String>,
        kind: EventKind,
        handler: Handler,
    ) {
        let widget_id = widget_id.into();
        if self
            .handlers
            .insert((widget_id.clone(), kind), handler)
            .is_some()
        {
            tracing::debug!(%widget_id, ?kind, "replaced existing handler binding");
        }
    }

    pub fn is_bound(
        &self,
        widget_id: &str,
        kind: EventKind,
    ) -> bool {
        self.handlers.contains_key(&(widget_id.to_string(), kind))
    }

    /// Routes an event to its handler.
    ///
    /// An event with no binding yields no instructions; hosts routinely
    /// forward every DOM event and most have no rule attached.
    pub fn dispatch(
        &mut self,
        widget_id: &str,
        kind: EventKind,
        payload: &EventPayload,
    ) -> Vec<UiInstruction> {
        match self.handlers.get_mut(&(widget_id.to_string(), kind)) {
            Some(handler) => handler(payload),
            None => {
                tracing::debug!(%widget_id, ?kind, "no handler bound for event");
                Vec::new()
            }
        }
    }
}
