// ==========================================
// Delivery Scan Guard - Lifecycle Hook Registration
// ==========================================
// Declarative binding of document-lifecycle events to guard
// callbacks. The host adapter reads the binding table once at
// startup and wires each entry into its own event dispatch;
// the table is data, the guards stay pure.
// ==========================================

use crate::domain::DeliveryNote;
use crate::engine::{GuardResult, SubmissionGuard};
use serde::{Deserialize, Serialize};

/// Document type name the guard is registered against.
pub const DELIVERY_NOTE_DOCTYPE: &str = "Delivery Note";

// ==========================================
// Lifecycle events
// ==========================================

/// Host document-lifecycle events a hook can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocEvent {
    Validate,
    BeforeSubmit,
    OnSubmit,
    OnCancel,
}

impl DocEvent {
    pub fn as_str(&self) -> &str {
        match self {
            DocEvent::Validate => "validate",
            DocEvent::BeforeSubmit => "before_submit",
            DocEvent::OnSubmit => "on_submit",
            DocEvent::OnCancel => "on_cancel",
        }
    }
}

// ==========================================
// Binding table
// ==========================================

/// Guard callback signature: read-only document access, typed
/// accept/reject result. Translating a rejection into the host's
/// abort mechanism (and applying its localization) is the host
/// adapter's job.
pub type DocEventHandler = fn(&DeliveryNote) -> GuardResult<()>;

/// One (doctype, event) -> handler registration.
#[derive(Clone, Copy)]
pub struct HookBinding {
    pub doctype: &'static str,
    pub event: DocEvent,
    pub handler: DocEventHandler,
}

/// The add-on's full registration table.
///
/// The submission guard binds to `validate`, which the host fires
/// on every save; the guard itself filters to the finalize
/// transition via the document status.
pub fn doc_event_bindings() -> Vec<HookBinding> {
    vec![HookBinding {
        doctype: DELIVERY_NOTE_DOCTYPE,
        event: DocEvent::Validate,
        handler: SubmissionGuard::check,
    }]
}

/// Run every handler bound to (doctype, event) in registration
/// order, stopping at the first rejection.
pub fn dispatch(doctype: &str, event: DocEvent, doc: &DeliveryNote) -> GuardResult<()> {
    for binding in doc_event_bindings() {
        if binding.doctype == doctype && binding.event == event {
            (binding.handler)(doc)?;
        }
    }
    Ok(())
}
