// ==========================================
// Delivery Scan Guard - Domain Types
// ==========================================
// Document lifecycle status as seen by the host
// ERP platform. Serialized form: SCREAMING_SNAKE_CASE
// (matches the host's transition-status codes).
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Document Status (lifecycle transition state)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocStatus {
    Draft,      // editable, not yet finalized
    Submitting, // the draft -> submitted transition is in flight
    Submitted,  // finalized, immutable
    Cancelled,  // finalized then voided
}

impl DocStatus {
    /// Whether the document is in the finalize ("submit") transition.
    ///
    /// Validation hooks fire on several lifecycle events; only this
    /// state identifies the transition the submission guard cares about.
    pub fn is_submitting(&self) -> bool {
        matches!(self, DocStatus::Submitting)
    }
}

impl fmt::Display for DocStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocStatus::Draft => write!(f, "DRAFT"),
            DocStatus::Submitting => write!(f, "SUBMITTING"),
            DocStatus::Submitted => write!(f, "SUBMITTED"),
            DocStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}
