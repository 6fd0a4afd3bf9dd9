// ==========================================
// Delivery Scan Guard - Engine Error Types
// ==========================================
// Tool: thiserror derive macro
// Note: VerificationIncomplete is an expected business-rule
// rejection, not a fault. It is surfaced to the user and must
// never be logged as a system error or retried.
// ==========================================

use crate::i18n::t;
use thiserror::Error;

/// Errors raised by the submission guard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// One or more line items lack the verified flag at submission
    /// time while scan-verification mode is active. Carries the
    /// offending row descriptors in stored order.
    #[error("submission blocked: {} item(s) not verified by scanning", .unverified.len())]
    VerificationIncomplete { unverified: Vec<String> },
}

impl GuardError {
    /// Localized title for UI presentation of the rejection dialog.
    pub fn title(&self) -> String {
        match self {
            GuardError::VerificationIncomplete { .. } => t("guard.title"),
        }
    }

    /// Localized, user-facing message body.
    ///
    /// Layout: header line, blank line, one descriptor per line,
    /// blank line, remediation hint. Descriptors are rendered
    /// verbatim (they carry host data, not translatable text).
    pub fn user_message(&self) -> String {
        match self {
            GuardError::VerificationIncomplete { unverified } => {
                format!(
                    "{}\n\n{}\n\n{}",
                    t("guard.cannot_submit"),
                    unverified.join("\n"),
                    t("guard.remediation"),
                )
            }
        }
    }

    /// The offending row descriptors, in stored item order.
    pub fn unverified_rows(&self) -> &[String] {
        match self {
            GuardError::VerificationIncomplete { unverified } => unverified,
        }
    }
}

/// Result type alias for guard checks.
pub type GuardResult<T> = Result<T, GuardError>;
