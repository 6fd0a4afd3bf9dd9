// ==========================================
// Delivery Scan Guard - Submission Guard
// ==========================================
// The single enforcement rule of this add-on: when a Delivery
// Note has scan-verification mode enabled, every line item must
// carry the verified flag before the finalize transition may
// proceed.
// Red lines: stateless, side-effect free, no I/O.
// ==========================================

use crate::domain::DeliveryNote;
use crate::engine::error::{GuardError, GuardResult};

// ==========================================
// SubmissionGuard - pure predicate-and-report
// ==========================================
pub struct SubmissionGuard;

impl SubmissionGuard {
    /// Validate a Delivery Note immediately before submission.
    ///
    /// # Rules (checked in order)
    /// 1. Verification mode disabled -> pass (guard is opt-in)
    /// 2. Not the finalize transition -> pass (draft saves etc.)
    /// 3. Any item unverified -> reject with the row descriptors,
    ///    in stored order
    ///
    /// # Returns
    /// - `Ok(())`: the transition may proceed
    /// - `Err(GuardError::VerificationIncomplete)`: block the
    ///   transition; the host surfaces title + message to the user
    pub fn check(doc: &DeliveryNote) -> GuardResult<()> {
        if !doc.scan_verification_mode {
            return Ok(());
        }

        if !doc.status.is_submitting() {
            tracing::debug!(
                doc = %doc.name,
                status = %doc.status,
                "submission guard skipped: not the finalize transition"
            );
            return Ok(());
        }

        let unverified: Vec<String> = doc
            .unverified_items()
            .map(|item| item.row_descriptor())
            .collect();

        if unverified.is_empty() {
            tracing::debug!(doc = %doc.name, "submission guard passed: all items verified");
            return Ok(());
        }

        tracing::debug!(
            doc = %doc.name,
            unverified_count = unverified.len(),
            "submission guard rejected: unverified items remain"
        );
        Err(GuardError::VerificationIncomplete { unverified })
    }
}
