// ==========================================
// Delivery Scan Guard - Delivery Note Entities
// ==========================================
// In-memory view of the host platform's Delivery Note
// and its line items. Persistence, schema and lifecycle
// are owned by the host; this crate only reads (and, for
// the scan workflow, flips the per-item verified flag).
// ==========================================

use crate::domain::types::DocStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Delivery Note Item (child row)
// ==========================================

/// One shipped line on a Delivery Note.
///
/// `verified` is set by the scanning workflow and read by the
/// submission guard. Batch / serial / expiry are captured from
/// scanned barcodes when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryNoteItem {
    /// Human-readable row index, 1-based, in stored order.
    pub idx: u32,
    pub item_code: String,
    pub item_name: String,
    pub qty: f64,
    pub batch_no: Option<String>,
    pub serial_no: Option<String>,
    pub barcode: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    /// Physically confirmed by scan.
    pub verified: bool,
}

impl DeliveryNoteItem {
    /// Minimal constructor for rows the host materializes without
    /// batch/serial tracking.
    pub fn new(idx: u32, item_code: &str, item_name: &str, qty: f64) -> Self {
        Self {
            idx,
            item_code: item_code.to_string(),
            item_name: item_name.to_string(),
            qty,
            batch_no: None,
            serial_no: None,
            barcode: None,
            expiry_date: None,
            verified: false,
        }
    }

    /// Canonical line descriptor used in user-facing rejection lists.
    ///
    /// Format: `Row {idx}: {item_code} ({item_name})`
    pub fn row_descriptor(&self) -> String {
        format!("Row {}: {} ({})", self.idx, self.item_code, self.item_name)
    }
}

// ==========================================
// Delivery Note (parent document)
// ==========================================

/// The Delivery Note document as handed to lifecycle hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryNote {
    /// Host-assigned document name (e.g. "MAT-DN-2026-00042").
    pub name: String,
    pub posting_date: NaiveDate,
    /// Opt-in toggle; the submission guard is inert when false.
    pub scan_verification_mode: bool,
    pub status: DocStatus,
    /// Ordered child rows.
    pub items: Vec<DeliveryNoteItem>,
}

impl DeliveryNote {
    /// Items not yet confirmed by scan, in stored order.
    pub fn unverified_items(&self) -> impl Iterator<Item = &DeliveryNoteItem> {
        self.items.iter().filter(|item| !item.verified)
    }

    /// Scan completion summary for host-side display.
    pub fn verification_progress(&self) -> VerificationProgress {
        let total = self.items.len();
        let verified = self.items.iter().filter(|item| item.verified).count();
        let percent = if total == 0 {
            0
        } else {
            ((verified as f64 / total as f64) * 100.0).round() as u8
        };
        VerificationProgress {
            verified,
            total,
            percent,
        }
    }
}

/// Progress snapshot: `verified` of `total` rows confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationProgress {
    pub verified: usize,
    pub total: usize,
    pub percent: u8,
}

impl VerificationProgress {
    pub fn is_complete(&self) -> bool {
        self.verified == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_with_items(items: Vec<DeliveryNoteItem>) -> DeliveryNote {
        DeliveryNote {
            name: "MAT-DN-2026-00001".to_string(),
            posting_date: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
            scan_verification_mode: true,
            status: DocStatus::Draft,
            items,
        }
    }

    #[test]
    fn test_row_descriptor_format() {
        let item = DeliveryNoteItem::new(2, "B2", "Gadget", 1.0);
        assert_eq!(item.row_descriptor(), "Row 2: B2 (Gadget)");
    }

    #[test]
    fn test_unverified_items_preserve_order() {
        let mut first = DeliveryNoteItem::new(1, "A1", "Widget", 2.0);
        first.verified = true;
        let second = DeliveryNoteItem::new(2, "B2", "Gadget", 1.0);
        let third = DeliveryNoteItem::new(3, "C3", "Gizmo", 5.0);

        let note = note_with_items(vec![first, second, third]);
        let codes: Vec<&str> = note
            .unverified_items()
            .map(|item| item.item_code.as_str())
            .collect();
        assert_eq!(codes, vec!["B2", "C3"]);
    }

    #[test]
    fn test_progress_empty_note() {
        let note = note_with_items(vec![]);
        let progress = note.verification_progress();
        assert_eq!(progress.verified, 0);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.percent, 0);
        assert!(progress.is_complete());
    }

    #[test]
    fn test_progress_partial() {
        let mut first = DeliveryNoteItem::new(1, "A1", "Widget", 2.0);
        first.verified = true;
        let second = DeliveryNoteItem::new(2, "B2", "Gadget", 1.0);
        let third = DeliveryNoteItem::new(3, "C3", "Gizmo", 5.0);

        let note = note_with_items(vec![first, second, third]);
        let progress = note.verification_progress();
        assert_eq!(progress.verified, 1);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.percent, 33);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_progress_complete() {
        let mut item = DeliveryNoteItem::new(1, "A1", "Widget", 2.0);
        item.verified = true;
        let note = note_with_items(vec![item]);
        let progress = note.verification_progress();
        assert_eq!(progress.percent, 100);
        assert!(progress.is_complete());
    }
}
