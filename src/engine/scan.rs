// ==========================================
// Delivery Scan Guard - Scan Application Engine
// ==========================================
// Pure core of the scan-to-verify workflow: match a scanned
// barcode to an unverified row and capture batch / serial /
// expiry data from the scan. Scans never increment quantities;
// they only flip the verified flag on existing rows.
// The barcode decoding itself (GS1 parsing, item lookup) is a
// host concern; this engine receives the decoded ScanData.
// ==========================================

use crate::domain::{DeliveryNote, DeliveryNoteItem};
use crate::i18n::t_with_args;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==========================================
// Scan input / output
// ==========================================

/// Decoded content of one scanned barcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanData {
    pub item_code: String,
    pub barcode: Option<String>,
    pub batch_no: Option<String>,
    pub serial_no: Option<String>,
    pub expiry_date: Option<NaiveDate>,
}

impl ScanData {
    /// A bare item-code scan with no batch/serial payload.
    pub fn plain(item_code: &str) -> Self {
        Self {
            item_code: item_code.to_string(),
            barcode: None,
            batch_no: None,
            serial_no: None,
            expiry_date: None,
        }
    }
}

/// What a successful scan changed, for host-side feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Row index (1-based) of the verified row.
    pub idx: u32,
    pub item_code: String,
    pub batch_no: Option<String>,
    pub serial_no: Option<String>,
}

/// Scan application failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// No unverified row matches the scanned item code.
    #[error("no unverified row for item {item_code}")]
    NoMatchingRow { item_code: String },
}

impl ScanError {
    /// Localized, user-facing alert text.
    pub fn user_message(&self) -> String {
        match self {
            ScanError::NoMatchingRow { item_code } => {
                t_with_args("scan.no_matching_row", &[("item_code", item_code)])
            }
        }
    }
}

// ==========================================
// ScanEngine - pure matching and mutation rules
// ==========================================
pub struct ScanEngine;

impl ScanEngine {
    /// Find the row a scan should verify.
    ///
    /// # Rules
    /// 1. If the scan carries a batch number, prefer an unverified
    ///    row with the same item code whose batch is unset or equal
    ///    to the scanned batch.
    /// 2. Otherwise, the first unverified row with the item code.
    ///
    /// # Returns
    /// - `Some(position)`: index into `doc.items`
    /// - `None`: item absent or already fully verified
    pub fn find_matching_row(doc: &DeliveryNote, scan: &ScanData) -> Option<usize> {
        if let Some(batch) = &scan.batch_no {
            let batch_match = doc.items.iter().position(|item| {
                item.item_code == scan.item_code
                    && !item.verified
                    && item
                        .batch_no
                        .as_ref()
                        .map(|existing| existing == batch)
                        .unwrap_or(true)
            });
            if batch_match.is_some() {
                return batch_match;
            }
        }

        doc.items
            .iter()
            .position(|item| item.item_code == scan.item_code && !item.verified)
    }

    /// Apply one scan: mark the matched row verified and capture
    /// batch, serial, barcode and expiry data from the scan.
    ///
    /// Serial numbers accumulate one per line, matching how the host
    /// stores multi-serial rows. Exactly one row changes per call.
    pub fn apply_scan(doc: &mut DeliveryNote, scan: &ScanData) -> Result<ScanOutcome, ScanError> {
        let position =
            Self::find_matching_row(doc, scan).ok_or_else(|| ScanError::NoMatchingRow {
                item_code: scan.item_code.clone(),
            })?;

        let row = &mut doc.items[position];
        Self::capture_scan_data(row, scan);
        row.verified = true;

        tracing::debug!(
            doc = %doc.name,
            idx = row.idx,
            item_code = %row.item_code,
            "row verified by scan"
        );

        Ok(ScanOutcome {
            idx: row.idx,
            item_code: row.item_code.clone(),
            batch_no: row.batch_no.clone(),
            serial_no: row.serial_no.clone(),
        })
    }

    fn capture_scan_data(row: &mut DeliveryNoteItem, scan: &ScanData) {
        if let Some(batch) = &scan.batch_no {
            row.batch_no = Some(batch.clone());
            if let Some(expiry) = scan.expiry_date {
                row.expiry_date = Some(expiry);
            }
        }

        if let Some(serial) = &scan.serial_no {
            row.serial_no = Some(match &row.serial_no {
                Some(existing) => format!("{}\n{}", existing, serial),
                None => serial.clone(),
            });
        }

        if let Some(barcode) = &scan.barcode {
            row.barcode = Some(barcode.clone());
        }
    }
}
