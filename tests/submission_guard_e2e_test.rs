// ==========================================
// Submission Guard - End-to-End Tests
// ==========================================
// Exercises the guard through the hook dispatch path, the way
// a host adapter drives it, including the exact user-facing
// rejection text.
// ==========================================

use chrono::NaiveDate;
use delivery_scan_guard::hooks::{dispatch, DocEvent, DELIVERY_NOTE_DOCTYPE};
use delivery_scan_guard::i18n::set_locale;
use delivery_scan_guard::{logging, DeliveryNote, DeliveryNoteItem, DocStatus, GuardError};
use std::sync::Mutex;

// Locale is process-global; serialize tests that read message text.
static LOCALE_LOCK: Mutex<()> = Mutex::new(());

// ==========================================
// Test helpers
// ==========================================

fn make_item(idx: u32, code: &str, name: &str, verified: bool) -> DeliveryNoteItem {
    let mut item = DeliveryNoteItem::new(idx, code, name, 1.0);
    item.verified = verified;
    item
}

fn make_note(mode: bool, status: DocStatus, items: Vec<DeliveryNoteItem>) -> DeliveryNote {
    DeliveryNote {
        name: "MAT-DN-2026-00100".to_string(),
        posting_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        scan_verification_mode: mode,
        status,
        items,
    }
}

fn submit(doc: &DeliveryNote) -> Result<(), GuardError> {
    dispatch(DELIVERY_NOTE_DOCTYPE, DocEvent::Validate, doc)
}

// ==========================================
// Acceptance scenarios
// ==========================================

#[test]
fn test_scenario_a_one_unverified_item_rejected() {
    let _guard = LOCALE_LOCK.lock().unwrap();
    set_locale("en");
    logging::init_test();

    let doc = make_note(
        true,
        DocStatus::Submitting,
        vec![
            make_item(1, "A1", "Widget", true),
            make_item(2, "B2", "Gadget", false),
        ],
    );

    let err = submit(&doc).unwrap_err();
    assert_eq!(err.unverified_rows(), ["Row 2: B2 (Gadget)"]);
    assert_eq!(err.title(), "Scan Verification Required");
    assert_eq!(
        err.user_message(),
        "Cannot submit - the following items are not verified by scanning:\n\n\
         Row 2: B2 (Gadget)\n\n\
         Please scan all items before submitting, or disable 'Enable Scan Verification'."
    );
}

#[test]
fn test_scenario_b_mode_disabled_accepted() {
    let doc = make_note(
        false,
        DocStatus::Submitting,
        vec![
            make_item(1, "A1", "Widget", true),
            make_item(2, "B2", "Gadget", false),
        ],
    );
    assert!(submit(&doc).is_ok());
}

#[test]
fn test_scenario_c_all_verified_accepted() {
    let doc = make_note(
        true,
        DocStatus::Submitting,
        vec![
            make_item(1, "A1", "Widget", true),
            make_item(2, "B2", "Gadget", true),
        ],
    );
    assert!(submit(&doc).is_ok());
}

// ==========================================
// Lifecycle behavior
// ==========================================

#[test]
fn test_draft_save_with_unverified_items_succeeds() {
    let doc = make_note(
        true,
        DocStatus::Draft,
        vec![make_item(1, "A1", "Widget", false)],
    );
    assert!(submit(&doc).is_ok());
}

#[test]
fn test_empty_item_list_submits_vacuously() {
    let doc = make_note(true, DocStatus::Submitting, vec![]);
    assert!(submit(&doc).is_ok());
}

#[test]
fn test_rejection_lists_all_unverified_rows_in_order() {
    let _guard = LOCALE_LOCK.lock().unwrap();
    set_locale("en");

    let doc = make_note(
        true,
        DocStatus::Submitting,
        vec![
            make_item(1, "A1", "Widget", false),
            make_item(2, "B2", "Gadget", true),
            make_item(3, "C3", "Gizmo", false),
            make_item(4, "D4", "Doohickey", false),
        ],
    );

    let err = submit(&doc).unwrap_err();
    assert_eq!(
        err.unverified_rows(),
        [
            "Row 1: A1 (Widget)",
            "Row 3: C3 (Gizmo)",
            "Row 4: D4 (Doohickey)",
        ]
    );

    // One descriptor per line in the message body
    let message = err.user_message();
    assert!(message.contains("Row 1: A1 (Widget)\nRow 3: C3 (Gizmo)\nRow 4: D4 (Doohickey)"));
}

// ==========================================
// Localization
// ==========================================

#[test]
fn test_rejection_localizes_frame_but_not_descriptors() {
    let _guard = LOCALE_LOCK.lock().unwrap();

    let doc = make_note(
        true,
        DocStatus::Submitting,
        vec![make_item(2, "B2", "Gadget", false)],
    );
    let err = submit(&doc).unwrap_err();

    set_locale("zh-CN");
    let title = err.title();
    let message = err.user_message();
    assert_eq!(title, "需要扫码核验");
    // Row descriptors carry host data and stay verbatim
    assert!(message.contains("Row 2: B2 (Gadget)"));

    set_locale("en");
    assert_eq!(err.title(), "Scan Verification Required");
}
