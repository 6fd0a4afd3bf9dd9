// ==========================================
// Delivery Scan Guard - Core Library
// ==========================================
// Scan-to-verify submission guard for Delivery Notes.
// The host ERP platform owns persistence, lifecycle and UI;
// this crate owns the business rule and its hook bindings.
// ==========================================

// Initialize internationalization
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Engine layer - business rules
pub mod engine;

// Lifecycle hook registration
pub mod hooks;

// Configuration layer - app manifest
pub mod config;

// Logging
pub mod logging;

// Internationalization
pub mod i18n;

// ==========================================
// Core type re-exports
// ==========================================

// Domain
pub use domain::{DeliveryNote, DeliveryNoteItem, DocStatus, VerificationProgress};

// Engine
pub use engine::{
    GuardError, GuardResult, ScanData, ScanEngine, ScanError, ScanOutcome, SubmissionGuard,
};

// Hooks
pub use hooks::{dispatch, doc_event_bindings, DocEvent, HookBinding, DELIVERY_NOTE_DOCTYPE};

// Configuration
pub use config::AppManifest;

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Delivery Scan Guard";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
