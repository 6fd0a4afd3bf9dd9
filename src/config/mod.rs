// ==========================================
// Delivery Scan Guard - Configuration Layer
// ==========================================

pub mod manifest;

pub use manifest::{AppManifest, Fixture, FIELD_ITEM_VERIFIED, FIELD_SCAN_VERIFICATION_MODE};
