// ==========================================
// Delivery Scan Guard - Domain Layer
// ==========================================
// Entities and value types. No I/O, no host calls.
// ==========================================

pub mod delivery_note;
pub mod types;

pub use delivery_note::{DeliveryNote, DeliveryNoteItem, VerificationProgress};
pub use types::DocStatus;
