// ==========================================
// Delivery Scan Guard - Engine Layer
// ==========================================
// Business rules. Red lines: pure logic, no host calls,
// every rejection carries user-presentable detail.
// ==========================================

pub mod error;
pub mod scan;
pub mod submission_guard;

pub use error::{GuardError, GuardResult};
pub use scan::{ScanData, ScanEngine, ScanError, ScanOutcome};
pub use submission_guard::SubmissionGuard;
