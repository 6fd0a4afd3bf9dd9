// ==========================================
// Delivery Scan Guard - App Manifest
// ==========================================
// Declarative metadata the host platform reads when installing
// the add-on: identity, host-package dependency, client script
// assets, and the custom schema fields that must exist for the
// guard to have anything to read. Configuration, not logic.
// ==========================================

use serde::{Deserialize, Serialize};

/// Custom field provisioned on the Delivery Note Item child table.
pub const FIELD_ITEM_VERIFIED: &str = "Delivery Note Item-custom_verified";
/// Custom field provisioned on the Delivery Note document.
pub const FIELD_SCAN_VERIFICATION_MODE: &str = "Delivery Note-custom_scan_verification_mode";

// ==========================================
// Fixture declarations
// ==========================================

/// A set of host records exported with the app, filtered by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Host record type, e.g. "Custom Field".
    pub doctype: String,
    /// Names of the records to export/import.
    pub names: Vec<String>,
}

// ==========================================
// App manifest
// ==========================================

/// Installable-app metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppManifest {
    pub app_name: String,
    pub app_title: String,
    pub app_publisher: String,
    pub app_description: String,
    pub app_email: String,
    pub app_license: String,
    /// Host packages this add-on requires.
    pub required_apps: Vec<String>,
    /// Client scripts injected into the document edit UI.
    pub app_include_js: Vec<String>,
    pub fixtures: Vec<Fixture>,
}

impl AppManifest {
    /// The canonical manifest shipped with this crate.
    pub fn bundled() -> Self {
        Self {
            app_name: "delivery_scan_guard".to_string(),
            app_title: "Delivery Scan Guard".to_string(),
            app_publisher: "Delivery Scan Guard Team".to_string(),
            app_description: "Scan-to-verify workflow for delivery notes".to_string(),
            app_email: "support@example.com".to_string(),
            app_license: "MIT".to_string(),
            required_apps: vec!["erpnext".to_string()],
            app_include_js: vec![
                "/assets/delivery_scan_guard/js/delivery_note_scanner.js".to_string(),
            ],
            fixtures: vec![Fixture {
                doctype: "Custom Field".to_string(),
                names: vec![
                    FIELD_ITEM_VERIFIED.to_string(),
                    FIELD_SCAN_VERIFICATION_MODE.to_string(),
                ],
            }],
        }
    }

    /// Names of every custom field the host must provision.
    pub fn required_custom_fields(&self) -> Vec<&str> {
        self.fixtures
            .iter()
            .filter(|fixture| fixture.doctype == "Custom Field")
            .flat_map(|fixture| fixture.names.iter().map(String::as_str))
            .collect()
    }

    /// Serialize for host-side installers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
