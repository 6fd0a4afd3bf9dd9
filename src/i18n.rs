// ==========================================
// Internationalization (i18n) Module
// ==========================================
// Uses the rust-i18n crate.
// English (default) and Simplified Chinese.
// ==========================================
// Note: the rust_i18n::i18n! macro is initialized in lib.rs
// ==========================================

/// Current locale code.
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Switch locale.
///
/// # Arguments
/// - locale: locale code ("en" or "zh-CN")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Translate a message (no arguments).
///
/// # Example
/// ```no_run
/// use delivery_scan_guard::i18n::t;
/// let msg = t("guard.title");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Translate a message with named arguments.
///
/// # Example
/// ```no_run
/// use delivery_scan_guard::i18n::t_with_args;
/// let msg = t_with_args("scan.no_matching_row", &[("item_code", "A1")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
