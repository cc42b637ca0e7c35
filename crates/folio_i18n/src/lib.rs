//! folio internationalization core
//!
//! Goals:
//! - One locale resolver with a single explicit contract: URL path in,
//!   language code out, shared locale state kept in sync
//! - Translation lookup over nested JSON catalogs with a fallback chain
//!   (current language -> default language -> caller fallback -> raw key)
//! - Locale-prefixed URL rewriting for the language switcher, idempotent and
//!   history-friendly
//! - Host integration through registered callbacks (redraw, navigation), not
//!   through framework types

mod catalog;
mod detect;
mod language;
mod route;
mod state;

pub use catalog::{Catalog, CatalogError};
pub use detect::detect_preferred;
pub use language::{languages, LanguageCode, LanguageConfig};
pub use route::{resolve_from_path, rewrite_path, set_navigate_callback, switch_language};
pub use state::{set_redraw_callback, LocaleState};

/// Translate a key using the global [`LocaleState`].
///
/// If the state isn't initialized, this degrades gracefully and returns the
/// raw key; an unresolved key is a visible-in-UI nit, never a failure.
pub fn translate(key: &str) -> String {
    match LocaleState::try_get() {
        Some(st) => st.translate(key),
        None => key.to_string(),
    }
}

/// Translate a key using the global [`LocaleState`], with fallback text for
/// the miss case.
pub fn translate_or(key: &str, fallback: &str) -> String {
    match LocaleState::try_get() {
        Some(st) => st.translate_or(key, fallback),
        None => fallback.to_string(),
    }
}

/// Convenience macro for view code.
///
/// Examples:
/// - `t!("contact.title")`
/// - `t!("contact.title", "Get in touch")`
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::translate($key)
    };
    ($key:literal, $fallback:literal) => {
        $crate::translate_or($key, $fallback)
    };
}
