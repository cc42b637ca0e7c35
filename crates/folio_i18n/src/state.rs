use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, RwLock};

use tracing::debug;

use crate::catalog::{Catalog, CatalogError};
use crate::language::LanguageCode;
use crate::route::resolve_from_path;

/// Global locale state singleton.
static LOCALE_STATE: OnceLock<LocaleState> = OnceLock::new();

/// Global redraw callback - set by the view layer to trigger re-renders.
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function.
///
/// The host should set this to whatever re-renders language-dependent views.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK.lock().unwrap() = Some(callback);
}

fn trigger_redraw() {
    if let Some(cb) = *REDRAW_CALLBACK.lock().unwrap() {
        cb();
    }
}

/// Runtime locale state: the current language plus the loaded catalogs.
///
/// The current language is the single source of truth; anything derived from
/// it (flag highlighting, `lang` attributes) is a read-only projection. It is
/// written only here and by the path rewriter, and every observable change
/// fires the redraw callback.
pub struct LocaleState {
    locale: RwLock<LanguageCode>,
    catalogs: RwLock<HashMap<LanguageCode, Catalog>>,
}

impl LocaleState {
    /// A fresh, non-global state. Tests construct these directly; production
    /// code goes through [`LocaleState::init`].
    pub fn new(initial: LanguageCode) -> Self {
        Self {
            locale: RwLock::new(initial),
            catalogs: RwLock::new(HashMap::new()),
        }
    }

    /// Initialize the global locale state.
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(initial: LanguageCode) {
        let _ = LOCALE_STATE.set(Self::new(initial));
    }

    /// Initialize the global state from the startup URL path.
    pub fn init_from_path(path: &str) {
        Self::init(resolve_from_path(path));
    }

    pub fn get() -> &'static LocaleState {
        LOCALE_STATE
            .get()
            .expect("LocaleState not initialized. Call LocaleState::init() at startup.")
    }

    pub fn try_get() -> Option<&'static LocaleState> {
        LOCALE_STATE.get()
    }

    pub fn locale(&self) -> LanguageCode {
        *self.locale.read().unwrap()
    }

    pub fn set_locale(&self, code: LanguageCode) {
        let mut cur = self.locale.write().unwrap();
        if *cur == code {
            return;
        }
        debug!("LocaleState::set_locale: {} -> {}", *cur, code);
        *cur = code;
        drop(cur);

        trigger_redraw();
    }

    /// Set the locale from a raw language tag.
    ///
    /// Unknown tags are silently ignored; a malformed prefix or a bad
    /// argument is never an error, the previous locale just stays active.
    pub fn set_locale_tag(&self, tag: &str) {
        match LanguageCode::from_tag(tag) {
            Some(code) => self.set_locale(code),
            None => debug!("LocaleState::set_locale_tag: ignoring unknown tag {tag:?}"),
        }
    }

    /// Re-resolve the locale from a URL path. The routing layer calls this on
    /// every navigation, before the view renders.
    pub fn apply_path(&self, path: &str) {
        self.set_locale(resolve_from_path(path));
    }

    /// Load a parsed catalog for a language.
    pub fn load_catalog(&self, code: LanguageCode, catalog: Catalog) {
        self.catalogs.write().unwrap().insert(code, catalog);
    }

    /// Parse and load a JSON catalog for a language.
    pub fn load_catalog_str(&self, code: LanguageCode, src: &str) -> Result<(), CatalogError> {
        let cat = Catalog::parse(src)?;
        self.load_catalog(code, cat);
        Ok(())
    }

    /// Translate a key using the fallback chain:
    /// current language -> default language -> the raw key.
    pub fn translate(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(s) => s,
            None => {
                debug!("missing translation for {key:?}, showing the key");
                key.to_string()
            }
        }
    }

    /// Like [`translate`](Self::translate), but a miss yields the provided
    /// fallback text instead of the raw key.
    pub fn translate_or(&self, key: &str, fallback: &str) -> String {
        match self.lookup(key) {
            Some(s) => s,
            None => {
                debug!("missing translation for {key:?}, showing fallback text");
                fallback.to_string()
            }
        }
    }

    fn lookup(&self, key: &str) -> Option<String> {
        let locale = self.locale();
        let catalogs = self.catalogs.read().unwrap();

        if let Some(s) = catalogs.get(&locale).and_then(|c| c.lookup(key)) {
            return Some(s.to_string());
        }
        if locale != LanguageCode::DEFAULT {
            if let Some(s) = catalogs
                .get(&LanguageCode::DEFAULT)
                .and_then(|c| c.lookup(key))
            {
                return Some(s.to_string());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state_with_catalogs() -> LocaleState {
        let state = LocaleState::new(LanguageCode::En);
        state
            .load_catalog_str(
                LanguageCode::En,
                r#"{ "projects": "Projects", "aboutMe": "About me" }"#,
            )
            .unwrap();
        state
            .load_catalog_str(LanguageCode::Fr, r#"{ "projects": "Projets" }"#)
            .unwrap();
        state
    }

    #[test]
    fn translate_uses_current_locale() {
        let state = state_with_catalogs();
        assert_eq!(state.translate("projects"), "Projects");

        state.set_locale(LanguageCode::Fr);
        assert_eq!(state.translate("projects"), "Projets");
    }

    #[test]
    fn incomplete_language_falls_back_to_default() {
        let state = state_with_catalogs();
        state.set_locale(LanguageCode::Fr);
        // Not in the French catalog, present in the default one.
        assert_eq!(state.translate("aboutMe"), "About me");
    }

    #[test]
    fn unresolved_key_degrades_to_key_or_fallback_text() {
        let state = state_with_catalogs();
        assert_eq!(state.translate("missing.key"), "missing.key");
        assert_eq!(state.translate_or("missing.key", "Oops"), "Oops");
        // The fallback text only applies on a miss.
        assert_eq!(state.translate_or("projects", "Oops"), "Projects");
    }

    #[test]
    fn default_catalog_entry_never_yields_the_raw_key() {
        let state = state_with_catalogs();
        for code in LanguageCode::ALL {
            state.set_locale(code);
            assert_ne!(state.translate("aboutMe"), "aboutMe", "locale {code}");
        }
    }

    #[test]
    fn unknown_tag_is_ignored() {
        let state = state_with_catalogs();
        state.set_locale_tag("fr");
        assert_eq!(state.locale(), LanguageCode::Fr);

        state.set_locale_tag("de");
        assert_eq!(state.locale(), LanguageCode::Fr);
        state.set_locale_tag("");
        assert_eq!(state.locale(), LanguageCode::Fr);
    }

    #[test]
    fn apply_path_tracks_navigation() {
        let state = state_with_catalogs();
        state.apply_path("/fr/projects");
        assert_eq!(state.locale(), LanguageCode::Fr);

        state.apply_path("/unknown/page");
        assert_eq!(state.locale(), LanguageCode::En);
    }
}
