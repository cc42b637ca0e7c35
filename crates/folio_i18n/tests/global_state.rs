//! Global singleton wiring: init-once semantics plus the redraw and
//! navigation callbacks.
//!
//! The globals are shared across the whole test process, so everything that
//! touches them lives in this single test, in its own test binary.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use folio_i18n::{
    set_navigate_callback, set_redraw_callback, switch_language, LanguageCode, LocaleState,
};

const EN: &str = include_str!("../../../resource/locales/en.json");
const FR: &str = include_str!("../../../resource/locales/fr.json");
const NL: &str = include_str!("../../../resource/locales/nl.json");

static REDRAWS: AtomicUsize = AtomicUsize::new(0);
static NAVIGATIONS: Mutex<Vec<String>> = Mutex::new(Vec::new());

fn on_redraw() {
    REDRAWS.fetch_add(1, Ordering::SeqCst);
}

fn on_navigate(path: &str) {
    NAVIGATIONS.lock().unwrap().push(path.to_string());
}

#[test]
fn global_state_wiring() {
    set_redraw_callback(on_redraw);
    set_navigate_callback(on_navigate);

    // Uninitialized state degrades to the key / fallback text.
    assert_eq!(folio_i18n::translate("projects"), "projects");
    assert_eq!(folio_i18n::translate_or("projects", "Projects"), "Projects");

    LocaleState::init_from_path("/fr/projects");
    let state = LocaleState::get();
    state.load_catalog_str(LanguageCode::En, EN).unwrap();
    state.load_catalog_str(LanguageCode::Fr, FR).unwrap();
    state.load_catalog_str(LanguageCode::Nl, NL).unwrap();

    assert_eq!(state.locale(), LanguageCode::Fr);
    assert_eq!(folio_i18n::translate("projects"), "Projets");
    assert_eq!(folio_i18n::t!("nav.home"), "Accueil");
    assert_eq!(folio_i18n::t!("nope.nope", "fallback text"), "fallback text");

    // Re-initialization is a no-op; the first call wins.
    LocaleState::init(LanguageCode::Nl);
    assert_eq!(state.locale(), LanguageCode::Fr);

    // A no-op switch does not redraw or navigate.
    let before = REDRAWS.load(Ordering::SeqCst);
    assert_eq!(switch_language(state, "/fr/projects", LanguageCode::Fr), None);
    assert_eq!(REDRAWS.load(Ordering::SeqCst), before);
    assert!(NAVIGATIONS.lock().unwrap().is_empty());

    // A real switch fires both.
    let next = switch_language(state, "/fr/projects", LanguageCode::Nl);
    assert_eq!(next.as_deref(), Some("/nl/projects"));
    assert_eq!(REDRAWS.load(Ordering::SeqCst), before + 1);
    assert_eq!(NAVIGATIONS.lock().unwrap().as_slice(), ["/nl/projects"]);

    // Setting the same locale again changes nothing observable.
    state.set_locale(LanguageCode::Nl);
    assert_eq!(REDRAWS.load(Ordering::SeqCst), before + 1);
}
