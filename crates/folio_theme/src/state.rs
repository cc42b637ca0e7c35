use std::sync::{Mutex, OnceLock, RwLock};

use tracing::debug;

use crate::mode::{ColorMode, ColorScheme};

/// Global theme state instance.
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global repaint callback - set by the host to reapply the document class
/// when the resolved scheme changes.
static REPAINT_CALLBACK: Mutex<Option<fn(ColorScheme)>> = Mutex::new(None);

/// Set the repaint callback function.
///
/// The host typically toggles a `dark` class on the document root here.
pub fn set_repaint_callback(callback: fn(ColorScheme)) {
    *REPAINT_CALLBACK.lock().unwrap() = Some(callback);
}

fn trigger_repaint(scheme: ColorScheme) {
    if let Some(cb) = *REPAINT_CALLBACK.lock().unwrap() {
        cb(scheme);
    }
}

/// Runtime color-mode state.
///
/// The preference is the single source of truth; `is_dark` is a derived
/// projection and is never stored on its own. The system scheme is an input
/// fed in by the host (its media-query listener), not a preference.
pub struct ThemeState {
    preference: RwLock<ColorMode>,
    system: RwLock<ColorScheme>,
}

impl ThemeState {
    /// A fresh, non-global state. Tests construct these directly; production
    /// code goes through [`ThemeState::init`].
    pub fn new(preference: ColorMode, system: ColorScheme) -> Self {
        Self {
            preference: RwLock::new(preference),
            system: RwLock::new(system),
        }
    }

    /// Initialize the global theme state.
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(preference: ColorMode, system: ColorScheme) {
        let _ = THEME_STATE.set(Self::new(preference, system));
    }

    /// Initialize with the site defaults: follow the system, assume light
    /// until the host reports otherwise.
    pub fn init_default() {
        Self::init(ColorMode::System, ColorScheme::Light);
    }

    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at startup.")
    }

    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    pub fn preference(&self) -> ColorMode {
        *self.preference.read().unwrap()
    }

    /// The last host-reported system scheme, regardless of the preference.
    /// What `System` currently resolves from, even under an explicit override.
    pub fn system_scheme(&self) -> ColorScheme {
        *self.system.read().unwrap()
    }

    /// The scheme actually in effect: an explicit preference wins, `System`
    /// defers to the host-reported scheme.
    pub fn scheme(&self) -> ColorScheme {
        match self.preference() {
            ColorMode::Light => ColorScheme::Light,
            ColorMode::Dark => ColorScheme::Dark,
            ColorMode::System => *self.system.read().unwrap(),
        }
    }

    /// Derived read-only projection of [`scheme`](Self::scheme).
    pub fn is_dark(&self) -> bool {
        self.scheme() == ColorScheme::Dark
    }

    pub fn set_preference(&self, preference: ColorMode) {
        let before = self.scheme();

        let mut cur = self.preference.write().unwrap();
        if *cur == preference {
            return;
        }
        debug!("ThemeState::set_preference: {} -> {}", cur.as_str(), preference.as_str());
        *cur = preference;
        drop(cur);

        let after = self.scheme();
        if before != after {
            trigger_repaint(after);
        }
    }

    /// Feed in the host-reported system scheme. Repaints only when the
    /// preference is `System` and the resolved scheme actually changed.
    pub fn set_system_scheme(&self, scheme: ColorScheme) {
        let before = self.scheme();

        let mut cur = self.system.write().unwrap();
        if *cur == scheme {
            return;
        }
        *cur = scheme;
        drop(cur);

        let after = self.scheme();
        if before != after {
            trigger_repaint(after);
        }
    }

    /// Flip between explicit light and dark, anchored on what is currently
    /// on screen. Leaving `System` is intentional: a manual toggle is an
    /// explicit choice.
    pub fn toggle(&self) {
        let next = if self.is_dark() {
            ColorMode::Light
        } else {
            ColorMode::Dark
        };
        self.set_preference(next);
    }
}
