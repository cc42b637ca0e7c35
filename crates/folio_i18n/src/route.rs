use std::sync::Mutex;

use tracing::debug;

use crate::language::{languages, LanguageCode};
use crate::state::LocaleState;

/// Global navigation callback - set by the host to perform the actual
/// page load when the user switches language.
///
/// The registered function receives the target path and is expected to
/// trigger a full page load; navigation is fire-and-forget and never
/// reported back to this module.
static NAVIGATE_CALLBACK: Mutex<Option<fn(&str)>> = Mutex::new(None);

pub fn set_navigate_callback(callback: fn(&str)) {
    *NAVIGATE_CALLBACK.lock().unwrap() = Some(callback);
}

fn trigger_navigate(path: &str) {
    if let Some(cb) = *NAVIGATE_CALLBACK.lock().unwrap() {
        cb(path);
    }
}

/// Determine the intended language from a URL path.
///
/// The first path segment is matched case-sensitively against the configured
/// non-default prefixes; anything else is the default-language case, never an
/// error.
pub fn resolve_from_path(path: &str) -> LanguageCode {
    let Some(first) = path.split('/').find(|seg| !seg.is_empty()) else {
        return LanguageCode::DEFAULT;
    };

    languages()
        .iter()
        .filter(|cfg| !cfg.prefix.is_empty())
        .find(|cfg| cfg.prefix.strip_prefix('/') == Some(first))
        .map(|cfg| cfg.code)
        .unwrap_or(LanguageCode::DEFAULT)
}

/// Compute the URL for the same page in another language.
///
/// Any existing language prefix is stripped (at most one can match, the
/// prefixes are disjoint), then the target prefix is prepended unless the
/// target is the default language. The root path becomes the bare prefix
/// rather than `"/fr/"`.
pub fn rewrite_path(current_path: &str, target: LanguageCode) -> String {
    let stripped = strip_language_prefix(current_path);
    let stripped = if stripped.is_empty() { "/" } else { stripped };

    let prefix = target.config().prefix;
    if prefix.is_empty() {
        return stripped.to_string();
    }
    if stripped == "/" {
        return prefix.to_string();
    }
    if stripped.starts_with('/') {
        format!("{prefix}{stripped}")
    } else {
        format!("{prefix}/{stripped}")
    }
}

fn strip_language_prefix(path: &str) -> &str {
    for cfg in languages().iter().filter(|cfg| !cfg.prefix.is_empty()) {
        if path == cfg.prefix {
            return "";
        }
        if let Some(rest) = path.strip_prefix(cfg.prefix) {
            // "/fr/..." strips, "/france" does not.
            if rest.starts_with('/') {
                return rest;
            }
        }
    }
    path
}

/// Switch the displayed language, keeping the current page.
///
/// Computes the rewritten path; when it differs from `current_path`, updates
/// the locale state and hands the new path to the navigation callback.
/// Switching to the already-active language is a no-op: no state change, no
/// navigation, no redundant history entry.
///
/// Returns the path navigation was requested for, or `None` for the no-op
/// case.
pub fn switch_language(
    state: &LocaleState,
    current_path: &str,
    target: LanguageCode,
) -> Option<String> {
    let next = rewrite_path(current_path, target);
    if next == current_path {
        debug!("switch_language: already on {target}, skipping navigation");
        return None;
    }

    state.set_locale(target);
    trigger_navigate(&next);
    Some(next)
}
