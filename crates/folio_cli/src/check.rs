//! Locale catalog validation for content authors.
//!
//! The default language is the reference: every translation key must exist
//! there. Other languages may lag behind; runtime lookup falls back, so a
//! missing key is a warning, not an error.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use folio_i18n::{Catalog, LanguageCode};

/// Outcome of diffing every language's catalog against the default one.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Keys the default language covers but this language does not.
    /// Harmless at runtime (fallback applies); worth fixing for content.
    pub incomplete: Vec<(LanguageCode, String)>,
    /// Keys some language has but the default language does not. These break
    /// the fallback guarantee and fail the check.
    pub missing_in_default: Vec<(LanguageCode, String)>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.missing_in_default.is_empty()
    }
}

/// Load `<code>.json` for every configured language from `dir` and diff them.
pub fn check_dir(dir: &Path) -> Result<CheckReport> {
    let mut catalogs = Vec::new();
    for code in LanguageCode::ALL {
        let path = dir.join(format!("{code}.json"));
        let src = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let catalog = Catalog::parse(&src)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::debug!(
            "loaded {} with {} translation keys",
            path.display(),
            catalog.string_paths().len()
        );
        catalogs.push((code, catalog));
    }
    Ok(check_catalogs(&catalogs))
}

pub fn check_catalogs(catalogs: &[(LanguageCode, Catalog)]) -> CheckReport {
    let default_keys: BTreeSet<String> = catalogs
        .iter()
        .find(|(code, _)| code.is_default())
        .map(|(_, cat)| cat.string_paths().into_iter().collect())
        .unwrap_or_default();

    let mut report = CheckReport::default();
    for (code, catalog) in catalogs {
        if code.is_default() {
            continue;
        }
        let keys: BTreeSet<String> = catalog.string_paths().into_iter().collect();
        for key in default_keys.difference(&keys) {
            report.incomplete.push((*code, key.clone()));
        }
        for key in keys.difference(&default_keys) {
            report.missing_in_default.push((*code, key.clone()));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog(src: &str) -> Catalog {
        Catalog::parse(src).unwrap()
    }

    #[test]
    fn incomplete_languages_are_warnings_only() {
        let report = check_catalogs(&[
            (
                LanguageCode::En,
                catalog(r#"{ "a": "A", "b": { "c": "C" } }"#),
            ),
            (LanguageCode::Fr, catalog(r#"{ "a": "Ah" }"#)),
            (
                LanguageCode::Nl,
                catalog(r#"{ "a": "Aa", "b": { "c": "Cee" } }"#),
            ),
        ]);

        assert!(report.is_ok());
        assert_eq!(
            report.incomplete,
            vec![(LanguageCode::Fr, "b.c".to_string())]
        );
    }

    #[test]
    fn keys_absent_from_the_default_language_fail() {
        let report = check_catalogs(&[
            (LanguageCode::En, catalog(r#"{ "a": "A" }"#)),
            (LanguageCode::Fr, catalog(r#"{ "a": "Ah", "extra": "Eh" }"#)),
            (LanguageCode::Nl, catalog(r#"{ "a": "Aa" }"#)),
        ]);

        assert!(!report.is_ok());
        assert_eq!(
            report.missing_in_default,
            vec![(LanguageCode::Fr, "extra".to_string())]
        );
    }

    #[test]
    fn site_catalogs_pass() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../resource/locales");
        let report = check_dir(&dir).unwrap();
        assert!(report.is_ok());
        // nl.json intentionally lags on contact.cta.
        assert_eq!(
            report.incomplete,
            vec![(LanguageCode::Nl, "contact.cta".to_string())]
        );
    }
}
