use crate::language::LanguageCode;

/// Pick a supported language from an ordered preference list, as reported by
/// the host (browser `navigator.languages`, `Accept-Language`, OS settings).
///
/// Tags are normalized before matching: `_` becomes `-` and only the primary
/// subtag counts, case-insensitively, so `"fr_BE"`, `"FR"` and `"fr-FR"` all
/// select French. Returns `None` when nothing in the list is supported;
/// callers then stay on [`LanguageCode::DEFAULT`].
pub fn detect_preferred<S: AsRef<str>>(tags: &[S]) -> Option<LanguageCode> {
    tags.iter()
        .filter_map(|tag| primary_subtag(tag.as_ref()))
        .find_map(|primary| LanguageCode::from_tag(&primary))
}

fn primary_subtag(tag: &str) -> Option<String> {
    let normalized = tag.trim().replace('_', "-");
    let primary = normalized.split('-').next()?;
    if primary.is_empty() {
        return None;
    }
    Some(primary.to_ascii_lowercase())
}
