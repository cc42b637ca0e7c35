use serde::{Deserialize, Serialize};

/// The stored appearance preference. `System` defers to the host's reported
/// scheme; the explicit modes override it.
///
/// Serialized in lowercase so hosts can persist it as-is (`"system"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
            ColorMode::System => "system",
        }
    }
}

/// A resolved appearance: what is actually on screen right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// The class the host puts on the document root element, if any.
    pub fn html_class(self) -> Option<&'static str> {
        match self {
            ColorScheme::Light => None,
            ColorScheme::Dark => Some("dark"),
        }
    }
}
