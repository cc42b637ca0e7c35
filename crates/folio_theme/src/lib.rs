//! folio color-mode state
//!
//! Dark/light theming for the site, host-agnostic:
//! - [`ColorMode`] is the stored preference (light, dark, or follow the
//!   system); [`ColorScheme`] is what is actually on screen
//! - [`ThemeState`] resolves the two and exposes `is_dark()` as a derived
//!   projection, never as independent state
//! - The host feeds system scheme changes in and reacts to resolved changes
//!   through a registered repaint callback (toggling a `dark` class on the
//!   document root)

mod mode;
mod state;

pub use mode::{ColorMode, ColorScheme};
pub use state::{set_repaint_callback, ThemeState};
