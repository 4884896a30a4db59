//! Themes: a flat table from style name to style overlay

mod config;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::warn;

use crate::style::Style;

pub use config::{StyleEntry, ThemeFile, THEME_ENV_VAR};

const DEFAULT_THEME: &str = include_str!("default.toml");

/// Named style overlays looked up by widgets while drawing
///
/// Names are dotted by convention (`list.item.selected`), but lookup is a
/// plain exact match: there is no fallback from `a.b` to `a`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    styles: BTreeMap<String, Style>,
}

impl Theme {
    /// Create an empty theme where every name resolves to the inherit style
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in theme, parsed once on first use
    pub fn default_theme() -> &'static Theme {
        static DEFAULT: OnceLock<Theme> = OnceLock::new();
        DEFAULT.get_or_init(|| {
            Theme::from_toml_str(DEFAULT_THEME).unwrap_or_else(|err| {
                warn!(error = %err, "built-in theme failed to parse, using empty theme");
                Theme::new()
            })
        })
    }

    /// Set (or replace) the style registered under `name`
    pub fn set_style(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    /// Builder form of [`Theme::set_style`]
    pub fn with_style(mut self, name: impl Into<String>, style: Style) -> Self {
        self.set_style(name, style);
        self
    }

    /// Look up a style; unknown names resolve to the all-inherit style
    pub fn style(&self, name: &str) -> Style {
        self.styles.get(name).copied().unwrap_or_default()
    }

    /// Check if a style is registered under `name`
    pub fn has_style(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Registered style names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Number of registered styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if no styles are registered
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Lay every entry of `other` over this theme
    ///
    /// Entries are replaced whole, not field by field.
    pub fn extend(&mut self, other: Theme) {
        self.styles.extend(other.styles);
    }
}
