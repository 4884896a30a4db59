//! Loading themes from TOML files

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Theme;
use crate::error::{Error, Result};
use crate::style::{Color, Decoration, Style};

/// Environment variable naming a theme file for [`Theme::from_env`]
pub const THEME_ENV_VAR: &str = "TESSERA_THEME";

const INLINE_SOURCE: &str = "<inline>";

/// On-disk layout of a theme file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeFile {
    #[serde(default)]
    pub styles: BTreeMap<String, StyleEntry>,
}

/// One `[styles."name"]` table; omitted keys inherit
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StyleEntry {
    #[serde(default)]
    pub fg: Option<String>,
    #[serde(default)]
    pub bg: Option<String>,
    #[serde(default)]
    pub bold: Option<bool>,
    #[serde(default)]
    pub underline: Option<bool>,
    #[serde(default)]
    pub reverse: Option<bool>,
}

impl StyleEntry {
    fn to_style(&self, name: &str) -> Result<Style> {
        let color = |value: &Option<String>| -> Result<Option<Color>> {
            match value {
                None => Ok(None),
                Some(raw) => Color::parse(raw).map(Some).ok_or_else(|| Error::InvalidColor {
                    style: name.to_string(),
                    value: raw.clone(),
                }),
            }
        };
        let decoration = |flag: Option<bool>| flag.map_or(Decoration::Inherit, Decoration::from_bool);

        Ok(Style {
            fg: color(&self.fg)?,
            bg: color(&self.bg)?,
            bold: decoration(self.bold),
            underline: decoration(self.underline),
            reverse: decoration(self.reverse),
        })
    }
}

impl ThemeFile {
    /// Convert parsed entries into a theme, validating colors
    pub fn into_theme(self) -> Result<Theme> {
        let mut theme = Theme::new();
        for (name, entry) in &self.styles {
            let style = entry.to_style(name)?;
            theme.set_style(name.clone(), style);
        }
        Ok(theme)
    }
}

fn parse(content: &str, path: &Path) -> Result<Theme> {
    let file: ThemeFile = toml::from_str(content).map_err(|source| Error::ThemeParse {
        path: path.to_path_buf(),
        source,
    })?;
    file.into_theme()
}

impl Theme {
    /// Parse a theme from TOML text
    ///
    /// The result holds only the entries in `content`; use [`Theme::load`] to
    /// merge over the built-in theme.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse(content, Path::new(INLINE_SOURCE))
    }

    /// Load a theme file and merge its entries over the built-in theme
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ThemeRead {
            path: path.to_path_buf(),
            source,
        })?;
        let loaded = parse(&content, path)?;
        debug!(path = %path.display(), styles = loaded.len(), "loaded theme");

        let mut theme = Theme::default_theme().clone();
        theme.extend(loaded);
        Ok(theme)
    }

    /// Load the theme named by `TESSERA_THEME`, or the built-in theme when unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(THEME_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(PathBuf::from(path)),
            _ => {
                debug!("{} not set, using built-in theme", THEME_ENV_VAR);
                Ok(Theme::default_theme().clone())
            }
        }
    }
}
