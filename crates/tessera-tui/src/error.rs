//! Error types for fallible toolkit operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by surfaces and theme loading
///
/// Layout, drawing and widget operations never fail; they clamp or ignore
/// out-of-range input instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing to or configuring the terminal failed
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme file could not be read
    #[error("failed to read theme {path}: {source}")]
    ThemeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A theme file is not valid TOML or does not match the theme schema
    #[error("failed to parse theme {path}: {source}")]
    ThemeParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A theme entry names a color that cannot be parsed
    #[error("invalid color '{value}' in style '{style}'")]
    InvalidColor { style: String, value: String },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
