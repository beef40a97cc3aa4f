//! Viewer preferences with defaults.
//!
//! We look for a folio.toml in the working directory and, if present, load settings from there.
//! Every field has a default, so an empty or partial file is fine; command-line flags override
//! whatever is loaded here.

use crate::error::{FolioError, Result};
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from folio.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "system".to_string())]
    /// Theme mode: `light`, `dark` or `system`.
    pub theme: String,
    #[facet(default = "default".to_string())]
    /// Colour preset name.
    pub color: String,
    #[facet(default = "default".to_string())]
    /// Background style name.
    pub background: String,
    #[facet(default = 100)]
    /// Terminals narrower than this many columns get the compact navigation menu.
    pub compact_width: u16,
    #[facet(default = 3)]
    /// Lines moved per scroll key press or wheel notch.
    pub scroll_step: usize,
    #[facet(default = 33)]
    /// Milliseconds between animation ticks.
    pub tick_ms: u64,
    #[facet(default = true)]
    /// Whether the pointer follower is drawn.
    pub cursor: bool,
    #[facet(default)]
    /// Section ids to track, in page order. Empty means every section in the document.
    pub sections: Vec<String>,
}

impl Config {
    /// Loads folio.toml from the working directory, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads configuration from `path`, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config = Self::parse(&contents).map_err(|message| FolioError::Config {
                    path: path.to_path_buf(),
                    message,
                })?;
                tracing::info!(path = %path.display(), "loaded configuration");
                Ok(config)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::defaults(),
            Err(e) => Err(e.into()),
        }
    }

    /// Every field at its default.
    ///
    /// # Errors
    ///
    /// Returns an error only if the field defaults themselves fail to deserialise.
    pub fn defaults() -> Result<Self> {
        Self::parse("").map_err(|message| FolioError::Config {
            path: CONFIG_FILE.into(),
            message,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
