//! Errors surfaced while loading content and configuring the viewer.
//!
//! Nothing that happens once the page is on screen can fail: navigation to an unknown section
//! and visibility reports for absent regions are ignored rather than reported. What remains are
//! the setup failures below.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading portfolio content or building the viewer state.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The content file could not be read.
    #[error("Cannot read content file {path}: {source}")]
    ContentRead {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The markdown parser rejected the grammar or produced no tree.
    #[error("Markdown parse failed: {0}")]
    Parse(String),

    /// A tree-sitter query failed to compile.
    #[error("Invalid section query: {0}")]
    Query(#[from] tree_sitter::QueryError),

    /// Two sections resolved to the same id.
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    /// A section heading has no characters to build an id from.
    #[error("Section \"{0}\" has no usable id; add an explicit {{#id}} to its heading")]
    EmptySectionId(String),

    /// The document contains no level-2 sections.
    #[error("No sections found in document")]
    EmptyDocument,

    /// A tracker was constructed without any section ids.
    #[error("Section list is empty")]
    EmptySectionList,

    /// A colour preset name did not match any known preset.
    #[error("Unknown colour preset: {0}")]
    UnknownColor(String),

    /// A theme mode name was not light, dark or system.
    #[error("Unknown theme mode: {0}")]
    UnknownTheme(String),

    /// A background name did not match any known style.
    #[error("Unknown background: {0}")]
    UnknownBackground(String),

    /// The configuration file exists but could not be parsed.
    #[error("Invalid configuration in {path}: {message}")]
    Config {
        /// Configuration file that was read.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// Session output could not be serialised.
    #[error("Serialisation failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FolioError>;
