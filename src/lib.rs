//! folio: a single-page portfolio viewer for the terminal.
//!
//! A markdown document is split into sections at its headings, laid out as one long scrolling
//! page, and paired with a navigation bar whose highlight follows the section currently on
//! screen. Activating an entry scrolls its section into view.

/// Viewer state and the host side of section navigation.
pub mod app_state;
/// Decorative animated backgrounds.
pub mod background;
/// Configuration loaded from folio.toml.
pub mod config;
/// Pointer follower decorations.
pub mod cursor;
/// Parsing portfolio markdown.
pub mod document;
/// Error type and result alias.
pub mod error;
/// Document formats and their tree-sitter queries.
pub mod formats;
/// Skill icons.
pub mod icons;
/// Laying the page out into lines.
pub mod layout;
/// Log file setup.
pub mod logging;
/// Navigation entries and menu state.
pub mod nav;
/// Section and entry types.
pub mod section;
/// Session snapshot.
pub mod session;
/// Theme mode and colour presets.
pub mod theme;
/// Active-section tracking.
pub mod tracker;
/// Frame rendering.
pub mod ui;
/// Viewport visibility measurement.
pub mod viewport;
