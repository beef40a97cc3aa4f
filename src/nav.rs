//! Navigation entries and the state of the navigation menu.
//!
//! Wide terminals show every entry inline in the top bar. Narrow ones collapse them behind a menu
//! glyph that opens a drop-down list; that list is the transient menu a section activation
//! closes.

use ratatui::layout::{Position, Rect};

/// One entry of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Section id the entry activates.
    pub id: &'static str,
    /// Label shown in the bar.
    pub label: &'static str,
    /// Glyph shown in the drop-down list.
    pub icon: &'static str,
}

/// Glyph of the compact menu button, also used as its hit id.
pub const MENU_GLYPH: &str = "☰";

/// The page's navigation entries in order.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        id: "about",
        label: "About",
        icon: "⌘",
    },
    NavEntry {
        id: "skills",
        label: "Skills",
        icon: "⌘",
    },
    NavEntry {
        id: "projects",
        label: "Projects",
        icon: "⌘",
    },
    NavEntry {
        id: "certificates",
        label: "Certificates",
        icon: "★",
    },
    NavEntry {
        id: "achievements",
        label: "Achievements",
        icon: "★",
    },
    NavEntry {
        id: "experience",
        label: "Experience",
        icon: "▣",
    },
    NavEntry {
        id: "education",
        label: "Education",
        icon: "◭",
    },
    NavEntry {
        id: "contact",
        label: "Contact",
        icon: "✉",
    },
];

#[must_use]
/// Looks up the built-in entry for a section id.
pub fn entry_for(id: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES.iter().find(|e| e.id == id)
}

#[must_use]
/// Label for a section id, falling back to the id itself for sections without an entry.
pub fn label_for(id: &str) -> String {
    entry_for(id).map_or_else(|| id.to_string(), |e| e.label.to_string())
}

/// Open/closed state and layout of the navigation menu.
#[derive(Clone, Debug, Default)]
pub struct NavMenu {
    open: bool,
    compact: bool,
    focus: usize,
    hits: Vec<(Rect, String)>,
}

impl NavMenu {
    #[must_use]
    /// Whether the drop-down list is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    /// Whether the bar is collapsed behind the menu glyph.
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Chooses the compact layout when the terminal is narrower than `breakpoint` columns.
    ///
    /// Leaving the compact layout closes the drop-down.
    pub fn set_width(&mut self, width: u16, breakpoint: u16) {
        self.compact = width < breakpoint;
        if !self.compact {
            self.open = false;
        }
    }

    /// Opens or closes the drop-down list.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Opens the drop-down with focus on `index`.
    pub fn open_at(&mut self, index: usize) {
        self.open = true;
        self.focus = index;
    }

    /// Closes the drop-down list.
    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    /// Entry the keyboard focus is on inside the drop-down.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves keyboard focus down, wrapping over `len` entries.
    pub fn focus_next(&mut self, len: usize) {
        if len > 0 {
            self.focus = (self.focus + 1) % len;
        }
    }

    /// Moves keyboard focus up, wrapping over `len` entries.
    pub fn focus_prev(&mut self, len: usize) {
        if len > 0 {
            self.focus = (self.focus + len - 1) % len;
        }
    }

    /// Forgets the hit areas of the previous frame.
    pub fn clear_hits(&mut self) {
        self.hits.clear();
    }

    /// Records where an entry was drawn so clicks can be mapped back to it.
    pub fn record_hit(&mut self, area: Rect, id: &str) {
        self.hits.push((area, id.to_string()));
    }

    #[must_use]
    /// Section id of the entry drawn at a screen position.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<&str> {
        let position = Position::new(column, row);
        self.hits
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, id)| id.as_str())
    }
}

#[cfg(test)]
#[path = "tests/nav.rs"]
mod tests;
