//! Snapshot of the reader's choices, printed as JSON when the viewer exits.

use crate::error::Result;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// What the reader ended the session with.
pub struct Session {
    /// Theme mode name.
    pub theme: String,
    /// Colour preset name.
    pub color: String,
    /// Background style name.
    pub background: String,
    /// Section highlighted in the navigation bar, if any had become active.
    pub active_section: Option<String>,
}

impl Session {
    /// Pretty-printed JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
