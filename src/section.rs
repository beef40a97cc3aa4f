//! Section representation for a parsed portfolio.
//!
//! A section is one addressable region of the page, introduced by a level-2 heading. Its
//! level-3 headings become entries: one project, one certificate, one job.

use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
/// Addressable page region introduced by a level-2 heading.
pub struct Section {
    /// Stable identifier used for navigation and visibility tracking.
    pub id: String,
    /// Heading text without markup or the explicit `{#id}` suffix.
    pub title: String,
    /// Markdown between the heading and the first entry.
    pub body: String,
    /// Level-3 subdivisions in document order.
    pub entries: Vec<Entry>,
    /// Byte offset of the heading in the source document.
    pub byte_start: usize,
    /// Byte offset where the next section begins or the document ends.
    pub byte_end: usize,
}

#[derive(Clone, Debug, Serialize)]
/// A single item within a section, introduced by a level-3 heading.
pub struct Entry {
    /// Heading text of the entry.
    pub title: String,
    /// Markdown body, including any deeper headings.
    pub body: String,
}

#[must_use]
/// Derives a section id from heading text.
///
/// ASCII letters and digits are kept lowercased; every other run of characters becomes a single
/// `-`, and leading or trailing dashes are dropped.
/// Text with no ASCII letters or digits gives an empty slug.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[must_use]
/// Splits a trailing `{#id}` attribute off heading text.
///
/// Returns the remaining title and the explicit id, if one was given.
pub fn split_explicit_id(text: &str) -> (String, Option<String>) {
    let trimmed = text.trim();
    if let Some(stripped) = trimmed.strip_suffix('}') {
        if let Some(open) = stripped.rfind("{#") {
            let id = stripped[open + 2..].trim();
            if !id.is_empty() && !id.contains(char::is_whitespace) {
                return (stripped[..open].trim().to_string(), Some(id.to_string()));
            }
        }
    }
    (trimmed.to_string(), None)
}
