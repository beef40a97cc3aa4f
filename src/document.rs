//! Loading a portfolio from markdown.
//!
//! The page structure comes straight from the heading tree: the level-1 heading names the owner,
//! the text under it is the introduction, each level-2 heading opens a section and each level-3
//! heading opens an entry within it. Headings are located with tree-sitter so that `#` characters
//! inside code spans or fenced blocks never split the page.

use crate::error::{FolioError, Result};
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::section::{slugify, split_explicit_id, Entry, Section};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

const BUILTIN: &str = include_str!("../content/portfolio.md");

#[derive(Clone, Debug, Serialize)]
/// A parsed single-page portfolio.
pub struct Portfolio {
    /// Owner name from the level-1 heading.
    pub name: String,
    /// Introduction between the level-1 heading and the first section.
    pub tagline: String,
    /// Sections in page order.
    pub sections: Vec<Section>,
}

struct Heading {
    level: usize,
    text: String,
    start: usize,
    end: usize,
}

impl Portfolio {
    /// Parses the portfolio bundled with the binary.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled content is malformed.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN)
    }

    /// Reads and parses a markdown file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not describe any section.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| FolioError::ContentRead {
            path: path.to_path_buf(),
            source,
        })?;
        let portfolio = Self::parse(&source)?;
        tracing::info!(
            path = %path.display(),
            sections = portfolio.sections.len(),
            "loaded portfolio"
        );
        Ok(portfolio)
    }

    /// Parses markdown source into a portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails, if no level-2 heading exists, if a heading yields an
    /// empty id, or if two sections share an id.
    pub fn parse(source: &str) -> Result<Self> {
        let headings = extract_headings(source, &MarkdownFormat)?;

        let mut name = String::new();
        let mut tagline = String::new();
        let mut sections: Vec<Section> = Vec::new();
        let mut seen = HashSet::new();

        for (i, heading) in headings.iter().enumerate() {
            // Body runs until the next heading that opens a section or entry.
            let body_end = headings[i + 1..]
                .iter()
                .find(|h| h.level <= 3)
                .map_or(source.len(), |h| h.start);
            let body = source[heading.end.min(body_end)..body_end].trim().to_string();

            match heading.level {
                1 if name.is_empty() && sections.is_empty() => {
                    name = heading.text.clone();
                    tagline = body;
                }
                2 => {
                    let (title, explicit) = split_explicit_id(&heading.text);
                    let id = explicit.unwrap_or_else(|| slugify(&title));
                    if id.is_empty() {
                        return Err(FolioError::EmptySectionId(title));
                    }
                    if !seen.insert(id.clone()) {
                        return Err(FolioError::DuplicateSection(id));
                    }
                    let byte_end = headings[i + 1..]
                        .iter()
                        .find(|h| h.level <= 2)
                        .map_or(source.len(), |h| h.start);
                    sections.push(Section {
                        id,
                        title,
                        body,
                        entries: Vec::new(),
                        byte_start: heading.start,
                        byte_end,
                    });
                }
                3 => {
                    if let Some(section) = sections.last_mut() {
                        section.entries.push(Entry {
                            title: split_explicit_id(&heading.text).0,
                            body,
                        });
                    }
                }
                _ => {}
            }
        }

        if sections.is_empty() {
            return Err(FolioError::EmptyDocument);
        }

        Ok(Self {
            name,
            tagline,
            sections,
        })
    }

    #[must_use]
    /// Section ids in page order.
    pub fn ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    #[must_use]
    /// Looks up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

fn extract_headings(source: &str, format: &impl Format) -> Result<Vec<Heading>> {
    let language = format.language();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| FolioError::Parse(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| FolioError::Parse("parser returned no tree".to_string()))?;

    let query = Query::new(&language, format.section_query())?;
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());

    let mut headings = Vec::new();
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            let Some(level) = format.heading_level(&node) else {
                continue;
            };
            let text = format
                .heading_text(&node)
                .and_then(|inline| inline.utf8_text(source.as_bytes()).ok())
                .unwrap_or_default()
                .trim()
                .to_string();

            headings.push(Heading {
                level,
                text,
                start: node.start_byte(),
                end: node.end_byte(),
            });
        }
    }

    headings.sort_by_key(|h| h.start);
    Ok(headings)
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
