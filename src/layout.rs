//! Flowing a portfolio into terminal lines.
//!
//! The whole page is laid out up front for the current terminal width: a short hero block, then
//! every section with its entries. Alongside the styled lines the layout records each section's
//! line range, which is what the viewport observer measures visibility against.

use crate::document::Portfolio;
use crate::icons::{icon_for, DEFAULT_ICON};
use crate::section::Section;
use crate::theme::Palette;
use crate::viewport::Region;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Blank columns to the left of all page text.
pub const MARGIN: usize = 2;

/// Extra indent applied to entry bodies.
const ENTRY_INDENT: usize = 2;

/// A laid-out page.
#[derive(Clone, Debug, Default)]
pub struct Page {
    /// Styled lines, top to bottom.
    pub lines: Vec<Line<'static>>,
    /// Line range of each section, in page order.
    pub regions: Vec<Region>,
    /// Width the page was laid out for.
    pub width: usize,
}

impl Page {
    #[must_use]
    /// Total number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    /// Whether the page has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    /// Region of the section with this id.
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    #[must_use]
    /// Ids of every laid-out section.
    pub fn region_ids(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.id.as_str()).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Token {
    text: String,
    style: Style,
    space_before: bool,
}

#[must_use]
/// Lays out the whole portfolio for a terminal `width` columns wide.
pub fn layout(portfolio: &Portfolio, width: usize, palette: &Palette) -> Page {
    let text_width = width.saturating_sub(MARGIN * 2).max(20);
    let mut lines = Vec::new();

    if !portfolio.name.is_empty() {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(MARGIN)),
            Span::styled(
                portfolio.name.clone(),
                Style::new()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    if !portfolio.tagline.is_empty() {
        let muted = Style::new().fg(palette.muted);
        render_markdown(&portfolio.tagline, text_width, 0, muted, palette, &mut lines);
    }
    if !lines.is_empty() {
        lines.push(Line::default());
    }

    let mut regions = Vec::with_capacity(portfolio.sections.len());
    for section in &portfolio.sections {
        let start = lines.len();
        layout_section(section, text_width, palette, &mut lines);
        regions.push(Region {
            id: section.id.clone(),
            start,
            end: lines.len(),
        });
    }

    Page {
        lines,
        regions,
        width,
    }
}

fn layout_section(
    section: &Section,
    width: usize,
    palette: &Palette,
    lines: &mut Vec<Line<'static>>,
) {
    let heading = Style::new()
        .fg(palette.primary)
        .add_modifier(Modifier::BOLD);
    let body = Style::new().fg(palette.foreground);

    lines.push(Line::from(vec![
        Span::raw(" ".repeat(MARGIN)),
        Span::styled("━━ ", Style::new().fg(palette.primary)),
        Span::styled(section.title.clone(), heading),
    ]));
    lines.push(Line::default());

    if !section.body.is_empty() {
        render_markdown(&section.body, width, 0, body, palette, lines);
        lines.push(Line::default());
    }

    for entry in &section.entries {
        let prefix = [Span::styled("▸ ", Style::new().fg(palette.primary))];
        let tokens = tokenize(&entry.title, body.add_modifier(Modifier::BOLD), palette);
        wrap_tokens(&tokens, width, MARGIN, &prefix, lines);

        if !entry.body.is_empty() {
            render_markdown(&entry.body, width, ENTRY_INDENT, body, palette, lines);
        }
        lines.push(Line::default());
    }

    lines.push(Line::default());
}

/// Renders a markdown body: paragraphs, bullets, metadata lines, fenced code and minor headings.
fn render_markdown(
    text: &str,
    width: usize,
    indent: usize,
    base: Style,
    palette: &Palette,
    lines: &mut Vec<Line<'static>>,
) {
    let lead = MARGIN + indent;
    let width = width.saturating_sub(indent).max(10);
    let start = lines.len();
    let mut paragraph = String::new();
    let mut in_fence = false;

    let flush = |paragraph: &mut String, lines: &mut Vec<Line<'static>>| {
        if !paragraph.is_empty() {
            let tokens = tokenize(paragraph, base, palette);
            wrap_tokens(&tokens, width, lead, &[], lines);
            paragraph.clear();
        }
    };

    for raw in text.lines() {
        let line = raw.trim();

        if line.starts_with("```") {
            flush(&mut paragraph, lines);
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(lead + 2)),
                Span::styled(raw.to_string(), Style::new().fg(palette.muted)),
            ]));
            continue;
        }

        if line.is_empty() {
            flush(&mut paragraph, lines);
            if lines.len() > start && lines.last().is_some_and(|l| !l.spans.is_empty()) {
                lines.push(Line::default());
            }
            continue;
        }

        if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            flush(&mut paragraph, lines);
            let glyph = icon_for(item).unwrap_or(DEFAULT_ICON);
            let bullet = format!("{glyph} ");
            let prefix = [Span::styled(bullet, Style::new().fg(palette.primary))];
            let tokens = tokenize(item, base, palette);
            wrap_tokens(&tokens, width, lead, &prefix, lines);
            continue;
        }

        if let Some(metadata) = metadata_text(line) {
            flush(&mut paragraph, lines);
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(lead)),
                Span::styled(
                    metadata.to_string(),
                    Style::new()
                        .fg(palette.muted)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]));
            continue;
        }

        if line.starts_with('#') {
            flush(&mut paragraph, lines);
            let title = line.trim_start_matches('#').trim();
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(lead)),
                Span::styled(title.to_string(), base.add_modifier(Modifier::BOLD)),
            ]));
            continue;
        }

        if !paragraph.is_empty() {
            paragraph.push(' ');
        }
        paragraph.push_str(line);
    }

    flush(&mut paragraph, lines);
    while lines.len() > start && lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }
}

/// Text of a line wholly wrapped in single `*` or `_`, such as a date.
fn metadata_text(line: &str) -> Option<&str> {
    if line.len() < 3 || line.starts_with("**") || line.starts_with("__") {
        return None;
    }
    ['*', '_'].into_iter().find_map(|mark| {
        line.strip_prefix(mark)
            .and_then(|rest| rest.strip_suffix(mark))
            .filter(|inner| !inner.contains(mark))
    })
}

/// Splits inline markdown into words, honouring `**bold**` and `` `tag` `` spans.
fn tokenize(text: &str, base: Style, palette: &Palette) -> Vec<Token> {
    let badge = Style::new().fg(palette.primary).bg(palette.secondary);
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut pending_space = false;
    let mut bold = false;
    let mut chars = text.chars().peekable();

    let push_word = |tokens: &mut Vec<Token>, word: &mut String, pending: &mut bool, bold: bool| {
        if word.is_empty() {
            return;
        }
        let style = if bold {
            base.add_modifier(Modifier::BOLD)
        } else {
            base
        };
        tokens.push(Token {
            text: std::mem::take(word),
            style,
            space_before: *pending,
        });
        *pending = false;
    };

    while let Some(c) = chars.next() {
        match c {
            '`' => {
                push_word(&mut tokens, &mut word, &mut pending_space, bold);
                let code: String = chars.by_ref().take_while(|c| *c != '`').collect();
                tokens.push(Token {
                    text: format!(" {} ", code.trim()),
                    style: badge,
                    space_before: pending_space,
                });
                pending_space = false;
            }
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                push_word(&mut tokens, &mut word, &mut pending_space, bold);
                bold = !bold;
            }
            c if c.is_whitespace() => {
                push_word(&mut tokens, &mut word, &mut pending_space, bold);
                pending_space = true;
            }
            c => word.push(c),
        }
    }
    push_word(&mut tokens, &mut word, &mut pending_space, bold);

    tokens
}

/// Greedily wraps tokens into lines of at most `width` columns after a `lead` margin.
///
/// `prefix` is drawn before the first line; continuation lines are indented to match it.
fn wrap_tokens(
    tokens: &[Token],
    width: usize,
    lead: usize,
    prefix: &[Span<'static>],
    lines: &mut Vec<Line<'static>>,
) {
    let prefix_width: usize = prefix.iter().map(|s| s.content.width()).sum();
    let start_line = |first: bool| {
        let mut spans = vec![Span::raw(" ".repeat(lead))];
        if first {
            spans.extend(prefix.iter().cloned());
        } else if prefix_width > 0 {
            spans.push(Span::raw(" ".repeat(prefix_width)));
        }
        spans
    };

    let mut spans = start_line(true);
    let mut used = prefix_width;
    let mut empty = true;

    let room = width.saturating_sub(prefix_width);
    for token in tokens.iter().flat_map(|t| split_oversized(t, room)) {
        let token_width = token.text.width();
        let space = usize::from(token.space_before && !empty);

        if !empty && used + space + token_width > width {
            lines.push(Line::from(std::mem::replace(&mut spans, start_line(false))));
            used = prefix_width;
            empty = true;
        }

        if token.space_before && !empty {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(token.text, token.style));
        used += token_width;
        empty = false;
    }

    if !empty || prefix_width > 0 {
        lines.push(Line::from(spans));
    }
}

/// Breaks a token wider than `width` columns into pieces that fit.
fn split_oversized(token: &Token, width: usize) -> Vec<Token> {
    if width == 0 || token.text.width() <= width {
        return vec![token.clone()];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    for c in token.text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if piece_width + w > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(c);
        piece_width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }

    pieces
        .into_iter()
        .enumerate()
        .map(|(i, text)| Token {
            text,
            style: token.style,
            space_before: i == 0 && token.space_before,
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/layout.rs"]
mod tests;
