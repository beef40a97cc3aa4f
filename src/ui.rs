//! The UI renders the application state into something visible and clickable.
//!
//! Every frame draws, back to front: the navigation bar, the visible slice of the page, the
//! animated background in whatever cells the page left blank, any open overlay, and finally the
//! pointer decorations. Navigation targets record where they were drawn so that mouse clicks in
//! the next event can be mapped back to a section.

use crate::app_state::{AppState, View};
use crate::nav::{entry_for, label_for, MENU_GLYPH};
use crate::theme::{Hsl, Palette, ThemeMode, COLOR_THEMES};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Rows taken by the navigation bar.
pub const NAV_HEIGHT: u16 = 3;
/// Rows taken by the help bar.
pub const HELP_HEIGHT: u16 = 3;

const HELP_TEXT: &str = "q Quit | ↑/↓ Scroll | 1-9 Jump | Tab Next | m Menu | t Theme | \
                         c Colour | b Background | p Palette";

fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_cell(value: f64, start: u16, len: u16) -> Option<u16> {
    let cell = value.round();
    let last = f64::from(start) + f64::from(len) - 1.0;
    (len > 0 && cell >= f64::from(start) && cell <= last).then_some(cell as u16)
}

/// Renders one frame, laying the page out again first if the body area changed size.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(HELP_HEIGHT),
        ])
        .split(f.area());

    if app.size() != (chunks[1].width, chunks[1].height) {
        app.relayout(chunks[1].width, chunks[1].height);
    }

    let palette = app.theme.palette();
    f.render_widget(
        Block::default().style(Style::new().fg(palette.foreground).bg(palette.background)),
        f.area(),
    );

    app.menu.clear_hits();
    draw_nav(f, app, chunks[0], &palette);
    draw_page(f, app, chunks[1], &palette);
    draw_help(f, app, chunks[2], &palette);

    match app.current_view {
        View::Menu => draw_menu(f, app, chunks[1], &palette),
        View::Palette => draw_palette(f, app, &palette),
        View::Page => {}
    }

    if app.cursor_enabled {
        draw_cursor(f, app, &palette);
    }
}

fn draw_nav(f: &mut Frame, app: &mut AppState, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(palette.muted))
        .title(Span::styled(
            format!(" {} ", app.portfolio.name),
            Style::new()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let active = app.tracker.current_active_id().map(str::to_string);
    let idle = Style::new().fg(palette.muted);
    let highlighted = Style::new()
        .fg(palette.primary)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut spans = vec![Span::raw(" ")];
    let mut hits = Vec::new();
    let mut x = inner.x + 1;

    if app.menu.is_compact() {
        spans.push(Span::styled(
            MENU_GLYPH,
            Style::new()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ));
        hits.push((Rect::new(x, inner.y, 1, 1), MENU_GLYPH.to_string()));
        if let Some(id) = &active {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(label_for(id), highlighted));
        }
    } else {
        for id in app.tracker.ids() {
            let label = label_for(id);
            let width = cells(label.width());
            let style = if active.as_deref() == Some(id.as_str()) {
                highlighted
            } else {
                idle
            };
            hits.push((Rect::new(x, inner.y, width, 1), id.clone()));
            x = x.saturating_add(width + 2);
            spans.push(Span::styled(label, style));
            spans.push(Span::raw("  "));
        }
    }

    for (rect, id) in hits {
        let rect = rect.intersection(inner);
        if !rect.is_empty() {
            app.menu.record_hit(rect, &id);
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), inner);

    let indicator = format!(
        "{} {} ",
        if app.theme.is_dark() { "☾" } else { "☀" },
        app.theme.color().label
    );
    f.render_widget(
        Paragraph::new(Span::styled(indicator, Style::new().fg(palette.accent)))
            .alignment(Alignment::Right),
        inner,
    );
}

fn draw_page(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let viewport = app.scroll.viewport();
    let end = viewport.end.min(app.page.len());
    let start = viewport.start.min(end);
    let lines = app.page.lines[start..end].to_vec();

    f.render_widget(Paragraph::new(lines), area);
    app.background
        .render(area, f.buffer_mut(), app.elapsed, palette, app.theme.is_dark());
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let title = app
        .tracker
        .current_active_id()
        .map(|id| format!(" {} ", label_for(id)))
        .unwrap_or_default();
    let text = app.message.clone().unwrap_or_else(|| HELP_TEXT.to_string());

    let help = Paragraph::new(Span::styled(text, Style::new().fg(palette.muted))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(palette.muted))
            .title(Span::styled(title, Style::new().fg(palette.primary))),
    );
    f.render_widget(help, area);
}

fn draw_menu(f: &mut Frame, app: &mut AppState, body: Rect, palette: &Palette) {
    let ids = app.tracker.ids().to_vec();
    let active = app.tracker.current_active_id().map(str::to_string);
    let focus = app.menu.focus();

    let widest = ids.iter().map(|id| label_for(id).width()).max().unwrap_or(0);
    let area =
        Rect::new(body.x, body.y, cells(widest + 6), cells(ids.len() + 2)).intersection(body);
    if area.is_empty() {
        return;
    }

    let items: Vec<ListItem> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let icon = entry_for(id).map_or("•", |e| e.icon);
            let mut style = if active.as_deref() == Some(id.as_str()) {
                Style::new()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::new().fg(palette.foreground)
            };
            if i == focus {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(format!(" {icon} {}", label_for(id))).style(style)
        })
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::new().fg(palette.primary))
                .style(Style::new().bg(palette.background)),
        ),
        area,
    );

    let rows = area.inner(ratatui::layout::Margin::new(1, 1));
    for (i, id) in ids.iter().enumerate() {
        let row =
            Rect::new(rows.x, rows.y.saturating_add(cells(i)), rows.width, 1).intersection(rows);
        if !row.is_empty() {
            app.menu.record_hit(row, id);
        }
    }
}

fn draw_palette(f: &mut Frame, app: &AppState, palette: &Palette) {
    let frame = f.area();
    let height = cells(COLOR_THEMES.len() + 6);
    let width = 40;
    let area = Rect::new(
        frame.x + frame.width.saturating_sub(width) / 2,
        frame.y + frame.height.saturating_sub(height) / 2,
        width.min(frame.width),
        height.min(frame.height),
    );

    let selected = app.theme.color_index();
    let mut lines: Vec<Line> = COLOR_THEMES
        .iter()
        .enumerate()
        .map(|(i, theme)| {
            let swatch = Hsl::parse(theme.primary).map_or(Color::Reset, Hsl::to_color);
            let marker = if i == selected { "▶ " } else { "  " };
            Line::from(vec![
                Span::styled(marker, Style::new().fg(palette.primary)),
                Span::styled("██ ", Style::new().fg(swatch)),
                Span::styled(theme.label, Style::new().fg(palette.foreground)),
            ])
        })
        .collect();

    lines.push(Line::default());
    let mut modes = vec![Span::raw("  ")];
    for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
        let style = if app.theme.mode() == mode {
            Style::new()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::new().fg(palette.muted)
        };
        modes.push(Span::styled(format!(" {mode} "), style));
        modes.push(Span::raw(" "));
    }
    lines.push(Line::from(modes));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  ←/→ Colour | l/d/s Mode | Esc Close",
        Style::new().fg(palette.muted),
    )));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::new().fg(palette.primary))
                .style(Style::new().bg(palette.background))
                .title(" Appearance "),
        ),
        area,
    );
}

fn draw_cursor(f: &mut Frame, app: &AppState, palette: &Palette) {
    if !app.cursor.is_visible() {
        return;
    }
    let frame = f.area();
    let outline = if app.cursor.scale() > 1.25 { "◯" } else { "○" };
    let (ox, oy) = app.cursor.outline();
    let (dx, dy) = app.cursor.dot();

    let buf = f.buffer_mut();
    let marks = [
        (ox, oy, outline, palette.accent),
        (dx, dy, "●", palette.primary),
    ];
    for (x, y, symbol, color) in marks {
        let column = to_cell(x, frame.x, frame.width);
        let row = to_cell(y, frame.y, frame.height);
        let (Some(col), Some(row)) = (column, row) else {
            continue;
        };
        if let Some(cell) = buf.cell_mut(Position::new(col, row)) {
            cell.set_symbol(symbol).set_fg(color);
        }
    }
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
