//! The core state of the viewer.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the reader
//! scrolls and navigates. `AppState` owns the laid-out page and every piece of interactive state
//! around it, and keeps the section tracker fed: whenever the viewport moves, the observer's
//! batch of visibility changes is delivered to the tracker before the next frame is drawn.

use crate::background::{find_style, BackgroundSelector};
use crate::config::Config;
use crate::cursor::CursorFollower;
use crate::document::Portfolio;
use crate::error::{FolioError, Result};
use crate::layout::{layout, Page};
use crate::nav::{NavMenu, MENU_GLYPH};
use crate::session::Session;
use crate::theme::{ThemeMode, ThemePreference};
use crate::tracker::{NavigationHost, SectionTracker, VISIBILITY_THRESHOLD};
use crate::viewport::ViewportObserver;
use std::ops::Range;

/// Seed for the background scenes, so every run draws the same picture.
pub const BACKGROUND_SEED: u64 = 0x00F0_110F;

/// Exponential approach rate of smooth scrolling, per second.
const SCROLL_RATE: f64 = 12.0;

#[allow(clippy::cast_precision_loss)]
fn to_position(line: usize) -> f64 {
    line as f64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_line(position: f64) -> usize {
    position.round().max(0.0) as usize
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Determines which overlay is drawn and how input is interpreted.
pub enum View {
    /// The page itself.
    Page,
    /// The compact navigation drop-down is open.
    Menu,
    /// The colour and theme popup is open.
    Palette,
}

/// Scroll position of the page body, with an optional smooth-scroll target.
#[derive(Clone, Debug, Default)]
pub struct ScrollView {
    position: f64,
    target: Option<f64>,
    height: usize,
    content: usize,
}

impl ScrollView {
    #[must_use]
    /// First visible line.
    pub fn offset(&self) -> usize {
        to_line(self.position)
    }

    #[must_use]
    /// Number of visible lines.
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> usize {
        self.content.saturating_sub(self.height)
    }

    #[must_use]
    /// Visible line range.
    pub fn viewport(&self) -> Range<usize> {
        let offset = self.offset();
        offset..offset + self.height
    }

    #[must_use]
    /// Line a smooth scroll is heading for.
    pub fn target(&self) -> Option<usize> {
        self.target.map(to_line)
    }

    #[must_use]
    /// Whether a smooth scroll is in progress.
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Updates the page length and viewport height, clamping the position into range.
    pub fn set_bounds(&mut self, content: usize, height: usize) {
        self.content = content;
        self.height = height;
        let max = to_position(self.max_offset());
        self.position = self.position.min(max);
        self.target = self.target.map(|t| t.min(max));
    }

    /// Scrolls by `delta` lines immediately, cancelling any smooth scroll.
    pub fn scroll_by(&mut self, delta: isize) {
        let line = self.offset().saturating_add_signed(delta);
        self.scroll_to(line);
    }

    /// Jumps to `line` immediately, cancelling any smooth scroll.
    pub fn scroll_to(&mut self, line: usize) {
        self.target = None;
        self.position = to_position(line.min(self.max_offset()));
    }

    /// Starts easing towards `line`.
    pub fn smooth_to(&mut self, line: usize) {
        self.target = Some(to_position(line.min(self.max_offset())));
    }

    /// Advances a smooth scroll by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        let Some(target) = self.target else {
            return;
        };
        let pull = 1.0 - (-SCROLL_RATE * dt.max(0.0)).exp();
        self.position += (target - self.position) * pull;
        if (target - self.position).abs() < 0.5 {
            self.position = target;
            self.target = None;
        }
    }
}

/// The part of the viewer a section activation acts on.
///
/// Borrows the scroll view and the menu so the tracker can drive them without owning them.
pub struct HostSurface<'a> {
    /// Page whose regions give scroll destinations.
    pub page: &'a Page,
    /// Scroll view to move.
    pub scroll: &'a mut ScrollView,
    /// Menu to close.
    pub menu: &'a mut NavMenu,
}

impl NavigationHost for HostSurface<'_> {
    fn scroll_into_view(&mut self, id: &str) {
        if let Some(region) = self.page.region(id) {
            self.scroll.smooth_to(region.start);
        }
    }

    fn close_menu(&mut self) {
        self.menu.close();
    }
}

/// Everything the viewer knows, in one place.
pub struct AppState {
    /// Parsed content.
    pub portfolio: Portfolio,
    /// Content laid out for the current width.
    pub page: Page,
    /// Active-section tracker behind the navigation highlight.
    pub tracker: SectionTracker,
    observer: ViewportObserver,
    /// Scroll position of the page body.
    pub scroll: ScrollView,
    /// Navigation menu state and click targets.
    pub menu: NavMenu,
    /// Theme mode and colour preset.
    pub theme: ThemePreference,
    /// Animated background.
    pub background: BackgroundSelector,
    /// Pointer decorations.
    pub cursor: CursorFollower,
    /// Whether pointer decorations are drawn.
    pub cursor_enabled: bool,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Seconds since start, driving background animation.
    pub elapsed: f64,
    /// Lines moved per scroll step.
    pub scroll_step: usize,
    compact_width: u16,
    size: (u16, u16),
}

impl AppState {
    /// Builds the viewer state from content and preferences.
    ///
    /// The configured section list, or every section of the document when it is empty, is
    /// registered with the tracker. Nothing is observed until the first [`AppState::relayout`].
    ///
    /// # Errors
    ///
    /// Returns an error if the theme, colour or background name is unknown, or if the section
    /// list is empty or repeats an id.
    pub fn new(portfolio: Portfolio, cfg: &Config) -> Result<Self> {
        let theme = ThemePreference::from_names(&cfg.theme, &cfg.color)?;
        let background_index = find_style(&cfg.background)
            .ok_or_else(|| FolioError::UnknownBackground(cfg.background.clone()))?;
        let tracker = if cfg.sections.is_empty() {
            SectionTracker::new(portfolio.ids())?
        } else {
            SectionTracker::new(cfg.sections.iter().map(String::as_str))?
        };

        Ok(Self {
            portfolio,
            page: Page::default(),
            tracker,
            observer: ViewportObserver::new(VISIBILITY_THRESHOLD),
            scroll: ScrollView::default(),
            menu: NavMenu::default(),
            theme,
            background: BackgroundSelector::new(background_index, BACKGROUND_SEED),
            cursor: CursorFollower::default(),
            cursor_enabled: cfg.cursor,
            current_view: View::Page,
            message: None,
            elapsed: 0.0,
            scroll_step: cfg.scroll_step.max(1),
            compact_width: cfg.compact_width,
            size: (0, 0),
        })
    }

    #[must_use]
    /// Size of the page body the page was last laid out for.
    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    /// Lays the page out for a body area of `width` by `height` cells.
    ///
    /// Sections present in the new layout start being observed. A change of size makes the
    /// observer forget its previous measurements, so every region is reported again and the
    /// active section follows whatever is now on screen. If no section reached the threshold on
    /// the first layout, the first rendered section is highlighted.
    pub fn relayout(&mut self, width: u16, height: u16) {
        if self.size != (width, height) {
            self.observer.reset();
        }
        self.size = (width, height);
        self.menu.set_width(width, self.compact_width);
        self.sync_menu_view();
        self.restyle();
        self.tracker.settle_initial();
    }

    fn restyle(&mut self) {
        let (width, height) = self.size;
        self.page = layout(&self.portfolio, usize::from(width), &self.theme.palette());
        self.scroll.set_bounds(self.page.len(), usize::from(height));
        let observed = self.tracker.observe_present(self.page.region_ids());
        tracing::trace!(width, height, lines = self.page.len(), observed, "page laid out");
        self.deliver_visibility();
    }

    fn deliver_visibility(&mut self) {
        let entries = self
            .observer
            .observe(&self.page.regions, &self.scroll.viewport());
        self.tracker.on_visibility_batch(&entries);
    }

    /// Advances animations by `dt` seconds and reports any visibility changes they cause.
    pub fn tick(&mut self, dt: f64) {
        self.elapsed += dt.max(0.0);
        self.scroll.step(dt);
        self.cursor.tick(dt);
        self.deliver_visibility();
    }

    /// Scrolls by whole lines; negative moves up.
    pub fn scroll_lines(&mut self, delta: isize) {
        self.scroll.scroll_by(delta);
        self.deliver_visibility();
    }

    /// Scrolls by `scroll_step` lines, up or down.
    pub fn scroll_step_by(&mut self, down: bool) {
        let step = isize::try_from(self.scroll_step).unwrap_or(isize::MAX);
        self.scroll_lines(if down { step } else { -step });
    }

    /// Scrolls by one viewport height less a line of overlap.
    pub fn scroll_page(&mut self, down: bool) {
        let lines = self.scroll.height().saturating_sub(1).max(1);
        let step = isize::try_from(lines).unwrap_or(isize::MAX);
        self.scroll_lines(if down { step } else { -step });
    }

    /// Jumps to the top of the page.
    pub fn scroll_top(&mut self) {
        self.scroll.scroll_to(0);
        self.deliver_visibility();
    }

    /// Jumps to the bottom of the page.
    pub fn scroll_bottom(&mut self) {
        self.scroll.scroll_to(self.scroll.max_offset());
        self.deliver_visibility();
    }

    /// Navigates to a section: starts a smooth scroll, highlights it, and closes the menu.
    ///
    /// Returns `false` for ids the tracker does not know.
    pub fn activate(&mut self, id: &str) -> bool {
        let mut host = HostSurface {
            page: &self.page,
            scroll: &mut self.scroll,
            menu: &mut self.menu,
        };
        let activated = self.tracker.activate(id, &mut host);
        self.sync_menu_view();
        activated
    }

    /// Navigates to the `index`th registered section.
    pub fn activate_index(&mut self, index: usize) -> bool {
        match self.tracker.ids().get(index).cloned() {
            Some(id) => self.activate(&id),
            None => false,
        }
    }

    /// Navigates `step` sections forward or back from the active one, wrapping around.
    ///
    /// With nothing active yet, forward starts at the first section and back at the last.
    pub fn activate_relative(&mut self, step: isize) -> bool {
        let len = self.tracker.ids().len();
        let index = match self.tracker.active_index() {
            Some(current) => {
                let step = step.rem_euclid(isize::try_from(len).unwrap_or(isize::MAX));
                (current + step.unsigned_abs()) % len
            }
            None if step < 0 => len - 1,
            None => 0,
        };
        self.activate_index(index)
    }

    /// Opens or closes the compact drop-down. Wide layouts have no drop-down.
    pub fn toggle_menu(&mut self) {
        if self.menu.is_compact() {
            let focus = self.tracker.active_index().unwrap_or(0);
            if self.menu.is_open() {
                self.menu.close();
            } else {
                self.menu.open_at(focus);
            }
            self.sync_menu_view();
        }
    }

    /// Activates the entry under keyboard focus in the drop-down.
    pub fn activate_menu_focus(&mut self) -> bool {
        self.activate_index(self.menu.focus())
    }

    fn sync_menu_view(&mut self) {
        match (self.current_view, self.menu.is_open()) {
            (View::Menu, false) => self.current_view = View::Page,
            (View::Page, true) => self.current_view = View::Menu,
            _ => {}
        }
    }

    /// Shows or hides the colour and theme popup.
    pub fn toggle_palette(&mut self) {
        self.current_view = if self.current_view == View::Palette {
            View::Page
        } else {
            self.menu.close();
            View::Palette
        };
    }

    /// Swaps between light and dark.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle_mode();
        self.message = Some(format!("Theme: {}", self.theme.mode()));
        self.restyle();
    }

    /// Chooses a theme mode.
    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme.set_mode(mode);
        self.message = Some(format!("Theme: {mode}"));
        self.restyle();
    }

    /// Moves to the next or previous colour preset.
    pub fn cycle_color(&mut self, forward: bool) {
        self.theme.cycle_color(forward);
        self.message = Some(format!("Colour: {}", self.theme.color().label));
        self.restyle();
    }

    /// Moves to the next or previous background style.
    pub fn cycle_background(&mut self, forward: bool) {
        if forward {
            self.background.next();
        } else {
            self.background.prev();
        }
        self.message = Some(format!("Background: {}", self.background.name()));
    }

    /// Records the pointer position in cells; hovering a navigation target grows the outline.
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        self.cursor.pointer_moved(f64::from(column), f64::from(row));
        self.cursor.set_hover(self.menu.hit_test(column, row).is_some());
    }

    /// Hides the pointer decorations when the terminal loses focus.
    pub fn pointer_left(&mut self) {
        self.cursor.pointer_left();
    }

    /// Handles a click: navigation entries activate their section, the menu glyph toggles the
    /// drop-down, anything else closes it.
    pub fn click(&mut self, column: u16, row: u16) {
        match self.menu.hit_test(column, row).map(str::to_string) {
            Some(id) if id == MENU_GLYPH => self.toggle_menu(),
            Some(id) => {
                self.activate(&id);
            }
            None => {
                self.menu.close();
                self.sync_menu_view();
            }
        }
    }

    /// Stops section tracking. The page stays readable but the highlight no longer follows it.
    pub fn shutdown(&mut self) {
        self.tracker.teardown();
    }

    #[must_use]
    /// Snapshot of the reader's current choices.
    pub fn session(&self) -> Session {
        Session {
            theme: self.theme.mode().to_string(),
            color: self.theme.color().name.to_string(),
            background: self.background.name().to_string(),
            active_section: self.tracker.current_active_id().map(str::to_string),
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
