//! Active-section tracking for a scrollable page.
//!
//! The tracker holds the single source of truth for "which region is the reader looking at".
//! Two inputs move it: visibility reports from the viewport observer, and explicit activation
//! from the navigation menu. The host view reads it back to decide which menu entry to highlight.
//!
//! ```text
//! uninitialised (None) --visibility >= 0.3 / activate--> active(id) --...--> active(id')
//! ```
//!
//! There is no way back to `None`: once a section is active some section always is.

use crate::error::{FolioError, Result};
use std::collections::HashSet;

/// Fraction of a region that must be on screen before it becomes the active section.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

/// One visibility report delivered by the viewport observer.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityEntry {
    /// Region identifier, matched against the registered section ids.
    pub id: String,
    /// Fraction of the region currently inside the viewport, in `[0, 1]`.
    pub ratio: f64,
}

impl VisibilityEntry {
    #[must_use]
    /// Pairs a region id with its visible fraction.
    pub fn new(id: impl Into<String>, ratio: f64) -> Self {
        Self {
            id: id.into(),
            ratio,
        }
    }
}

/// The surface a tracker drives when a section is activated.
///
/// The scroll request is fire-and-forget: the tracker never waits for the animation to land.
pub trait NavigationHost {
    /// Begin bringing the region with this id into view.
    fn scroll_into_view(&mut self, id: &str);

    /// Collapse a transient navigation menu, if the host has one.
    fn close_menu(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Whether visibility reports are still being accepted.
pub enum Lifecycle {
    /// Observation is live.
    Observing,
    /// The owning view has been torn down; visibility reports are dropped.
    TornDown,
}

/// Tracks which of a fixed, ordered set of sections is currently active.
#[derive(Debug)]
pub struct SectionTracker {
    ids: Vec<String>,
    observed: Vec<bool>,
    active: Option<usize>,
    lifecycle: Lifecycle,
}

impl SectionTracker {
    /// Registers the section ids in page order.
    ///
    /// No region is observed yet; call [`SectionTracker::observe_present`] once the page has
    /// been laid out.
    ///
    /// # Errors
    ///
    /// Returns an error if `ids` is empty or contains the same id twice.
    pub fn new<I, S>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            return Err(FolioError::EmptySectionList);
        }

        let mut seen = HashSet::new();
        for id in &ids {
            if !seen.insert(id.as_str()) {
                return Err(FolioError::DuplicateSection(id.clone()));
            }
        }

        let observed = vec![false; ids.len()];
        Ok(Self {
            ids,
            observed,
            active: None,
            lifecycle: Lifecycle::Observing,
        })
    }

    /// Starts observing every registered section that exists in the rendered view.
    ///
    /// Regions the view does not contain are skipped; they can be picked up by a later call once
    /// they appear. Returns how many sections are observed afterwards.
    pub fn observe_present<'a, I>(&mut self, rendered: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.lifecycle == Lifecycle::TornDown {
            return 0;
        }

        for id in rendered {
            if let Some(index) = self.index_of(id) {
                if !self.observed[index] {
                    tracing::debug!(section = id, "observing section");
                }
                self.observed[index] = true;
            }
        }

        self.observed.iter().filter(|o| **o).count()
    }

    /// Applies one visibility report.
    ///
    /// Reports for unknown or unobserved sections, and every report after teardown, are ignored.
    pub fn on_visibility_change(&mut self, id: &str, ratio: f64) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        let Some(index) = self.index_of(id) else {
            return;
        };
        if !self.observed[index] {
            return;
        }

        if ratio >= VISIBILITY_THRESHOLD {
            if self.active != Some(index) {
                tracing::trace!(section = id, ratio, "section became active");
            }
            self.active = Some(index);
        }
    }

    /// Applies a batch of reports in delivery order; the last qualifying entry wins.
    pub fn on_visibility_batch<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = &'a VisibilityEntry>,
    {
        for entry in entries {
            self.on_visibility_change(&entry.id, entry.ratio);
        }
    }

    /// Completes initialization: if nothing is active yet, the first observed section becomes
    /// active. Returns the active id afterwards.
    ///
    /// Called once the first visibility batch has been delivered, so a viewport too short for
    /// any section to reach the threshold still starts with a highlight.
    pub fn settle_initial(&mut self) -> Option<&str> {
        if self.active.is_none() && self.lifecycle != Lifecycle::TornDown {
            self.active = self.observed.iter().position(|o| *o);
            if let Some(index) = self.active {
                tracing::debug!(section = %self.ids[index], "defaulting to first section");
            }
        }
        self.current_active_id()
    }

    /// Scrolls to a section and makes it active immediately.
    ///
    /// Unregistered ids are a no-op and return `false`. The host is asked to scroll and to close
    /// its menu; the active id is set before the scroll has had any visible effect, and a later
    /// visibility report may override it.
    pub fn activate<H: NavigationHost + ?Sized>(&mut self, id: &str, host: &mut H) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(section = id, "ignoring activation of unknown section");
            return false;
        };

        host.scroll_into_view(id);
        self.active = Some(index);
        host.close_menu();
        tracing::debug!(section = id, "section activated");
        true
    }

    #[must_use]
    /// The active section id, or `None` before any section has become active.
    pub fn current_active_id(&self) -> Option<&str> {
        self.active.map(|index| self.ids[index].as_str())
    }

    #[must_use]
    /// Position of the active section in registration order.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Stops observing every section. Subsequent visibility reports are dropped.
    pub fn teardown(&mut self) {
        self.observed.iter_mut().for_each(|o| *o = false);
        self.lifecycle = Lifecycle::TornDown;
        tracing::debug!("section tracker torn down");
    }

    #[must_use]
    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    /// Registered ids in page order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    /// Whether the given section is currently observed.
    pub fn is_observed(&self, id: &str) -> bool {
        self.index_of(id).is_some_and(|index| self.observed[index])
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|known| known == id)
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
