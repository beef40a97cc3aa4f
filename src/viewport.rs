//! Viewport observation: how much of each region is on screen, and when that crosses a threshold.
//!
//! The page is a flat column of lines. A region is a half-open line range, the viewport is the
//! range of lines currently drawn. Like a browser intersection observer the observer reports a
//! region the first time it sees it and afterwards only when the region crosses the threshold,
//! so a section that stays comfortably visible while the reader scrolls within it stays quiet.

use crate::tracker::VisibilityEntry;
use std::collections::HashMap;
use std::ops::Range;

/// A named, contiguous range of page lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// Section id this region belongs to.
    pub id: String,
    /// First line of the region.
    pub start: usize,
    /// One past the last line of the region.
    pub end: usize,
}

impl Region {
    #[must_use]
    /// Number of lines the region spans.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    /// Whether the region spans no lines.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
/// Fraction of `region` inside `viewport`, in `[0, 1]`.
///
/// An empty region counts as fully visible when its start line is inside the viewport.
pub fn visibility_ratio(region: &Region, viewport: &Range<usize>) -> f64 {
    if region.is_empty() {
        return if viewport.contains(&region.start) {
            1.0
        } else {
            0.0
        };
    }

    let start = region.start.max(viewport.start);
    let end = region.end.min(viewport.end);
    if end <= start {
        return 0.0;
    }

    (end - start) as f64 / region.len() as f64
}

/// Reports visibility changes for a set of regions as the viewport moves.
#[derive(Debug)]
pub struct ViewportObserver {
    threshold: f64,
    last: HashMap<String, f64>,
}

impl ViewportObserver {
    #[must_use]
    /// Creates an observer that reports crossings of `threshold`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last: HashMap::new(),
        }
    }

    /// Measures every region against the viewport and returns the entries to deliver.
    ///
    /// Entries come out in region order. A region seen for the first time always produces an
    /// entry; after that an entry is produced only when the region moves across the threshold.
    pub fn observe(&mut self, regions: &[Region], viewport: &Range<usize>) -> Vec<VisibilityEntry> {
        let mut entries = Vec::new();

        for region in regions {
            let ratio = visibility_ratio(region, viewport);
            let crossed = match self.last.get(&region.id) {
                None => true,
                Some(&previous) => (previous >= self.threshold) != (ratio >= self.threshold),
            };

            self.last.insert(region.id.clone(), ratio);
            if crossed {
                entries.push(VisibilityEntry::new(region.id.clone(), ratio));
            }
        }

        entries
    }

    /// Forgets every previous measurement, so the next pass reports all regions.
    pub fn reset(&mut self) {
        self.last.clear();
    }

    #[must_use]
    /// Last measured ratio for a region, if it has been observed.
    pub fn last_ratio(&self, id: &str) -> Option<f64> {
        self.last.get(id).copied()
    }
}

#[cfg(test)]
#[path = "tests/viewport.rs"]
mod tests;
