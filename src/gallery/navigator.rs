// SPDX-License-Identifier: MPL-2.0
//! Preview navigation over the gallery listing.
//!
//! The navigator owns the immutable entry sequence and the position of the
//! open preview. Entries without a media kind are gaps: navigation scans
//! past them transparently, and navigation past either end of the sequence
//! wraps around to the other end.
//!
//! The wraparound is a single second scan, never a loop, so a listing with
//! zero previewable entries terminates immediately instead of rescanning.

use crate::gallery::Entry;

/// Snapshot of the navigation state for UI rendering.
///
/// Contains everything the preview controls need without handing them the
/// entry list itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationInfo {
    /// Position of the open preview (0-indexed), if any.
    pub current_index: Option<usize>,
    /// Total number of entries in the listing.
    pub total_count: usize,
    /// Number of entries that can be opened in the preview.
    pub previewable_count: usize,
    /// Whether the open preview is the first previewable entry.
    pub at_first: bool,
    /// Whether the open preview is the last previewable entry.
    pub at_last: bool,
}

/// Adjacent previewable entries of the open preview, used as prefetch hints.
///
/// Both sides stop at the sequence boundary; they do not wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

/// Manages the preview position over the immutable gallery listing.
///
/// Two states: closed (`current_index() == None`) or open at a previewable
/// entry. The invariant that an open index always points at a previewable
/// entry is enforced by [`GalleryNavigator::open`] rejecting anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryNavigator {
    entries: Vec<Entry>,
    current: Option<usize>,
}

impl GalleryNavigator {
    /// Creates a navigator over an empty listing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            current: None,
        }
    }

    /// Creates a navigator over a scanned listing, with no preview open.
    #[must_use]
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            current: None,
        }
    }

    /// Returns the full entry listing.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the entry at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Returns the total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the listing is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of previewable entries.
    #[must_use]
    pub fn previewable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_previewable()).count()
    }

    /// Returns the position of the open preview, if any.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Returns the entry of the open preview, if any.
    #[must_use]
    pub fn current_entry(&self) -> Option<&Entry> {
        self.current.and_then(|idx| self.entries.get(idx))
    }

    /// Scans `index, index-1, ..., 0` and returns the first previewable
    /// index, or `None` if there is none at or before `index`.
    #[must_use]
    pub fn first_previewable_at_or_before(&self, index: usize) -> Option<usize> {
        let start = index.min(self.entries.len().checked_sub(1)?);
        (0..=start)
            .rev()
            .find(|&i| self.entries[i].is_previewable())
    }

    /// Scans forward from `index` to the end of the listing and returns the
    /// first previewable index, or `None` if the scan exhausts the sequence.
    #[must_use]
    pub fn first_previewable_at_or_after(&self, index: usize) -> Option<usize> {
        (index..self.entries.len()).find(|&i| self.entries[i].is_previewable())
    }

    /// Opens the preview at `index`.
    ///
    /// Returns the opened entry, or `None` (state unchanged) when `index` is
    /// out of bounds or not previewable, so the open position always points
    /// at a previewable entry.
    pub fn open(&mut self, index: usize) -> Option<&Entry> {
        let entry = self.entries.get(index)?;
        if !entry.is_previewable() {
            return None;
        }
        self.current = Some(index);
        self.entries.get(index)
    }

    /// Closes the preview.
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Moves the preview to the next previewable entry, wrapping around to
    /// the first one past the end of the listing.
    ///
    /// A call without an open preview is a no-op returning `None`.
    pub fn next(&mut self) -> Option<usize> {
        let current = self.current?;
        let target = self
            .first_previewable_at_or_after(current + 1)
            .or_else(|| self.first_previewable_at_or_after(0))?;
        self.current = Some(target);
        Some(target)
    }

    /// Moves the preview to the previous previewable entry, wrapping around
    /// to the last one past the start of the listing.
    ///
    /// A call without an open preview is a no-op returning `None`.
    pub fn previous(&mut self) -> Option<usize> {
        let current = self.current?;
        let target = current
            .checked_sub(1)
            .and_then(|idx| self.first_previewable_at_or_before(idx))
            .or_else(|| self.last_previewable())?;
        self.current = Some(target);
        Some(target)
    }

    /// Opens the first previewable entry. No-op returning `None` when the
    /// listing has no previewable entries.
    pub fn first(&mut self) -> Option<usize> {
        let target = self.first_previewable_at_or_after(0)?;
        self.current = Some(target);
        Some(target)
    }

    /// Opens the last previewable entry. No-op returning `None` when the
    /// listing has no previewable entries.
    pub fn last(&mut self) -> Option<usize> {
        let target = self.last_previewable()?;
        self.current = Some(target);
        Some(target)
    }

    /// Returns the previewable entries adjacent to the open preview, one
    /// step in each direction without wrapping.
    #[must_use]
    pub fn neighbors(&self) -> Neighbors {
        let Some(current) = self.current else {
            return Neighbors::default();
        };
        Neighbors {
            previous: current
                .checked_sub(1)
                .and_then(|idx| self.first_previewable_at_or_before(idx)),
            next: self.first_previewable_at_or_after(current + 1),
        }
    }

    /// Returns a snapshot of the navigation state for UI rendering.
    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        let first = self.first_previewable_at_or_after(0);
        let last = self.last_previewable();
        NavigationInfo {
            current_index: self.current,
            total_count: self.entries.len(),
            previewable_count: self.previewable_count(),
            at_first: self.current.is_some() && self.current == first,
            at_last: self.current.is_some() && self.current == last,
        }
    }

    fn last_previewable(&self) -> Option<usize> {
        let last = self.entries.len().checked_sub(1)?;
        self.first_previewable_at_or_before(last)
    }
}

impl Default for GalleryNavigator {
    fn default() -> Self {
        Self::new()
    }
}
