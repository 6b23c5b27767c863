//! Visual-mode range selection.
//!
//! While active, the selection spans the closed row interval between the
//! anchor (where visual mode was toggled on) and the current cursor row.
//! The interval is recomputed on every cursor move — there is no commit
//! step. Rows marked at each activation persist in a separate set and are
//! unioned into a multi-target delete.

use std::collections::BTreeSet;

/// Visual-mode selection state.
///
/// Immutable: all transitions return a new `VisualSelection`. The invariant
/// is that [`VisualSelection::selected_rows`] is empty whenever the mode is
/// inactive.
#[derive(Debug, Clone, Default)]
pub struct VisualSelection {
    active: bool,
    anchor: usize,
    marked: BTreeSet<usize>,
}

impl VisualSelection {
    /// Creates an inactive selection with no marks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while visual mode is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The anchor row set when visual mode was activated.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Toggles visual mode at the given cursor row.
    ///
    /// Activation sets the anchor to the cursor and marks that row;
    /// toggling while active deactivates (the same as escape).
    pub fn toggle(&self, cursor: usize) -> Self {
        if self.active {
            return self.deactivate();
        }
        let mut marked = self.marked.clone();
        marked.insert(cursor);
        Self {
            active: true,
            anchor: cursor,
            marked,
        }
    }

    /// Leaves visual mode. Marks are kept until [`VisualSelection::clear_marks`].
    pub fn deactivate(&self) -> Self {
        Self {
            active: false,
            ..self.clone()
        }
    }

    /// Drops accumulated marks along with the active range.
    ///
    /// Called when a delete or yank commits and when a directory change
    /// succeeds.
    pub fn clear_marks(&self) -> Self {
        Self {
            active: false,
            anchor: self.anchor,
            marked: BTreeSet::new(),
        }
    }

    /// The rows currently highlighted: `[min(anchor, cursor), max(anchor, cursor)]`
    /// while active, empty otherwise.
    pub fn selected_rows(&self, cursor: usize) -> Vec<usize> {
        if !self.active {
            return Vec::new();
        }
        let start = self.anchor.min(cursor);
        let end = self.anchor.max(cursor);
        (start..=end).collect()
    }

    /// Returns `true` if `row` falls inside the active interval.
    pub fn contains(&self, row: usize, cursor: usize) -> bool {
        self.active && row >= self.anchor.min(cursor) && row <= self.anchor.max(cursor)
    }

    /// Rows targeted by a multi-select delete: the active interval unioned
    /// with every previously marked row, in ascending order.
    pub fn delete_targets(&self, cursor: usize) -> Vec<usize> {
        let mut rows: BTreeSet<usize> = self.marked.clone();
        rows.extend(self.selected_rows(cursor));
        rows.into_iter().collect()
    }
}
