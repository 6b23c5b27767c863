//! Single-directory browser with cursor history.
//!
//! [`Browser`] is the navigation state machine: it owns the current
//! directory, the sorted/filtered listing, the cursor row, and the
//! [`CursorHistory`] used to restore the highlight when going back.
//! It emits no terminal output — the TUI layer renders whatever state
//! the browser holds.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;
use crate::fs::ops::{filter_hidden, read_directory, sort_entries};
use crate::nav::history::CursorHistory;

/// Reads, sorts, and filters a directory into its display order.
fn list_dir(path: &Path) -> CoreResult<Vec<FileEntry>> {
    let raw = read_directory(path)?;
    Ok(filter_hidden(&sort_entries(&raw)))
}

/// A single-directory file browser.
///
/// Immutable: all state transitions return a new `Browser`. A failed
/// transition (permission denied, already at the floor) returns an error
/// and leaves the original value untouched, so the caller's state never
/// ends up half-applied.
#[derive(Debug, Clone)]
pub struct Browser {
    current_dir: PathBuf,
    floor: PathBuf,
    entries: Vec<FileEntry>,
    cursor: usize,
    history: CursorHistory,
}

impl Browser {
    /// Opens a browser at `start_dir` with `floor` as the topmost directory
    /// the user may ascend to.
    pub fn open(start_dir: &Path, floor: &Path) -> CoreResult<Self> {
        let current_dir = start_dir.canonicalize()?;
        let floor = floor.canonicalize()?;
        let entries = list_dir(&current_dir)?;

        Ok(Self {
            current_dir,
            floor,
            entries,
            cursor: 0,
            history: CursorHistory::new(),
        })
    }

    /// The directory currently being displayed.
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// The navigation floor — ascending past it is rejected.
    pub fn floor(&self) -> &Path {
        &self.floor
    }

    /// Visible entries in display order (dirs first, hidden excluded).
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// The highlighted row index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The entry under the cursor, if the view is non-empty.
    pub fn cursor_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.cursor)
    }

    /// Depth below the floor, as tracked by the cursor history.
    pub fn depth(&self) -> usize {
        self.history.depth()
    }

    /// Moves the cursor to `index`, clamped to valid bounds.
    pub fn with_cursor(self, index: usize) -> Self {
        let clamped = if self.entries.is_empty() {
            0
        } else {
            index.min(self.entries.len() - 1)
        };
        Self {
            cursor: clamped,
            ..self
        }
    }

    /// Moves the cursor up by one. No-op at the top.
    pub fn move_up(self) -> Self {
        let target = self.cursor.saturating_sub(1);
        self.with_cursor(target)
    }

    /// Moves the cursor down by one. No-op at the bottom.
    pub fn move_down(self) -> Self {
        let target = self.cursor.saturating_add(1);
        self.with_cursor(target)
    }

    /// Jumps the cursor to the first row.
    pub fn go_to_first(self) -> Self {
        self.with_cursor(0)
    }

    /// Jumps the cursor to the last row.
    pub fn go_to_last(self) -> Self {
        let last = self.entries.len().saturating_sub(1);
        self.with_cursor(last)
    }

    /// Descends into the directory under the cursor.
    ///
    /// On success the cursor row being left behind is pushed onto history
    /// and the cursor starts at row 0 in the new directory. The target is
    /// listed *before* any state changes, so a `PermissionDenied` leaves
    /// path, history, and cursor exactly as they were.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NoHandler`] — the cursor entry is a file; this
    ///   browser never launches external applications.
    /// - [`CoreError::PermissionDenied`] — the target cannot be entered.
    pub fn descend(&self) -> CoreResult<Self> {
        let Some(entry) = self.cursor_entry() else {
            return Ok(self.clone());
        };
        if !entry.is_dir() {
            return Err(CoreError::NoHandler(entry.name().to_string()));
        }

        let target = entry.path().to_path_buf();
        let entries = list_dir(&target)?;

        Ok(Self {
            current_dir: target,
            floor: self.floor.clone(),
            entries,
            cursor: 0,
            history: self.history.push(self.cursor),
        })
    }

    /// Ascends to the parent directory, restoring the saved cursor row.
    ///
    /// If history is empty but the path is not yet at the floor (e.g. the
    /// browser was opened below its floor), row 0 is the documented
    /// fallback.
    ///
    /// # Errors
    ///
    /// - [`CoreError::AtFloor`] — the current directory is the floor; the
    ///   path is left unchanged.
    pub fn ascend(&self) -> CoreResult<Self> {
        if self.current_dir == self.floor {
            return Err(CoreError::AtFloor);
        }

        let parent = self
            .current_dir
            .parent()
            .unwrap_or(&self.current_dir)
            .to_path_buf();
        let entries = list_dir(&parent)?;

        let (history, restore_row) = self
            .history
            .pop()
            .unwrap_or_else(|| (CursorHistory::new(), 0));

        let restored = Self {
            current_dir: parent,
            floor: self.floor.clone(),
            entries,
            cursor: 0,
            history,
        };
        Ok(restored.with_cursor(restore_row))
    }

    /// Re-reads the current directory, keeping the cursor clamped in place.
    pub fn refresh(&self) -> CoreResult<Self> {
        let entries = list_dir(&self.current_dir)?;
        let cursor = self.cursor;
        let refreshed = Self {
            entries,
            ..self.clone()
        };
        Ok(refreshed.with_cursor(cursor))
    }

    /// Returns a view with the given paths soft-hidden.
    ///
    /// Used by the pending-delete workflow: queued targets disappear from
    /// the listing immediately while the files on disk stay untouched. A
    /// later [`Browser::refresh`] restores them if the delete is aborted.
    pub fn without_paths(&self, hidden: &[PathBuf]) -> Self {
        let entries: Vec<FileEntry> = self
            .entries
            .iter()
            .filter(|e| !hidden.iter().any(|p| p == e.path()))
            .cloned()
            .collect();
        let cursor = self.cursor;
        let view = Self {
            entries,
            ..self.clone()
        };
        view.with_cursor(cursor)
    }
}
