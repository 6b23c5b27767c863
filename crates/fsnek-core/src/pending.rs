//! Deferred deletion: queue targets, confirm, then commit to the trash.
//!
//! Queued paths are soft-hidden from the directory view so the user
//! previews the post-delete state, but nothing touches the disk until the
//! confirmation resolves. At most one pending delete exists at a time.

use std::path::{Path, PathBuf};

use crate::fs::ops::move_to_trash;

/// A staged, reversible batch of paths awaiting delete confirmation.
///
/// Immutable: queuing returns a new `PendingDelete`. The batch remembers
/// the cursor row it was created at so an abort can put the highlight back.
#[derive(Debug, Clone)]
pub struct PendingDelete {
    targets: Vec<PathBuf>,
    restore_row: usize,
}

impl PendingDelete {
    /// Creates an empty batch remembering the pre-delete cursor row.
    pub fn new(restore_row: usize) -> Self {
        Self {
            targets: Vec::new(),
            restore_row,
        }
    }

    /// Appends a target path, preserving queue order and skipping duplicates.
    pub fn with_target(self, path: PathBuf) -> Self {
        if self.targets.contains(&path) {
            return self;
        }
        let mut targets = self.targets;
        targets.push(path);
        Self { targets, ..self }
    }

    /// The queued paths, in the order they were added.
    pub fn targets(&self) -> &[PathBuf] {
        &self.targets
    }

    /// The cursor row to restore when the batch is aborted.
    pub fn restore_row(&self) -> usize {
        self.restore_row
    }

    /// Returns `true` when nothing has been queued.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// One `DELETE: <path>` line per queued target, for the confirmation
    /// surface.
    pub fn confirmation_lines(&self) -> Vec<String> {
        self.targets
            .iter()
            .map(|p| format!("DELETE: {}", p.display()))
            .collect()
    }

    /// Moves every queued path to the trash, in queue order.
    ///
    /// Best-effort: a per-path failure is logged and the batch continues —
    /// the next re-list showing the file still present is the user-visible
    /// signal. Returns the number of paths successfully trashed.
    pub fn commit(&self) -> usize {
        let mut trashed = 0;
        for path in &self.targets {
            match move_to_trash(path) {
                Ok(()) => trashed += 1,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "trash failed");
                }
            }
        }
        trashed
    }

    /// Returns `true` if `path` is queued in this batch.
    pub fn contains(&self, path: &Path) -> bool {
        self.targets.iter().any(|p| p == path)
    }
}
