//! Top-level application state. Immutable transitions via `with_*` methods.
//!
//! `App` owns the browser, the visual selection, the gesture tracker, and
//! the pending delete batch. One key event is fully processed (including
//! re-listing) before the next; deadline behavior (double-tap window, yank
//! flash) is realized by [`App::tick`] between events.

use std::path::Path;
use std::time::{Duration, Instant};

use fsnek_core::action::Action;
use fsnek_core::config::keymap::Keymap;
use fsnek_core::config::settings::Config;
use fsnek_core::config::theme::Theme;
use fsnek_core::fs::ops::rename_file;
use fsnek_core::gesture::{GestureKey, GestureTracker};
use fsnek_core::nav::browser::Browser;
use fsnek_core::pending::PendingDelete;
use fsnek_core::select::VisualSelection;

/// How long the yank flash stays lit.
pub const FLASH_DURATION: Duration = Duration::from_millis(200);

/// Application mode. Determines how input is routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// Editing a new name for the entry at `row`. `caret` is a char index
    /// into `buffer`.
    Rename {
        buffer: String,
        caret: usize,
        row: usize,
    },
    /// A delete batch is queued and awaiting y/n.
    Confirm,
}

/// Where the rename caret starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameKind {
    /// Caret at the start of the name.
    Insert,
    /// Caret before the first `.`, or at the end when there is none.
    Append,
    /// Caret at the end of the name.
    AppendAtEnd,
}

#[derive(Debug)]
pub struct App {
    mode: AppMode,
    browser: Browser,
    selection: VisualSelection,
    gestures: GestureTracker,
    pending: Option<PendingDelete>,
    /// Deadline while the yank flash is lit.
    flash_until: Option<Instant>,
    should_quit: bool,
    status_message: Option<String>,
    status_is_error: bool,
    config: Config,
    theme: Theme,
    keymap: Keymap,
}

impl App {
    /// Creates a new App browsing `start_dir`, refusing to ascend above `floor`.
    pub fn new(
        start_dir: &Path,
        floor: &Path,
        config: Config,
        theme: Theme,
        keymap: Keymap,
    ) -> anyhow::Result<Self> {
        let browser = Browser::open(start_dir, floor)?;

        Ok(Self {
            mode: AppMode::Normal,
            browser,
            selection: VisualSelection::new(),
            gestures: GestureTracker::new(),
            pending: None,
            flash_until: None,
            should_quit: false,
            status_message: None,
            status_is_error: false,
            config,
            theme,
            keymap,
        })
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    pub fn selection(&self) -> &VisualSelection {
        &self.selection
    }

    pub fn pending(&self) -> Option<&PendingDelete> {
        self.pending.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn status_is_error(&self) -> bool {
        self.status_is_error
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Rows inside the active visual range, for rendering.
    pub fn visual_rows(&self) -> Vec<usize> {
        self.selection.selected_rows(self.browser.cursor())
    }

    /// Whether the yank flash is currently lit.
    pub fn flash_active(&self) -> bool {
        self.flash_until.is_some()
    }

    /// Mark the app for quitting.
    pub fn with_quit(self) -> Self {
        Self {
            should_quit: true,
            ..self
        }
    }

    /// Set a status message.
    pub fn with_status(self, msg: String) -> Self {
        Self {
            status_message: Some(msg),
            status_is_error: false,
            ..self
        }
    }

    /// Set an error status message.
    pub fn with_error(self, msg: String) -> Self {
        Self {
            status_message: Some(msg),
            status_is_error: true,
            ..self
        }
    }

    /// Clear the status message.
    pub fn with_clear_status(self) -> Self {
        Self {
            status_message: None,
            status_is_error: false,
            ..self
        }
    }

    /// Advances deadline-driven state: expires stale gesture presses and
    /// puts out a finished yank flash.
    pub fn tick(mut self, now: Instant) -> Self {
        self.gestures.expire(now);
        let flash_until = self.flash_until.filter(|deadline| now < *deadline);
        Self {
            flash_until,
            ..self
        }
    }

    /// The event-poll timeout: short enough to wake at the next gesture or
    /// flash deadline, capped at 100ms.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let cap = Duration::from_millis(100);
        let next = [self.gestures.next_deadline(), self.flash_until]
            .into_iter()
            .flatten()
            .min();
        match next {
            Some(deadline) => deadline.saturating_duration_since(now).min(cap),
            None => cap,
        }
    }

    /// Handle a Normal-mode action by producing a new App state.
    pub fn handle_action(mut self, action: Action, now: Instant) -> Self {
        match action {
            Action::CursorDown => Self {
                browser: self.browser.move_down(),
                ..self
            },
            Action::CursorUp => Self {
                browser: self.browser.move_up(),
                ..self
            },
            Action::CursorTop => {
                if self.gestures.press(GestureKey::Top, now) {
                    Self {
                        browser: self.browser.go_to_first(),
                        ..self
                    }
                } else {
                    self
                }
            }
            Action::CursorBottom => Self {
                browser: self.browser.go_to_last(),
                ..self
            },
            Action::Activate => self.handle_activate(),
            Action::Ascend => self.handle_ascend(),
            Action::VisualToggle => {
                let selection = self.selection.toggle(self.browser.cursor());
                Self { selection, ..self }
            }
            Action::Cancel => Self {
                selection: self.selection.deactivate(),
                ..self
            },
            Action::Delete => {
                if self.selection.is_active() {
                    self.queue_delete()
                } else if self.gestures.press(GestureKey::Delete, now) {
                    self.queue_delete()
                } else {
                    self
                }
            }
            Action::Yank => {
                if self.selection.is_active() || self.gestures.press(GestureKey::Yank, now) {
                    Self {
                        flash_until: Some(now + FLASH_DURATION),
                        selection: self.selection.deactivate(),
                        ..self
                    }
                } else {
                    self
                }
            }
            Action::RenameInsert => self.begin_rename(RenameKind::Insert),
            Action::RenameAppend => self.begin_rename(RenameKind::Append),
            Action::RenameAppendEnd => self.begin_rename(RenameKind::AppendAtEnd),
            Action::Quit => self.with_quit(),
        }
    }

    fn handle_activate(self) -> Self {
        match self.browser.descend() {
            // Marks are row indices into the directory being left; they
            // mean nothing in the new listing.
            Ok(browser) => Self {
                browser,
                selection: self.selection.clear_marks(),
                ..self
            },
            Err(e) => {
                let msg = e.to_string();
                self.with_error(msg)
            }
        }
    }

    fn handle_ascend(self) -> Self {
        match self.browser.ascend() {
            Ok(browser) => Self {
                browser,
                selection: self.selection.clear_marks(),
                ..self
            },
            Err(e) => {
                let msg = e.to_string();
                self.with_error(msg)
            }
        }
    }

    /// Stages a delete batch: cursor row, or range plus marks in visual mode.
    ///
    /// Queued paths disappear from the view immediately, but nothing is
    /// trashed until the confirmation is approved. With
    /// `general.confirm_delete = false` the batch commits right away.
    fn queue_delete(self) -> Self {
        let cursor = self.browser.cursor();
        let rows = if self.selection.is_active() {
            self.selection.delete_targets(cursor)
        } else {
            vec![cursor]
        };

        let entries = self.browser.entries();
        let mut pending = PendingDelete::new(cursor);
        for row in rows {
            if let Some(entry) = entries.get(row) {
                pending = pending.with_target(entry.path().to_path_buf());
            }
        }

        if pending.is_empty() {
            return self.with_status("Nothing to delete".to_string());
        }

        let browser = self.browser.without_paths(pending.targets());
        let confirm = self.config.general.confirm_delete;
        let queued = Self {
            mode: AppMode::Confirm,
            browser,
            selection: self.selection.clear_marks(),
            pending: Some(pending),
            ..self
        };
        if confirm {
            queued
        } else {
            queued.handle_confirm(true)
        }
    }

    /// Resolves the open confirmation: trash the batch, or discard it and
    /// restore the view.
    pub fn handle_confirm(mut self, approved: bool) -> Self {
        let Some(pending) = self.pending.take() else {
            return Self {
                mode: AppMode::Normal,
                ..self
            };
        };

        if approved {
            let trashed = pending.commit();
            let browser = match self.browser.refresh() {
                Ok(b) => b,
                Err(e) => {
                    let msg = e.to_string();
                    return Self {
                        mode: AppMode::Normal,
                        ..self
                    }
                    .with_error(msg);
                }
            };
            Self {
                mode: AppMode::Normal,
                browser,
                ..self
            }
            .with_status(format!("Moved {trashed} item(s) to trash"))
        } else {
            let restore = pending.restore_row();
            let browser = match self.browser.refresh() {
                Ok(b) => b.with_cursor(restore),
                Err(e) => {
                    let msg = e.to_string();
                    return Self {
                        mode: AppMode::Normal,
                        ..self
                    }
                    .with_error(msg);
                }
            };
            Self {
                mode: AppMode::Normal,
                browser,
                ..self
            }
            .with_status("Deletion cancelled".to_string())
        }
    }

    /// Opens the rename input seeded with the cursor entry's name.
    fn begin_rename(self, kind: RenameKind) -> Self {
        let Some(entry) = self.browser.cursor_entry() else {
            return self.with_status("Nothing to rename".to_string());
        };

        let buffer = entry.name().to_string();
        let chars: Vec<char> = buffer.chars().collect();
        let caret = match kind {
            RenameKind::Insert => 0,
            RenameKind::Append => chars
                .iter()
                .position(|&c| c == '.')
                .unwrap_or(chars.len()),
            RenameKind::AppendAtEnd => chars.len(),
        };
        let row = self.browser.cursor();

        Self {
            mode: AppMode::Rename { buffer, caret, row },
            ..self
        }
    }

    /// Inserts a character at the rename caret.
    pub fn rename_push_char(self, c: char) -> Self {
        let AppMode::Rename { buffer, caret, row } = self.mode.clone() else {
            return self;
        };
        let mut chars: Vec<char> = buffer.chars().collect();
        let caret = caret.min(chars.len());
        chars.insert(caret, c);
        Self {
            mode: AppMode::Rename {
                buffer: chars.into_iter().collect(),
                caret: caret + 1,
                row,
            },
            ..self
        }
    }

    /// Deletes the character before the rename caret.
    pub fn rename_backspace(self) -> Self {
        let AppMode::Rename { buffer, caret, row } = self.mode.clone() else {
            return self;
        };
        if caret == 0 {
            return self;
        }
        let mut chars: Vec<char> = buffer.chars().collect();
        let caret = caret.min(chars.len());
        chars.remove(caret - 1);
        Self {
            mode: AppMode::Rename {
                buffer: chars.into_iter().collect(),
                caret: caret - 1,
                row,
            },
            ..self
        }
    }

    /// Moves the rename caret one character left.
    pub fn rename_caret_left(self) -> Self {
        let AppMode::Rename { buffer, caret, row } = self.mode.clone() else {
            return self;
        };
        Self {
            mode: AppMode::Rename {
                buffer,
                caret: caret.saturating_sub(1),
                row,
            },
            ..self
        }
    }

    /// Moves the rename caret one character right.
    pub fn rename_caret_right(self) -> Self {
        let AppMode::Rename { buffer, caret, row } = self.mode.clone() else {
            return self;
        };
        let len = buffer.chars().count();
        Self {
            mode: AppMode::Rename {
                buffer,
                caret: (caret + 1).min(len),
                row,
            },
            ..self
        }
    }

    /// Abandons the rename, keeping the original name.
    pub fn rename_cancel(self) -> Self {
        Self {
            mode: AppMode::Normal,
            ..self
        }
    }

    /// Submits the rename buffer.
    ///
    /// An empty name is rejected and the original file is left untouched.
    /// On success the directory is re-listed and the cursor returns to the
    /// renamed entry's original row.
    pub fn rename_submit(self) -> Self {
        let AppMode::Rename { buffer, row, .. } = self.mode.clone() else {
            return self;
        };

        if buffer.is_empty() {
            return Self {
                mode: AppMode::Normal,
                ..self
            }
            .with_error("Name cannot be empty".to_string());
        }

        let Some(entry) = self.browser.entries().get(row) else {
            return Self {
                mode: AppMode::Normal,
                ..self
            };
        };
        let path = entry.path().to_path_buf();

        match rename_file(&path, &buffer) {
            Ok(()) => {
                let browser = match self.browser.refresh() {
                    Ok(b) => b.with_cursor(row),
                    Err(e) => {
                        let msg = e.to_string();
                        return Self {
                            mode: AppMode::Normal,
                            ..self
                        }
                        .with_error(msg);
                    }
                };
                Self {
                    mode: AppMode::Normal,
                    browser,
                    ..self
                }
                .with_status(format!("Renamed to {buffer}"))
            }
            Err(e) => {
                let msg = e.to_string();
                Self {
                    mode: AppMode::Normal,
                    ..self
                }
                .with_error(msg)
            }
        }
    }
}
