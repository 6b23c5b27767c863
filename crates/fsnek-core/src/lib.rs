//! fsnek core library — UI-agnostic file browser logic.
//!
//! `fsnek-core` provides the foundational types and operations for the
//! fsnek terminal file browser. It is intentionally decoupled from any UI
//! framework so the TUI frontend (`fsnek-tui`) stays a thin rendering and
//! key-dispatch layer.
//!
//! # Modules
//!
//! - [`fs`] — File system abstractions: [`FileEntry`], directory reading, rename, trash.
//! - [`nav`] — Navigation: the [`Browser`] state machine and its cursor-row history.
//! - [`select`] — Visual-mode range selection and row marks.
//! - [`gesture`] — Double-tap gesture detection with per-key deadlines.
//! - [`pending`] — Queue-then-confirm delete workflow.
//! - [`action`] — User-triggerable actions resolved from key bindings.
//! - [`config`] — TOML-based settings, keymap, and theme.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod action;
pub mod config;
pub mod error;
pub mod fs;
pub mod gesture;
pub mod nav;
pub mod pending;
pub mod select;

pub use action::Action;
pub use config::keymap::Keymap;
pub use config::settings::Config;
pub use config::theme::Theme;
pub use error::{CoreError, CoreResult};
pub use fs::entry::FileEntry;
pub use fs::ops::{format_size, move_to_trash, read_directory, rename_file};
pub use fs::{filter_hidden, sort_entries};
pub use gesture::{GestureKey, GestureTracker, DOUBLE_TAP_WINDOW};
pub use nav::browser::Browser;
pub use nav::history::CursorHistory;
pub use pending::PendingDelete;
pub use select::VisualSelection;
