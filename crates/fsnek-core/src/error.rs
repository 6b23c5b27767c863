//! Error types for `fsnek-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message or take corrective action. No variant is fatal:
/// every error resolves to a notification and a rolled-back state.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("cannot access directory: permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to a file.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Going back was requested from the navigation floor.
    #[error("cannot go back any further")]
    AtFloor,

    /// A file was activated but this browser never launches applications.
    #[error("no default application set for opening {0}")]
    NoHandler(String),

    /// A file or directory name is invalid (empty, contains path separators, etc.).
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The platform trash service rejected a path.
    #[error("trash error: {0}")]
    Trash(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `fsnek-core`.
pub type CoreResult<T> = Result<T, CoreError>;
