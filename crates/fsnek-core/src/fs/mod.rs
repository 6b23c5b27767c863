//! File system abstractions for the file browser.

pub mod entry;
pub mod ops;

pub use entry::FileEntry;
pub use ops::{filter_hidden, format_size, move_to_trash, read_directory, rename_file, sort_entries};
