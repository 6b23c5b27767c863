//! File entry representation.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A single file or directory entry.
///
/// `FileEntry` is an immutable snapshot taken at listing time — create new
/// instances via [`FileEntry::new`] or [`FileEntry::unknown`] rather than
/// mutating existing ones. Size and modification time are `None` when the
/// entry could not be stat-ed (e.g. it vanished between enumeration and
/// stat); such entries still appear in the listing as placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: String,
    size: Option<u64>,
    modified: Option<SystemTime>,
    is_dir: bool,
    is_hidden: bool,
}

impl FileEntry {
    /// Creates a new `FileEntry` from a path and its metadata.
    ///
    /// Hidden files are detected by a leading `.` in the file name.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let name = file_name_of(&path);
        let is_hidden = name.starts_with('.');

        Self {
            path,
            name,
            size: Some(metadata.len()),
            modified: metadata.modified().ok(),
            is_dir: metadata.is_dir(),
            is_hidden,
        }
    }

    /// Creates a placeholder `FileEntry` for a child whose stat failed.
    ///
    /// Size and modification time are unknown; the kind is whatever the
    /// directory enumeration reported before the entry disappeared.
    pub fn unknown(path: PathBuf, is_dir: bool) -> Self {
        let name = file_name_of(&path);
        let is_hidden = name.starts_with('.');

        Self {
            path,
            name,
            size: None,
            modified: None,
            is_dir,
            is_hidden,
        }
    }

    /// Returns the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file or directory name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the size in bytes, or `None` when stat failed.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Returns the last-modified time, if known.
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns `true` if the name starts with `.`.
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_entry_from_regular_file() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join("test.txt");
        fs::write(&file_path, "hello").unwrap();

        let metadata = fs::metadata(&file_path).unwrap();
        let entry = FileEntry::new(file_path.clone(), &metadata);

        assert_eq!(entry.name(), "test.txt");
        assert_eq!(entry.size(), Some(5));
        assert!(!entry.is_dir());
        assert!(!entry.is_hidden());
        assert_eq!(entry.path(), file_path);
        assert!(entry.modified().is_some());
    }

    #[test]
    fn file_entry_from_directory() {
        let tmp = TempDir::new().unwrap();
        let dir_path = tmp.path().join("subdir");
        fs::create_dir(&dir_path).unwrap();

        let metadata = fs::metadata(&dir_path).unwrap();
        let entry = FileEntry::new(dir_path.clone(), &metadata);

        assert_eq!(entry.name(), "subdir");
        assert!(entry.is_dir());
        assert!(!entry.is_hidden());
    }

    #[test]
    fn file_entry_hidden_file() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join(".hidden");
        fs::write(&file_path, "secret").unwrap();

        let metadata = fs::metadata(&file_path).unwrap();
        let entry = FileEntry::new(file_path, &metadata);

        assert!(entry.is_hidden());
        assert_eq!(entry.name(), ".hidden");
        assert_eq!(entry.size(), Some(6));
    }

    #[test]
    fn unknown_entry_has_no_size_or_mtime() {
        let entry = FileEntry::unknown(PathBuf::from("/gone/vanished.txt"), false);

        assert_eq!(entry.name(), "vanished.txt");
        assert_eq!(entry.size(), None);
        assert!(entry.modified().is_none());
        assert!(!entry.is_dir());
    }

    #[test]
    fn unknown_hidden_directory() {
        let entry = FileEntry::unknown(PathBuf::from("/gone/.cache"), true);

        assert!(entry.is_hidden());
        assert!(entry.is_dir());
    }

    #[test]
    fn file_entry_unicode_name() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join("파일이름.txt");
        fs::write(&file_path, "x").unwrap();

        let metadata = fs::metadata(&file_path).unwrap();
        let entry = FileEntry::new(file_path, &metadata);

        assert_eq!(entry.name(), "파일이름.txt");
    }

    #[test]
    fn file_entry_empty_file() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        let metadata = fs::metadata(&file_path).unwrap();
        let entry = FileEntry::new(file_path, &metadata);

        assert_eq!(entry.size(), Some(0));
        assert!(!entry.is_dir());
    }

    #[test]
    fn file_entry_clone_and_eq() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join("test.txt");
        fs::write(&file_path, "abc").unwrap();

        let metadata = fs::metadata(&file_path).unwrap();
        let entry1 = FileEntry::new(file_path, &metadata);
        let entry2 = entry1.clone();

        assert_eq!(entry1, entry2);
    }
}
