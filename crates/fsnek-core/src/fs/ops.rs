//! Directory listing and file operations.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;

/// Reads the immediate contents of a directory and returns them as [`FileEntry`] values.
///
/// The returned entries are **unsorted**; use [`sort_entries`] afterwards.
/// A per-entry stat failure (e.g. the file vanished between enumeration and
/// stat) does not abort the listing — that entry is returned with unknown
/// size and modification time via [`FileEntry::unknown`].
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the path does not exist.
/// - [`CoreError::NotADirectory`] — the path is not a directory.
/// - [`CoreError::PermissionDenied`] — read access is denied.
/// - [`CoreError::Io`] — any other I/O error.
pub fn read_directory(path: &Path) -> CoreResult<Vec<FileEntry>> {
    if !path.exists() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            CoreError::PermissionDenied(path.to_path_buf())
        } else {
            CoreError::Io(e)
        }
    })?;

    let mut entries = Vec::new();

    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        match dir_entry.metadata() {
            Ok(metadata) => entries.push(FileEntry::new(dir_entry.path(), &metadata)),
            Err(_) => {
                let is_dir = dir_entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                entries.push(FileEntry::unknown(dir_entry.path(), is_dir));
            }
        }
    }

    Ok(entries)
}

/// Sorts entries with directories strictly before files, and within each
/// group by case-sensitive lexicographic comparison of the raw name.
///
/// Returns a **new** sorted `Vec<FileEntry>` — the input slice is never
/// mutated. The directories-before-files invariant holds regardless of
/// name casing or locale.
pub fn sort_entries(entries: &[FileEntry]) -> Vec<FileEntry> {
    let mut sorted: Vec<FileEntry> = entries.to_vec();

    sorted.sort_by(|a, b| {
        let dir_cmp = b.is_dir().cmp(&a.is_dir());
        if dir_cmp != std::cmp::Ordering::Equal {
            return dir_cmp;
        }
        a.name().cmp(b.name())
    });

    sorted
}

/// Drops hidden entries (names beginning with `.`).
///
/// Hidden entries are never shown by this browser; this is not configurable.
pub fn filter_hidden(entries: &[FileEntry]) -> Vec<FileEntry> {
    entries.iter().filter(|e| !e.is_hidden()).cloned().collect()
}

/// Formats a byte count for display: `0 -> "0B"`, `1536 -> "1.5K"`.
///
/// The unit is the largest of B/K/M/G/T/P for which the magnitude stays
/// below 1024, capping at P. Byte counts print without a decimal; larger
/// units with one decimal place. `None` (stat failure) renders as
/// `"Unknown"`. Pure and stateless.
pub fn format_size(size: Option<u64>) -> String {
    const UNITS: [&str; 6] = ["B", "K", "M", "G", "T", "P"];

    let Some(bytes) = size else {
        return "Unknown".to_string();
    };

    if bytes < 1024 {
        return format!("{bytes}B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.1}{}", UNITS[unit])
}

/// Renames a file or directory within the same parent directory.
///
/// The `new_name` must be a valid file name (no path separators, not empty,
/// not `.` or `..`).
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `path` does not exist.
/// - [`CoreError::InvalidName`] if `new_name` is invalid.
/// - [`CoreError::Io`] for any I/O failure.
pub fn rename_file(path: &Path, new_name: &str) -> CoreResult<()> {
    // symlink_metadata: does not follow symlinks, avoids TOCTOU
    if std::fs::symlink_metadata(path).is_err() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }

    if !is_valid_filename(new_name) {
        return Err(CoreError::InvalidName(new_name.to_string()));
    }

    let parent = path
        .parent()
        .ok_or_else(|| CoreError::InvalidName("no parent directory".to_string()))?;
    let new_path = parent.join(new_name);

    std::fs::rename(path, &new_path)?;

    Ok(())
}

/// Moves a file or directory to the platform trash (not a permanent erase).
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `path` does not exist.
/// - [`CoreError::Trash`] if the trash service rejects the path.
pub fn move_to_trash(path: &Path) -> CoreResult<()> {
    if std::fs::symlink_metadata(path).is_err() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }

    trash::delete(path).map_err(|e| CoreError::Trash(e.to_string()))
}

/// Returns `true` when `name` is usable as a file name.
fn is_valid_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_directory_lists_children() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let entries = read_directory(tmp.path()).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn read_directory_missing_path() {
        let err = read_directory(Path::new("/no/such/dir")).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn read_directory_on_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let err = read_directory(&file).unwrap_err();
        assert!(matches!(err, CoreError::NotADirectory(_)));
    }

    #[cfg(unix)]
    #[test]
    fn read_directory_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let result = read_directory(&locked);

        // Restore permissions so TempDir can clean up.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Running as root bypasses mode bits; only assert when it failed.
        if let Err(err) = result {
            assert!(matches!(err, CoreError::PermissionDenied(_)));
        }
    }

    #[test]
    fn sort_entries_dirs_before_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("aaa.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("zzz")).unwrap();

        let sorted = sort_entries(&read_directory(tmp.path()).unwrap());
        assert!(sorted[0].is_dir());
        assert_eq!(sorted[0].name(), "zzz");
        assert_eq!(sorted[1].name(), "aaa.txt");
    }

    #[test]
    fn sort_entries_lexicographic_within_group() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("banana"), "").unwrap();
        fs::write(tmp.path().join("apple"), "").unwrap();
        fs::write(tmp.path().join("cherry"), "").unwrap();

        let sorted = sort_entries(&read_directory(tmp.path()).unwrap());
        let names: Vec<&str> = sorted.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn sort_entries_case_sensitive() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Zebra"), "").unwrap();
        fs::write(tmp.path().join("apple"), "").unwrap();

        // Uppercase sorts before lowercase in byte-wise comparison.
        let sorted = sort_entries(&read_directory(tmp.path()).unwrap());
        let names: Vec<&str> = sorted.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Zebra", "apple"]);
    }

    #[test]
    fn sort_entries_does_not_mutate_input() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b"), "").unwrap();
        fs::write(tmp.path().join("a"), "").unwrap();

        let raw = read_directory(tmp.path()).unwrap();
        let before: Vec<String> = raw.iter().map(|e| e.name().to_string()).collect();
        let _ = sort_entries(&raw);
        let after: Vec<String> = raw.iter().map(|e| e.name().to_string()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn filter_hidden_drops_dot_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".secret"), "").unwrap();
        fs::write(tmp.path().join("visible.txt"), "").unwrap();
        fs::create_dir(tmp.path().join(".config")).unwrap();

        let visible = filter_hidden(&read_directory(tmp.path()).unwrap());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name(), "visible.txt");
    }

    #[test]
    fn format_size_bytes() {
        assert_eq!(format_size(Some(0)), "0B");
        assert_eq!(format_size(Some(512)), "512B");
        assert_eq!(format_size(Some(1023)), "1023B");
    }

    #[test]
    fn format_size_kilobytes() {
        assert_eq!(format_size(Some(1024)), "1.0K");
        assert_eq!(format_size(Some(1536)), "1.5K");
    }

    #[test]
    fn format_size_megabytes() {
        assert_eq!(format_size(Some(1_048_576)), "1.0M");
    }

    #[test]
    fn format_size_larger_units() {
        assert_eq!(format_size(Some(1024u64.pow(3))), "1.0G");
        assert_eq!(format_size(Some(1024u64.pow(4))), "1.0T");
        assert_eq!(format_size(Some(1024u64.pow(5))), "1.0P");
        // Caps at P instead of rolling over.
        assert_eq!(format_size(Some(1024u64.pow(6))), "1024.0P");
    }

    #[test]
    fn format_size_unknown() {
        assert_eq!(format_size(None), "Unknown");
    }

    #[test]
    fn rename_file_regular() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("old_name.txt");
        fs::write(&file, "content").unwrap();

        rename_file(&file, "new_name.txt").unwrap();

        assert!(!file.exists());
        let new_path = tmp.path().join("new_name.txt");
        assert!(new_path.exists());
        assert_eq!(fs::read_to_string(&new_path).unwrap(), "content");
    }

    #[test]
    fn rename_file_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("old_dir");
        fs::create_dir(&dir).unwrap();

        rename_file(&dir, "new_dir").unwrap();

        assert!(!dir.exists());
        assert!(tmp.path().join("new_dir").is_dir());
    }

    #[test]
    fn rename_file_missing_source() {
        let err = rename_file(Path::new("/no/such/file"), "anything").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn rename_file_rejects_empty_name() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("keep.txt");
        fs::write(&file, "").unwrap();

        let err = rename_file(&file, "").unwrap_err();
        assert!(matches!(err, CoreError::InvalidName(_)));
        assert!(file.exists());
    }

    #[test]
    fn rename_file_rejects_path_separators() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("keep.txt");
        fs::write(&file, "").unwrap();

        assert!(matches!(
            rename_file(&file, "a/b").unwrap_err(),
            CoreError::InvalidName(_)
        ));
        assert!(matches!(
            rename_file(&file, "..").unwrap_err(),
            CoreError::InvalidName(_)
        ));
    }

    #[test]
    fn move_to_trash_missing_source() {
        let err = move_to_trash(Path::new("/no/such/file")).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }
}
