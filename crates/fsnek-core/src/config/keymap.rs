//! Key binding configuration.
//!
//! Key bindings map key names (e.g. `"j"`, `"Enter"`, `"Backspace"`) to
//! [`Action`] values. The default bindings follow vim conventions.
//!
//! TOML files use string action identifiers (e.g. `"cursor_down"`); these
//! are resolved to [`Action`] via [`Action::from_id`] at load time.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::error::{CoreError, CoreResult};

/// Raw TOML representation, deserialized first and then resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawKeymap {
    #[serde(default)]
    bindings: HashMap<String, String>,
}

/// Complete set of key bindings.
///
/// Stores bindings as a `HashMap<String, Action>` for O(1) lookup.
/// The default instance provides vim-style navigation.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Navigation
        bindings.insert("j".to_string(), Action::CursorDown);
        bindings.insert("k".to_string(), Action::CursorUp);
        bindings.insert("Down".to_string(), Action::CursorDown);
        bindings.insert("Up".to_string(), Action::CursorUp);
        bindings.insert("g".to_string(), Action::CursorTop);
        bindings.insert("G".to_string(), Action::CursorBottom);
        bindings.insert("Enter".to_string(), Action::Activate);
        bindings.insert("l".to_string(), Action::Activate);
        bindings.insert("Right".to_string(), Action::Activate);
        bindings.insert("h".to_string(), Action::Ascend);
        bindings.insert("Left".to_string(), Action::Ascend);
        bindings.insert("Backspace".to_string(), Action::Ascend);
        bindings.insert("-".to_string(), Action::Ascend);

        // Selection
        bindings.insert("v".to_string(), Action::VisualToggle);
        bindings.insert("V".to_string(), Action::VisualToggle);
        bindings.insert("Esc".to_string(), Action::Cancel);

        // File operations
        bindings.insert("d".to_string(), Action::Delete);
        bindings.insert("y".to_string(), Action::Yank);
        bindings.insert("i".to_string(), Action::RenameInsert);
        bindings.insert("I".to_string(), Action::RenameInsert);
        bindings.insert("a".to_string(), Action::RenameAppend);
        bindings.insert("A".to_string(), Action::RenameAppendEnd);

        // Misc
        bindings.insert("q".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl Keymap {
    /// Loads key bindings from a TOML file at `path`.
    ///
    /// String action identifiers are resolved via [`Action::from_id`].
    /// Unknown action strings are silently ignored.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        let raw: RawKeymap =
            toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        let bindings = raw
            .bindings
            .into_iter()
            .filter_map(|(key, action_id)| Action::from_id(&action_id).map(|a| (key, a)))
            .collect();
        Ok(Self { bindings })
    }

    /// Like [`Keymap::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> CoreResult<Self> {
        match Self::load(path) {
            Ok(keymap) => Ok(keymap),
            Err(CoreError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Returns the action mapped to `key`, or `None` if unbound.
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Returns all bindings, for iteration and display.
    pub fn bindings(&self) -> &HashMap<String, Action> {
        &self.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_keymap_has_navigation_keys() {
        let keymap = Keymap::default();

        assert_eq!(keymap.action_for_key("j"), Some(Action::CursorDown));
        assert_eq!(keymap.action_for_key("k"), Some(Action::CursorUp));
        assert_eq!(keymap.action_for_key("g"), Some(Action::CursorTop));
        assert_eq!(keymap.action_for_key("G"), Some(Action::CursorBottom));
        assert_eq!(keymap.action_for_key("Enter"), Some(Action::Activate));
        assert_eq!(keymap.action_for_key("l"), Some(Action::Activate));
        assert_eq!(keymap.action_for_key("h"), Some(Action::Ascend));
        assert_eq!(keymap.action_for_key("Backspace"), Some(Action::Ascend));
        assert_eq!(keymap.action_for_key("-"), Some(Action::Ascend));
    }

    #[test]
    fn default_keymap_mirrors_arrow_keys() {
        let keymap = Keymap::default();
        assert_eq!(keymap.action_for_key("Up"), Some(Action::CursorUp));
        assert_eq!(keymap.action_for_key("Down"), Some(Action::CursorDown));
        assert_eq!(keymap.action_for_key("Left"), Some(Action::Ascend));
        assert_eq!(keymap.action_for_key("Right"), Some(Action::Activate));
    }

    #[test]
    fn default_keymap_has_selection_and_file_operation_keys() {
        let keymap = Keymap::default();

        assert_eq!(keymap.action_for_key("v"), Some(Action::VisualToggle));
        assert_eq!(keymap.action_for_key("V"), Some(Action::VisualToggle));
        assert_eq!(keymap.action_for_key("Esc"), Some(Action::Cancel));
        assert_eq!(keymap.action_for_key("d"), Some(Action::Delete));
        assert_eq!(keymap.action_for_key("y"), Some(Action::Yank));
        assert_eq!(keymap.action_for_key("i"), Some(Action::RenameInsert));
        assert_eq!(keymap.action_for_key("a"), Some(Action::RenameAppend));
        assert_eq!(keymap.action_for_key("A"), Some(Action::RenameAppendEnd));
        assert_eq!(keymap.action_for_key("q"), Some(Action::Quit));
    }

    #[test]
    fn action_for_unknown_key_returns_none() {
        let keymap = Keymap::default();
        assert_eq!(keymap.action_for_key("z"), None);
        assert_eq!(keymap.action_for_key(""), None);
        assert_eq!(keymap.action_for_key("Ctrl+X"), None);
    }

    #[test]
    fn load_custom_keymap() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(
            &path,
            r#"
[bindings]
j = "cursor_up"
k = "cursor_down"
x = "quit"
"#,
        )
        .unwrap();

        let keymap = Keymap::load(&path).unwrap();

        assert_eq!(keymap.action_for_key("j"), Some(Action::CursorUp));
        assert_eq!(keymap.action_for_key("k"), Some(Action::CursorDown));
        assert_eq!(keymap.action_for_key("x"), Some(Action::Quit));
        // A loaded keymap replaces the defaults outright.
        assert_eq!(keymap.action_for_key("h"), None);
    }

    #[test]
    fn load_custom_keymap_ignores_unknown_actions() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(
            &path,
            r#"
[bindings]
j = "cursor_down"
x = "nonexistent_action"
"#,
        )
        .unwrap();

        let keymap = Keymap::load(&path).unwrap();
        assert_eq!(keymap.action_for_key("j"), Some(Action::CursorDown));
        assert_eq!(keymap.action_for_key("x"), None);
    }

    #[test]
    fn load_empty_keymap_has_no_bindings() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(&path, "").unwrap();

        let keymap = Keymap::load(&path).unwrap();
        assert!(keymap.bindings().is_empty());
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Keymap::load(&tmp.path().join("nope.toml"));
        assert!(matches!(
            result.unwrap_err(),
            crate::error::CoreError::NotFound(_)
        ));
    }

    #[test]
    fn load_or_default_tolerates_missing_file() {
        let tmp = TempDir::new().unwrap();
        let keymap = Keymap::load_or_default(&tmp.path().join("nope.toml")).unwrap();
        assert_eq!(keymap.action_for_key("j"), Some(Action::CursorDown));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(&path, "invalid[[[toml").unwrap();

        let result = Keymap::load(&path);
        assert!(matches!(
            result.unwrap_err(),
            crate::error::CoreError::ConfigParse(_)
        ));
    }
}
