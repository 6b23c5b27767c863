//! Theme configuration for fsnek.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#ff5500"`) so the theme
//! stays independent of any terminal backend. The frontend converts them to
//! concrete colors at render time.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Complete theme configuration with per-component color groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub panel: PanelTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
    #[serde(default)]
    pub popup: PopupTheme,
}

impl Theme {
    /// Loads a theme from a TOML file at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Like [`Theme::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> CoreResult<Self> {
        match Self::load(path) {
            Ok(theme) => Ok(theme),
            Err(CoreError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Saves the theme to a TOML file at `path`.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// File list panel colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelTheme {
    pub dir_fg: String,
    pub file_fg: String,
    pub cursor_fg: String,
    pub cursor_bg: String,
    pub visual_bg: String,
    pub flash_bg: String,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            dir_fg: "blue".to_string(),
            file_fg: "white".to_string(),
            cursor_fg: "black".to_string(),
            cursor_bg: "white".to_string(),
            visual_bg: "magenta".to_string(),
            flash_bg: "yellow".to_string(),
        }
    }
}

/// Status bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBarTheme {
    pub bg: String,
    pub path_fg: String,
    pub message_fg: String,
    pub error_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            bg: "dark_gray".to_string(),
            path_fg: "white".to_string(),
            message_fg: "green".to_string(),
            error_fg: "red".to_string(),
        }
    }
}

/// Popup/dialog colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupTheme {
    pub border_fg: String,
    pub title_fg: String,
    pub input_fg: String,
}

impl Default for PopupTheme {
    fn default() -> Self {
        Self {
            border_fg: "yellow".to_string(),
            title_fg: "white".to_string(),
            input_fg: "white".to_string(),
        }
    }
}
