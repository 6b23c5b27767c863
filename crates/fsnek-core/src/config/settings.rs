//! Application configuration loaded from a TOML file.
//!
//! Missing keys fall back to defaults so fsnek runs without any config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Top-level application configuration.
///
/// All fields have sensible defaults. Call [`Config::load`] to read from a
/// TOML path, or [`Config::load_or_default`] to silently fall back when the
/// file is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
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
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    ///
    /// Parse errors and permission problems still surface, so a broken
    /// config file is never silently ignored.
    pub fn load_or_default(path: &Path) -> CoreResult<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(CoreError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Resolves the navigation floor: the directory above which the browser
    /// refuses to ascend.
    ///
    /// `floor = "home"` (the default) pins it to the user's home directory,
    /// `floor = "root"` allows browsing up to `/`. An unrecognized value
    /// falls back to home.
    pub fn floor_dir(&self) -> PathBuf {
        match self.general.floor.as_str() {
            "root" => PathBuf::from("/"),
            _ => home_dir(),
        }
    }
}

/// Best-effort home directory lookup, falling back to `/`.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/"))
}

/// General file-browsing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_floor")]
    pub floor: String,
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            floor: default_floor(),
            confirm_delete: true,
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_icons: bool,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_icons: true,
            date_format: default_date_format(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_floor() -> String {
    "home".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}
