//! Persisted preferences and wallpaper root resolution.
//!
//! The scanner only needs two values, exposed through the read-only
//! [`ThemeSettings`] trait. [`Preferences`] is the TOML-backed store the
//! binary uses; tests and embedders can implement the trait directly.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::ThemeError;
use super::path_utils;

/// Folder name appended to the pictures directory for the default root.
pub const DEFAULT_ROOT_NAME: &str = "Wallpapers";

/// Read-only view of the settings a scan depends on.
pub trait ThemeSettings: Send + Sync {
    /// Configured wallpaper root, if any. Empty values mean "use the default".
    fn wallpaper_directory(&self) -> Option<String>;

    /// Collapse a group with exactly one non-empty subtheme into a flat theme.
    fn flatten_single_subthemes(&self) -> bool;
}

/// User preferences stored as TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallpaper_directory: Option<String>,
    pub flatten_single_subthemes: bool,
}

impl ThemeSettings for Preferences {
    fn wallpaper_directory(&self) -> Option<String> {
        self.wallpaper_directory.clone()
    }

    fn flatten_single_subthemes(&self) -> bool {
        self.flatten_single_subthemes
    }
}

impl Preferences {
    /// `<config dir>/wallthemes/preferences.toml`
    pub fn default_path() -> Result<PathBuf, ThemeError> {
        dirs::config_dir()
            .map(|dir| dir.join("wallthemes").join("preferences.toml"))
            .ok_or(ThemeError::NoConfigDirectory)
    }

    /// Load preferences from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No preferences at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ThemeError::from_io_error(
                    e,
                    "reading preferences",
                    Some(path.to_path_buf()),
                ))
            }
        };

        toml::from_str(&content).map_err(|e| ThemeError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write preferences, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ThemeError> {
        let write_err = |reason: String| ThemeError::ConfigWrite {
            path: path.to_path_buf(),
            reason,
        };

        let content = toml::to_string_pretty(self).map_err(|e| write_err(e.to_string()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }
        fs::write(path, content).map_err(|e| write_err(e.to_string()))?;

        tracing::info!("Saved preferences to {}", path.display());
        Ok(())
    }
}

/// `<pictures dir>/Wallpapers`, falling back to `~/Pictures/Wallpapers`.
pub fn default_wallpaper_root() -> PathBuf {
    if let Some(pictures) = dirs::picture_dir() {
        return pictures.join(DEFAULT_ROOT_NAME);
    }
    match dirs::home_dir() {
        Some(home) => home.join("Pictures").join(DEFAULT_ROOT_NAME),
        None => PathBuf::from(DEFAULT_ROOT_NAME),
    }
}

/// Pick the directory to scan: a non-blank override (with `~` expanded),
/// otherwise the default root.
pub fn resolve_root(override_dir: Option<&str>) -> PathBuf {
    match override_dir.map(str::trim) {
        Some(dir) if !dir.is_empty() => {
            path_utils::expand_tilde(dir, dirs::home_dir().as_deref())
        }
        _ => default_wallpaper_root(),
    }
}
