//! Theme data model.
//!
//! A [`Theme`] is a folder of wallpaper images, a [`ThemeGroup`] is a named
//! set of related themes, and a [`ScanResult`] is what one scan produces.

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::path_utils;

/// A single folder of wallpaper images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Display name.
    pub name: String,
    /// Folder the images were read from.
    pub folder_path: PathBuf,
    /// Image files directly inside the folder, sorted by file name.
    pub image_files: Vec<PathBuf>,
}

impl Theme {
    /// Build a theme from a folder, collecting the images it contains.
    ///
    /// An unreadable folder produces a theme with no images.
    pub fn load(name: impl Into<String>, folder: &Path) -> Self {
        let image_files = match path_utils::list_entries(folder) {
            Ok(entries) => entries
                .into_iter()
                .filter(|p| p.is_file() && path_utils::has_image_extension(p))
                .collect(),
            Err(e) => {
                tracing::debug!("Could not list images in {}: {}", folder.display(), e);
                Vec::new()
            }
        };

        Self {
            name: name.into(),
            folder_path: folder.to_path_buf(),
            image_files,
        }
    }

    /// Same folder and images under a different name.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Whether the folder held no images.
    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }

    pub fn image_count(&self) -> usize {
        self.image_files.len()
    }
}

/// A named collection of related themes (e.g. seasonal variants).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeGroup {
    pub name: String,
    themes: Vec<Theme>,
}

impl ThemeGroup {
    /// Create a group, or `None` when there are no themes to hold.
    pub fn new(name: impl Into<String>, themes: Vec<Theme>) -> Option<Self> {
        if themes.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            themes,
        })
    }

    /// Member themes in discovery order. Never empty.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }
}

/// A named entry of a [`ScanResult`], either a flat theme or a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEntry<'a> {
    Flat(&'a Theme),
    Group(&'a ThemeGroup),
}

impl ThemeEntry<'_> {
    pub fn name(&self) -> &str {
        match self {
            ThemeEntry::Flat(theme) => &theme.name,
            ThemeEntry::Group(group) => &group.name,
        }
    }
}

/// Outcome of one scan of a wallpaper root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Root directory that was scanned.
    pub root: PathBuf,
    pub flat_themes: Vec<Theme>,
    pub grouped_themes: Vec<ThemeGroup>,
}

impl ScanResult {
    /// An empty result for the given root.
    pub fn empty(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.flat_themes.is_empty() && self.grouped_themes.is_empty()
    }

    /// Flat themes plus every member of every group.
    pub fn theme_count(&self) -> usize {
        self.flat_themes.len()
            + self
                .grouped_themes
                .iter()
                .map(|g| g.themes().len())
                .sum::<usize>()
    }

    /// Look up a flat theme by name.
    pub fn flat_theme(&self, name: &str) -> Option<&Theme> {
        self.flat_themes.iter().find(|t| t.name == name)
    }

    /// Look up a group by name.
    pub fn group(&self, name: &str) -> Option<&ThemeGroup> {
        self.grouped_themes.iter().find(|g| g.name == name)
    }

    /// Look up a top-level entry by name, flat themes first.
    ///
    /// Group members are not searched.
    pub fn find(&self, name: &str) -> Option<ThemeEntry<'_>> {
        self.flat_theme(name)
            .map(ThemeEntry::Flat)
            .or_else(|| self.group(name).map(ThemeEntry::Group))
    }
}
