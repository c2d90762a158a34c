// Wallpaper theme scanner
// Walks exactly two directory levels below the root and classifies folders

use super::error::ThemeError;
use super::path_utils;
use super::settings::{resolve_root, ThemeSettings};
use super::theme::{ScanResult, Theme, ThemeGroup};
use std::io;
use std::path::{Path, PathBuf};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Scanner for one wallpaper root
///
/// Top-level folders without subfolders become flat themes. Folders with
/// subfolders become theme groups, or a single flat theme when flattening is
/// enabled and only one subfolder holds images.
#[derive(Debug, Clone)]
pub struct ThemeScanner {
    root: PathBuf,
    flatten_single_subthemes: bool,
}

impl ThemeScanner {
    /// Create a scanner for the given root with flattening disabled
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            flatten_single_subthemes: false,
        }
    }

    /// Create a scanner from an optional root override and the flatten flag
    /// A missing or blank override selects the default wallpaper root
    pub fn for_root(root_override: Option<&str>, flatten_single_subthemes: bool) -> Self {
        Self::new(resolve_root(root_override)).with_flatten(flatten_single_subthemes)
    }

    /// Create a scanner from persisted settings, reading each value once
    pub fn from_settings(settings: &dyn ThemeSettings) -> Self {
        let directory = settings.wallpaper_directory();
        Self::for_root(directory.as_deref(), settings.flatten_single_subthemes())
    }

    /// Enable or disable single-subtheme flattening
    pub fn with_flatten(mut self, flatten_single_subthemes: bool) -> Self {
        self.flatten_single_subthemes = flatten_single_subthemes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn flattens_single_subthemes(&self) -> bool {
        self.flatten_single_subthemes
    }

    /// Run the scan on the current thread
    ///
    /// Never fails: an unreadable root is logged and yields an empty result.
    pub fn scan_blocking(&self) -> ScanResult {
        tracing::info!("Loading themes from: {}", self.root.display());

        let mut result = ScanResult::empty(&self.root);

        let top_entries = match path_utils::list_entries(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                let err = ThemeError::from_io_error(
                    e,
                    "listing wallpaper root",
                    Some(self.root.clone()),
                );
                tracing::error!("Failed to read contents of {}: {}", self.root.display(), err);
                return result;
            }
        };

        for folder in path_utils::subdirectories(top_entries) {
            let listing = path_utils::list_entries(&folder);
            self.classify_folder(&folder, listing, &mut result);
        }

        tracing::info!(
            "Total flat themes: {}, grouped themes: {}",
            result.flat_themes.len(),
            result.grouped_themes.len()
        );

        result
    }

    /// Classify one top-level folder from its listing and record it in the result
    fn classify_folder(
        &self,
        folder: &Path,
        listing: io::Result<Vec<PathBuf>>,
        result: &mut ScanResult,
    ) {
        let folder_name = path_utils::folder_name(folder);
        tracing::info!("Checking folder: {}", folder_name);

        let subfolders = subfolders_from_listing(folder, listing);

        if subfolders.is_empty() {
            tracing::info!("Flat theme: {}", folder_name);
            let theme = Theme::load(folder_name, folder);
            if theme.is_empty() {
                tracing::debug!("Skipping {}: no images", theme.name);
            } else {
                result.flat_themes.push(theme);
            }
            return;
        }

        tracing::info!("Theme group: {}", folder_name);
        let mut sub_themes = Vec::with_capacity(subfolders.len());
        for sub in &subfolders {
            let sub_name = path_utils::folder_name(sub);
            tracing::info!("   sub-theme: {}", sub_name);
            let theme = Theme::load(sub_name, sub);
            if theme.is_empty() {
                tracing::debug!("Skipping {}/{}: no images", folder_name, theme.name);
            } else {
                sub_themes.push(theme);
            }
        }

        if self.flatten_single_subthemes && sub_themes.len() == 1 {
            if let Some(single) = sub_themes.pop() {
                tracing::info!("Flattening {} into its only sub-theme {}", folder_name, single.name);
                result.flat_themes.push(single.with_name(folder_name));
            }
            return;
        }

        match ThemeGroup::new(folder_name, sub_themes) {
            Some(group) => result.grouped_themes.push(group),
            None => tracing::debug!("Dropping {}: no sub-theme has images", folder.display()),
        }
    }

    /// Run the scan on tokio's blocking pool and await the result
    pub async fn scan(self) -> ScanResult {
        let root = self.root.clone();
        match tokio::task::spawn_blocking(move || self.scan_blocking()).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Theme scan of {} did not complete: {}", root.display(), e);
                ScanResult::empty(root)
            }
        }
    }

    /// Scan in the background and send the result on `tx`
    ///
    /// The receiving end is typically polled by a UI event loop. Must be
    /// called from within a tokio runtime.
    pub fn spawn_scan(self, tx: mpsc::UnboundedSender<ScanResult>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let result = self.scan().await;
            if tx.send(result).is_err() {
                tracing::debug!("Theme scan finished after its receiver was dropped");
            }
        })
    }

    /// Scan in the background, then run `callback` once as a task on `context`
    ///
    /// Aborting the returned handle prevents delivery; a filesystem pass
    /// already running on the blocking pool still runs to completion.
    pub fn scan_with_callback<F>(self, context: &Handle, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(ScanResult) + Send + 'static,
    {
        context.spawn(async move {
            let result = self.scan().await;
            callback(result);
        })
    }
}

/// Subfolders of a top folder; an unreadable folder counts as having none
fn subfolders_from_listing(folder: &Path, listing: io::Result<Vec<PathBuf>>) -> Vec<PathBuf> {
    match listing {
        Ok(entries) => path_utils::subdirectories(entries),
        Err(e) => {
            let err = ThemeError::from_io_error(e, "listing theme folder", Some(folder.to_path_buf()));
            tracing::warn!("Failed to read contents of {}: {}", folder.display(), err);
            Vec::new()
        }
    }
}
