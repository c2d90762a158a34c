// Path helpers shared by the scanner and the Theme type
// Provides directory listing, display names and image detection

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File extensions (lowercase) recognised as wallpaper images
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "heic", "heif", "gif", "bmp", "tif", "tiff", "webp",
];

/// List the immediate, non-hidden entries of a directory, sorted by file name
/// Only failing to open the directory is an error; unreadable entries are skipped
pub fn list_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let read_dir = fs::read_dir(dir)?;
    Ok(collect_entries(dir, read_dir.map(|entry| entry.map(|e| e.path()))))
}

/// Keep the readable, non-hidden paths of a listing, sorted by file name
pub fn collect_entries<I>(dir: &Path, listing: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    let mut entries = Vec::new();

    for entry in listing {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        if is_hidden(&path) {
            continue;
        }
        entries.push(path);
    }

    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    entries
}

/// Split directory entries into subdirectories, dropping everything else
pub fn subdirectories(entries: Vec<PathBuf>) -> Vec<PathBuf> {
    entries.into_iter().filter(|p| p.is_dir()).collect()
}

/// Whether the final path component starts with a dot
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Base name of a folder, used as the display name of themes and groups
/// Falls back to the full path when there is no final component (e.g. "/")
pub fn folder_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// Check the extension of a path against IMAGE_EXTENSIONS, ignoring case
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Expand a leading "~" against the given home directory
/// Paths without a tilde prefix, or "~user" forms, are returned unchanged
pub fn expand_tilde(raw: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };

    if raw == "~" {
        return home.to_path_buf();
    }

    match raw.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}
