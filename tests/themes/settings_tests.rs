// Tests for the preferences store and root resolution

use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use wallthemes::themes::{default_wallpaper_root, resolve_root, Preferences, ThemeSettings};

struct FixedSettings {
    directory: Option<String>,
    flatten: bool,
}

impl ThemeSettings for FixedSettings {
    fn wallpaper_directory(&self) -> Option<String> {
        self.directory.clone()
    }

    fn flatten_single_subthemes(&self) -> bool {
        self.flatten
    }
}

#[test]
fn test_custom_settings_drive_scanner() {
    use wallthemes::themes::ThemeScanner;

    let settings = FixedSettings {
        directory: Some("/srv/wallpapers".to_string()),
        flatten: true,
    };
    let scanner = ThemeScanner::from_settings(&settings);
    assert_eq!(scanner.root(), PathBuf::from("/srv/wallpapers"));
    assert!(scanner.flattens_single_subthemes());

    let fallback = FixedSettings {
        directory: Some(String::new()),
        flatten: false,
    };
    assert_eq!(ThemeScanner::from_settings(&fallback).root(), default_wallpaper_root());
}

#[test]
fn test_default_root_is_wallpapers_folder() {
    let root = default_wallpaper_root();
    assert_eq!(root.file_name().unwrap(), "Wallpapers");
}

#[test]
fn test_tilde_override_expands_to_home() {
    if let Some(home) = dirs::home_dir() {
        assert_eq!(resolve_root(Some("~/Walls")), home.join("Walls"));
    }
}

#[test]
fn test_saved_file_is_readable_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.toml");

    Preferences {
        wallpaper_directory: Some("/srv/walls".to_string()),
        flatten_single_subthemes: true,
    }
    .save(&path)
    .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("wallpaper_directory = \"/srv/walls\""));
    assert!(content.contains("flatten_single_subthemes = true"));
}

#[test]
fn test_cleared_directory_is_omitted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.toml");

    Preferences::default().save(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("wallpaper_directory"));
    assert_eq!(Preferences::load(&path).unwrap(), Preferences::default());
}
