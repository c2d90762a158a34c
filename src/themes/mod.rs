// Wallpaper theme discovery
// Scans a wallpaper root and classifies its folders into flat themes and theme groups

pub mod error;
pub mod path_utils;
pub mod scanner;
pub mod settings;
pub mod theme;

// Re-export commonly used types for convenience
pub use error::ThemeError;
pub use scanner::ThemeScanner;
pub use settings::{default_wallpaper_root, resolve_root, Preferences, ThemeSettings};
pub use theme::{ScanResult, Theme, ThemeEntry, ThemeGroup};
