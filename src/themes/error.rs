// Error types for theme discovery and the preferences store
// Scanning itself never fails outward; these errors end up in log lines or CLI output

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for theme discovery
/// Carries the offending path and the operation that was being attempted
#[derive(Debug)]
pub enum ThemeError {
    /// File system errors with context
    DirectoryNotFound { path: PathBuf },
    PermissionDenied { path: PathBuf, operation: String },
    IoError { path: Option<PathBuf>, operation: String, source: io::Error },

    /// Preferences store errors
    ConfigParse { path: PathBuf, reason: String },
    ConfigWrite { path: PathBuf, reason: String },
    NoConfigDirectory,
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ThemeError::DirectoryNotFound { path } => {
                writeln!(f, "Directory not found: {}", path.display())?;
                write!(f, "Suggestion: Create the folder or point the wallpaper directory somewhere else")
            }
            ThemeError::PermissionDenied { path, operation } => {
                writeln!(f, "Permission denied while {}: {}", operation, path.display())?;
                write!(f, "Suggestion: Check folder permissions for the current user")
            }
            ThemeError::IoError { path, operation, source } => {
                if let Some(p) = path {
                    writeln!(f, "I/O error while {} {}: {}", operation, p.display(), source)?;
                } else {
                    writeln!(f, "I/O error while {}: {}", operation, source)?;
                }
                write!(f, "Suggestion: Check that the path is a readable directory")
            }
            ThemeError::ConfigParse { path, reason } => {
                writeln!(f, "Failed to parse preferences {}: {}", path.display(), reason)?;
                write!(f, "Suggestion: Fix the TOML syntax or delete the file to restore defaults")
            }
            ThemeError::ConfigWrite { path, reason } => {
                writeln!(f, "Failed to write preferences {}: {}", path.display(), reason)?;
                write!(f, "Suggestion: Check disk space and write permissions")
            }
            ThemeError::NoConfigDirectory => {
                writeln!(f, "Could not determine the user configuration directory")?;
                write!(f, "Suggestion: Pass --config with an explicit preferences file")
            }
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThemeError::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ThemeError {
    /// Create an error from an io::Error with context about the operation and optional path
    pub fn from_io_error(err: io::Error, operation: &str, path: Option<PathBuf>) -> Self {
        match (err.kind(), path) {
            (io::ErrorKind::NotFound, Some(path)) => ThemeError::DirectoryNotFound { path },
            (io::ErrorKind::PermissionDenied, Some(path)) => ThemeError::PermissionDenied {
                path,
                operation: operation.to_string(),
            },
            (_, path) => ThemeError::IoError {
                path,
                operation: operation.to_string(),
                source: err,
            },
        }
    }
}

impl From<io::Error> for ThemeError {
    fn from(err: io::Error) -> Self {
        ThemeError::from_io_error(err, "unknown operation", None)
    }
}
