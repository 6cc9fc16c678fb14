//! Adapter-layer errors: everything here touches the real filesystem,
//! which the core never does.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Refusing to write into a directory that already has content.
    #[error("Target directory is not empty: {path}")]
    NonEmptyTarget { path: PathBuf },

    /// Manifest serialization failed while writing output.
    #[error("Failed to serialize manifest: {reason}")]
    ManifestSerialization { reason: String },
}

impl AdapterError {
    pub fn io(path: impl Into<PathBuf>, operation: &str, e: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            reason: format!("Failed to {operation}: {e}"),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::NonEmptyTarget { path } => vec![
                format!("Directory already has content: {}", path.display()),
                "Use --force to write anyway (existing files may be overwritten)".into(),
                "Or choose a different output directory".into(),
            ],
            Self::ManifestSerialization { .. } => vec![
                "This appears to be a bug in Forma".into(),
                "Please report it".into(),
            ],
        }
    }
}
