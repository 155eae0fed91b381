//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materializing a template set.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The base directory (normally the process working directory) could not
    /// be resolved.
    #[error("Cannot determine working directory: {reason}")]
    WorkingDirectory { reason: String },

    /// The feature directory could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    CreateDirectory { path: PathBuf, reason: String },

    /// A single file could not be written.
    #[error("Failed to write {path}: {reason}")]
    WriteFile { path: PathBuf, reason: String },

    /// The requested filename is not part of the feature's template set.
    #[error("No template named '{filename}' for feature '{feature}'")]
    TemplateNotFound { feature: String, filename: String },

    /// Filesystem adapter state is unusable (lock poisoned, etc.).
    #[error("Filesystem adapter lock poisoned")]
    FilesystemLock,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WorkingDirectory { .. } => vec![
                "The current directory may have been removed".into(),
                "cd into an existing directory, or pass --dir".into(),
            ],
            Self::CreateDirectory { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no regular file has the same name".into(),
            ],
            Self::WriteFile { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check file permissions and available disk space".into(),
            ],
            Self::TemplateNotFound { feature, .. } => vec![
                format!("Try: echogen list -f {}", feature),
            ],
            Self::FilesystemLock => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WorkingDirectory { .. } => ErrorCategory::Environment,
            Self::CreateDirectory { .. } | Self::WriteFile { .. } | Self::FilesystemLock => {
                ErrorCategory::Filesystem
            }
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
