//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `echogen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::EchogenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `echogen_adapters::filesystem::LocalFilesystem` (production)
/// - `echogen_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
///
/// Adapters map their failures onto the matching `ApplicationError` variant:
/// `WorkingDirectory`, `CreateDirectory` or `WriteFile`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Directory the feature directory is created in when no base directory
    /// was configured.
    fn current_dir(&self) -> EchogenResult<PathBuf>;

    /// Create a directory and all missing parents. Succeeds if it already
    /// exists.
    fn create_dir_all(&self, path: &Path) -> EchogenResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> EchogenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
