//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use echogen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::EchogenResult,
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn current_dir(&self) -> EchogenResult<PathBuf> {
        std::env::current_dir().map_err(|e| {
            ApplicationError::WorkingDirectory {
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn create_dir_all(&self, path: &Path) -> EchogenResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        match std::fs::create_dir_all(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            Err(e) => Err(ApplicationError::CreateDirectory {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> EchogenResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| {
            ApplicationError::WriteFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echogen_core::error::EchogenError;
    use tempfile::TempDir;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a").join("b");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn create_dir_over_regular_file_fails() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("order");
        std::fs::write(&file, "not a dir").unwrap();

        let err = LocalFilesystem::new().create_dir_all(&file).unwrap_err();
        assert!(matches!(
            err,
            EchogenError::Application(ApplicationError::CreateDirectory { .. })
        ));
    }

    #[test]
    fn write_file_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("handler.go");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "custom edits").unwrap();
        fs.write_file(&path, "package order").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "package order");
    }

    #[test]
    fn write_into_missing_directory_is_a_write_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("handler.go");

        let err = LocalFilesystem::new().write_file(&path, "x").unwrap_err();
        assert!(!err.is_fatal());
    }

    #[test]
    fn current_dir_resolves() {
        assert!(LocalFilesystem::new().current_dir().unwrap().is_absolute());
    }
}
