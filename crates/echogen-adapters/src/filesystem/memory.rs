//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use echogen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::EchogenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a `ScaffoldService`
/// and inspect the other afterwards.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug)]
struct MemoryFilesystemInner {
    current_dir: Option<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem whose current directory is `/work`.
    pub fn new() -> Self {
        Self::with_current_dir("/work")
    }

    /// Create a new empty memory filesystem with the given current directory.
    pub fn with_current_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner {
                current_dir: Some(dir.into()),
                files: BTreeMap::new(),
                directories: BTreeSet::new(),
                read_only: HashSet::new(),
            })),
        }
    }

    /// Simulate a working directory that has been removed.
    pub fn without_current_dir() -> Self {
        let fs = Self::new();
        if let Ok(mut inner) = fs.inner.write() {
            inner.current_dir = None;
        }
        fs
    }

    /// Make writes to `path` fail (testing helper).
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> EchogenResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::FilesystemLock.into())
    }

    fn write(&self) -> EchogenResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::FilesystemLock.into())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn current_dir(&self) -> EchogenResult<PathBuf> {
        self.read()?.current_dir.clone().ok_or_else(|| {
            ApplicationError::WorkingDirectory {
                reason: "No such file or directory".into(),
            }
            .into()
        })
    }

    fn create_dir_all(&self, path: &Path) -> EchogenResult<()> {
        let mut inner = self.write()?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::CreateDirectory {
                path: path.to_path_buf(),
                reason: "File exists".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> EchogenResult<()> {
        let mut inner = self.write()?;

        let parent_missing = path
            .parent()
            .is_some_and(|p| !p.as_os_str().is_empty() && !inner.directories.contains(p));
        let reason = if parent_missing {
            Some("Parent directory does not exist")
        } else if inner.read_only.contains(path) {
            Some("Permission denied")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(ApplicationError::WriteFile {
                path: path.to_path_buf(),
                reason: reason.into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/work/order/a.go"), "x").is_err());

        fs.create_dir_all(Path::new("/work/order")).unwrap();
        fs.write_file(Path::new("/work/order/a.go"), "x").unwrap();
        assert_eq!(
            fs.read_file(Path::new("/work/order/a.go")).as_deref(),
            Some("x")
        );
    }

    #[test]
    fn create_dir_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/work/order")).unwrap();
        assert!(fs.exists(Path::new("/work")));
        assert!(fs.exists(Path::new("/work/order")));
    }

    #[test]
    fn denied_write_fails_softly() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/work/order")).unwrap();
        fs.deny_writes("/work/order/router.go");

        let err = fs
            .write_file(Path::new("/work/order/router.go"), "x")
            .unwrap_err();
        assert!(!err.is_fatal());
    }

    #[test]
    fn missing_current_dir_is_an_error() {
        assert!(MemoryFilesystem::without_current_dir().current_dir().is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        other.create_dir_all(Path::new("/work")).unwrap();
        other.write_file(Path::new("/work/a.go"), "x").unwrap();
        assert_eq!(fs.list_files(), vec![PathBuf::from("/work/a.go")]);
    }
}
