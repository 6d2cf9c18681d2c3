//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use spress_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SpressResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().expect("memory filesystem lock poisoned");
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().expect("memory filesystem lock poisoned");
        inner.files.clear();
        inner.directories.clear();
    }

    fn lock_error(path: &Path) -> spress_core::error::SpressError {
        ApplicationError::Filesystem {
            path: path.to_path_buf(),
            reason: "filesystem lock poisoned".into(),
        }
        .into()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().expect("memory filesystem lock poisoned");
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> SpressResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &str) -> SpressResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error(path))?;

        // Mirror the real filesystem: the parent must exist first.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn copy_tree(&self, src: &Path, dst: &Path) -> SpressResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error(src))?;

        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter(|(path, _)| path.starts_with(src))
            .map(|(path, contents)| (path.clone(), contents.clone()))
            .collect();
        let directories: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|path| path.starts_with(src))
            .cloned()
            .collect();

        if files.is_empty() && directories.is_empty() {
            return Err(ApplicationError::Filesystem {
                path: src.to_path_buf(),
                reason: "source does not exist".into(),
            }
            .into());
        }

        for path in directories {
            if let Ok(relative) = path.strip_prefix(src) {
                inner.directories.insert(dst.join(relative));
            }
        }
        for (path, contents) in files {
            if let Ok(relative) = path.strip_prefix(src) {
                inner.files.insert(dst.join(relative), contents);
            }
        }

        Ok(())
    }
}
