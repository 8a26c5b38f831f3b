//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use async_trait::async_trait;

use crcf_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CrcfResult,
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

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Mark a directory as already present (testing helper for the
    /// existence guard).
    pub fn insert_dir(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().directories.insert(path.into());
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

#[async_trait]
impl Filesystem for MemoryFilesystem {
    async fn create_dir_all(&self, path: &Path) -> CrcfResult<()> {
        let mut inner = self.inner.write().expect("memory filesystem poisoned");

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    async fn write_file(&self, path: &Path, content: &str) -> CrcfResult<()> {
        let mut inner = self.inner.write().expect("memory filesystem poisoned");

        // Ensure parent exists, like a real filesystem would.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::WriteFailed {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}
