//! Local filesystem adapter using tokio::fs.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tracing::trace;

use crcf_core::{application::ports::Filesystem, error::CrcfResult};

/// Production filesystem implementation backed by `tokio::fs`.
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

#[async_trait]
impl Filesystem for LocalFilesystem {
    async fn create_dir_all(&self, path: &Path) -> CrcfResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    async fn write_file(&self, path: &Path, content: &str) -> CrcfResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        tokio::fs::write(path, content)
            .await
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> crcf_core::error::CrcfError {
    use crcf_core::application::ApplicationError;

    ApplicationError::WriteFailed {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}
