//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crcf-adapters` crate provides implementations.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::error::CrcfResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crcf_adapters::filesystem::LocalFilesystem` (production, tokio::fs)
/// - `crcf_adapters::filesystem::MemoryFilesystem` (testing)
///
/// All operations are async: every directory creation and file write is a
/// suspension point, which is what lets the orchestrator multiplex all
/// batches on one thread.
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing ancestors. Idempotent.
    async fn create_dir_all(&self, path: &Path) -> CrcfResult<()>;

    /// Write content to a file, creating it.
    async fn write_file(&self, path: &Path, content: &str) -> CrcfResult<()>;

    /// Check whether a path exists. Used once per run as the pre-write guard
    /// on the primary target path.
    async fn exists(&self, path: &Path) -> bool;
}

/// Failure of the external pretty-printer on malformed input.
///
/// The orchestrator folds this into a write error for the file the content
/// was bound for.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("formatter rejected source: {reason}")]
pub struct FormatError {
    pub reason: String,
}

/// Port for the external source formatter collaborator.
///
/// A pure `&str -> String` transformation; no I/O. Implemented by
/// `crcf_adapters::formatter::SimpleFormatter`.
pub trait SourceFormatter: Send + Sync {
    fn format(&self, source: &str) -> Result<String, FormatError>;
}
