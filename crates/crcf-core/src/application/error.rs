//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating a generation run.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The combined argument/option set is internally inconsistent.
    /// Raised before any filesystem mutation.
    #[error("invalid arguments: {reason}")]
    InvalidArguments { reason: String },

    /// The primary target path already exists on disk.
    /// Raised before any filesystem mutation; prior work is never clobbered.
    #[error("directory already exists at {path}")]
    DirectoryExists { path: PathBuf },

    /// A directory creation or file write failed (including a formatter
    /// failure on the content bound for `path`). Surfaced after the fact;
    /// sibling batches that already completed are not undone.
    #[error("write failed at {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArguments { reason } => vec![
                format!("Argument problem: {reason}"),
                "Pass at least one component name, e.g. crcf Button".into(),
                "See --help for the available flags".into(),
            ],
            Self::DirectoryExists { path } => vec![
                format!("'{}' already exists", path.display()),
                "Choose a different component name or path".into(),
                "Remove the existing directory first if it is stale".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Failed while writing {}", path.display()),
                "Check write permissions and available disk space".into(),
                "Files written before the failure were left in place".into(),
            ],
        }
    }

    /// Error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArguments { .. } | Self::DirectoryExists { .. } => {
                ErrorCategory::Validation
            }
            Self::WriteFailed { .. } => ErrorCategory::Internal,
        }
    }
}
