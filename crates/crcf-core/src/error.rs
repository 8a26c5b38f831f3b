//! Unified error handling for crcf-core.
//!
//! Wraps domain and application errors behind one type with categories and
//! user-actionable suggestions, so the CLI only deals with [`CrcfError`].

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for crcf-core operations.
#[derive(Debug, Error, Clone)]
pub enum CrcfError {
    /// Errors from the domain layer (name validation).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and writes).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl CrcfError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the error was raised before any filesystem mutation.
    pub fn is_pre_write(&self) -> bool {
        !matches!(
            self,
            Self::Application(ApplicationError::WriteFailed { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type CrcfResult<T> = Result<T, CrcfError>;
