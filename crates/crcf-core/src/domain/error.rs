//! Domain-layer errors: business-rule violations, no I/O involved.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry through concurrent batches)
/// - Categorizable (for CLI display)
/// - Actionable (provide suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The final path segment of a requested component name failed
    /// validation. Component names must be ASCII letters only.
    #[error("invalid component name '{name}': {reason}")]
    InvalidComponentName { name: String, reason: String },

    /// A raw argument had no usable final path segment at all
    /// (e.g. `Foo/..` or a bare separator).
    #[error("cannot derive a component name from '{raw}'")]
    UnusableArgument { raw: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidComponentName { name, .. } => vec![
                format!("'{name}' contains characters other than letters"),
                "Component names may only contain letters (a-z, A-Z)".into(),
                "Examples: Button, navBar, Icons/Arrow".into(),
            ],
            Self::UnusableArgument { raw } => vec![
                format!("'{raw}' does not end in a component name"),
                "Pass a name or a relative path ending in a name, e.g. Sub/Folder/Name".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidComponentName { .. } | Self::UnusableArgument { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
