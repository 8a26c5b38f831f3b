//! Domain layer: pure scaffolding logic, no I/O.
//!
//! - [`options`] — the immutable per-run configuration record.
//! - [`naming`] — raw argument → validated [`ComponentRequest`].
//! - [`selector`] — the `(role, platform, options)` → template decision table
//!   and batch builders.
//! - [`templates`] — the content generators themselves.

pub mod error;
pub mod naming;
pub mod options;
pub mod selector;
pub mod templates;

pub use error::{DomainError, ErrorCategory};
pub use naming::ComponentRequest;
pub use options::{
    GenerationOptions, Language, NamingCase, Platform, PropsDeclaration, StateStyle,
};
pub use selector::{BodyTemplate, FileRole, FileSpec};

/// Directory name the test batch is written into, nested inside the
/// component directory.
pub const TEST_DIRECTORY: &str = "__tests__";
