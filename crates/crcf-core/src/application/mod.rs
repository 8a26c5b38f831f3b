//! Application layer for crcf.
//!
//! This layer contains:
//! - **Services**: use case orchestration ([`ScaffoldService`])
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main service and report types
pub use services::{ComponentSummary, GenerationReport, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, FormatError, SourceFormatter};

pub use error::ApplicationError;
