//! Infrastructure adapters for crcf.
//!
//! This crate implements the ports defined in `crcf-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod formatter;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use formatter::SimpleFormatter;
