//! crcf Core - component scaffolding engine
//!
//! This crate provides the domain and application layers for the crcf
//! component scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            crcf-cli (CLI)               │
//! │      (flags, output, spinner, exit)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Service            │
//! │           (ScaffoldService)             │
//! │   validate → guard → fan-out → settle   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Filesystem, SourceFormatter)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     crcf-adapters (Infrastructure)      │
//! │  (LocalFilesystem, SimpleFormatter, …)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (options, naming, selector, templates) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```

// Domain layer (pure, no I/O)
pub mod domain;

// Application layer (orchestration)
pub mod application;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComponentSummary, GenerationReport, ScaffoldService,
        ports::{Filesystem, FormatError, SourceFormatter},
    };
    pub use crate::domain::{
        ComponentRequest, FileRole, FileSpec, GenerationOptions, Language, NamingCase, Platform,
        PropsDeclaration, StateStyle, TEST_DIRECTORY,
    };
    pub use crate::error::{CrcfError, CrcfResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
