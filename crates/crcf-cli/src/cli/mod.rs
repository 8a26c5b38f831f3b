//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here; the translation into core
//! `GenerationOptions` happens in `commands::generate`.
//!
//! The surface is deliberately flat (no subcommands): `crcf [FLAGS] NAMES...`
//! mirrors the original tool's invocation shape.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crcf",
    bin_name = "crcf",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} React component folder scaffolding",
    long_about = "crcf generates the full file set for shared React \
                  components: an index, web and native bodies, and snapshot \
                  tests, for one or more components at once.",
    after_help = "EXAMPLES:\n\
        \x20 crcf Button\n\
        \x20 crcf -u --functional --proptypes button\n\
        \x20 crcf --typescript Nav Footer\n\
        \x20 crcf components/shared/Button --notest",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Component names or relative paths ending in a name
    /// (e.g. `Button`, `shared/nav/Button`).
    #[arg(value_name = "NAME", help = "Component name(s) or path(s)")]
    pub names: Vec<String>,

    /// Generate TypeScript components and files.
    #[arg(long = "typescript", help = "Creates TypeScript component and files")]
    pub typescript: bool,

    /// No style file. Accepted for compatibility; this file set never
    /// contains one, but the flag still participates in validation.
    #[arg(long = "nocss", help = "No css file")]
    pub nocss: bool,

    /// Skip the `__tests__` batch.
    #[arg(long = "notest", help = "No test files")]
    pub notest: bool,

    /// Accepted for compatibility: both web and native bodies are always
    /// generated for shared components.
    #[arg(long = "reactnative", help = "Creates React Native components")]
    pub reactnative: bool,

    /// Write a combined index re-exporting every requested component into
    /// the working directory.
    #[arg(
        long = "createindex",
        help = "Creates an index file for multiple component imports"
    )]
    pub createindex: bool,

    /// Stateless functional component for the web body (native has no
    /// functional shape).
    #[arg(
        short = 'f',
        long = "functional",
        help = "Creates React stateless functional component"
    )]
    pub functional: bool,

    /// Use the `.jsx` extension for generated files.
    #[arg(short = 'j', long = "jsx", help = "Creates files with .jsx extension")]
    pub jsx: bool,

    /// Style-file dialect toggles; accepted for compatibility.
    #[arg(short = 'l', long = "less", help = "Adds .less file to component")]
    pub less: bool,

    #[arg(short = 's', long = "scss", help = "Adds .scss file to component")]
    pub scss: bool,

    /// Declare a props contract on generated bodies.
    #[arg(short = 'p', long = "proptypes", help = "Adds prop-types to component")]
    pub proptypes: bool,

    /// Component files start with an uppercase letter.
    #[arg(
        short = 'u',
        long = "uppercase",
        help = "Component files start on uppercase letter"
    )]
    pub uppercase: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
