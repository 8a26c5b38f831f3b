//! Global arguments that apply to every invocation.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! stay out of the generation-flag clutter.

use clap::Args;
use std::path::PathBuf;

/// Global arguments.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// The `NO_COLOR` environment variable (see <https://no-color.org>) is
    /// honoured by presence, not by value; see [`GlobalArgs::color_disabled`].
    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// How output should be rendered.
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// `true` when colour output should be suppressed.
    ///
    /// Combines the `--no-color` flag with the `NO_COLOR` convention: any
    /// non-empty value disables colour, whatever the value is.
    pub fn color_disabled(&self) -> bool {
        self.no_color || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
    }
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Human-readable with colors and spinner.
    Human,
    /// Plain text without colors or spinner.
    Plain,
}
