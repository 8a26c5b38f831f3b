//! Implementation of component generation.
//!
//! Responsibility: translate CLI flags into [`GenerationOptions`], call the
//! core scaffold service, and display results.  No business logic lives here.

use std::time::Instant;

use tracing::{debug, info, instrument};

use crcf_adapters::{LocalFilesystem, SimpleFormatter};
use crcf_core::{
    application::{GenerationReport, ScaffoldService},
    domain::{GenerationOptions, Language, NamingCase, PropsDeclaration, StateStyle},
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute generation for every name on the command line.
///
/// Dispatch sequence:
/// 1. Validate flag combinations
/// 2. Convert CLI flags + config defaults to core `GenerationOptions`
/// 3. Execute via `ScaffoldService`
/// 4. Print the generated tree and a success line
#[instrument(skip_all, fields(components = cli.names.len()))]
pub async fn execute(cli: Cli, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    // 1. Flag validation
    validate_flags(&cli)?;

    // 2. Build options (flags win; config fills in absent flags)
    let options = build_options(&cli, &config);
    debug!(
        language = %options.language,
        functional = matches!(options.state_style, StateStyle::Functional),
        emit_tests = options.emit_tests,
        emit_index = options.emit_index,
        "Options resolved"
    );

    let working_dir = std::env::current_dir()?;

    // 3. Create adapters and generate
    let filesystem = Box::new(LocalFilesystem::new());
    let formatter = Box::new(SimpleFormatter::new());
    let service = ScaffoldService::new(filesystem, formatter);

    let started = Instant::now();
    let spinner = output.spinner("Generating components...");

    info!(components = cli.names.len(), "Generation started");
    let result = service
        .generate(&cli.names, &options, &working_dir)
        .await
        .map_err(CliError::Core);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let report = result?;

    info!(files = report.file_count(), "Generation completed");

    // 4. Show what was created
    show_report(&report, output)?;
    output.success(&format!(
        "{} file(s) generated in {}",
        report.file_count(),
        output.elapsed(started.elapsed()),
    ))?;

    Ok(())
}

/// Reject flag combinations that contradict each other.
///
/// `--nocss` with `--less` or `--scss` asks for a style file and its absence
/// at the same time.
fn validate_flags(cli: &Cli) -> CliResult<()> {
    if cli.nocss && (cli.less || cli.scss) {
        return Err(CliError::InvalidInput {
            message: "--nocss cannot be combined with --less or --scss".into(),
        });
    }
    Ok(())
}

/// Merge CLI flags with config-file defaults into core options.
///
/// Boolean flags can only be switched on from the command line, so an
/// absent flag falls back to the configured default.
fn build_options(cli: &Cli, config: &AppConfig) -> GenerationOptions {
    let typescript = cli.typescript || config.defaults.typescript;
    let functional = cli.functional || config.defaults.functional;
    let uppercase = cli.uppercase || config.defaults.uppercase;

    GenerationOptions {
        language: if typescript {
            Language::TypeScript
        } else {
            Language::JavaScript
        },
        state_style: if functional {
            StateStyle::Functional
        } else {
            StateStyle::Stateful
        },
        props: if cli.proptypes {
            PropsDeclaration::Declared
        } else {
            PropsDeclaration::None
        },
        naming_case: if uppercase {
            NamingCase::UppercaseFirst
        } else {
            NamingCase::AsGiven
        },
        emit_index: cli.createindex,
        emit_tests: !cli.notest,
        jsx_extension: cli.jsx,
    }
}

/// Print the generated component tree.
fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    for component in &report.components {
        output.header(&format!("{}/", component.directory.display()))?;
        for file in &component.source_files {
            output.print(&format!("  {file}"))?;
        }
        if !component.test_files.is_empty() {
            output.print("  __tests__/")?;
            for file in &component.test_files {
                output.print(&format!("    {file}"))?;
            }
        }
    }
    if let Some(index) = &report.combined_index {
        output.print(&format!("{}", index.display()))?;
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
