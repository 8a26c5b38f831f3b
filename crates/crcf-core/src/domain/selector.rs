//! Template selector: the single decision table mapping
//! `(role, platform, options)` to a content template.
//!
//! All template-selection branches live here so the selection is
//! exhaustively testable and the orchestrator stays branch-free.

use crate::domain::{
    GenerationOptions, Platform, PropsDeclaration, StateStyle, templates,
};

/// Logical role of one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// Per-component (or combined) re-export index.
    Index,
    /// Platform-specific component body.
    Body(Platform),
    /// Platform-specific snapshot test.
    Test(Platform),
}

/// The four body content shapes a platform can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyTemplate {
    Stateful,
    StatefulWithProps,
    Functional,
    FunctionalWithProps,
}

/// Select the body template for one platform.
///
/// Web honors both toggles. Native has no functional shape: it always uses
/// the stateful template, modulated only by the props declaration.
pub fn body_template(platform: Platform, options: &GenerationOptions) -> BodyTemplate {
    let functional = match platform {
        Platform::Web => options.state_style == StateStyle::Functional,
        Platform::Native => false,
    };
    let with_props = options.props == PropsDeclaration::Declared;

    match (functional, with_props) {
        (false, false) => BodyTemplate::Stateful,
        (false, true) => BodyTemplate::StatefulWithProps,
        (true, false) => BodyTemplate::Functional,
        (true, true) => BodyTemplate::FunctionalWithProps,
    }
}

/// One file to materialize: role, file name relative to its batch directory,
/// and fully generated (pre-formatting) content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub role: FileRole,
    pub file_name: String,
    pub content: String,
}

/// Build the source batch for one component: the index file plus one body
/// file per platform, written into the component's own directory.
pub fn source_batch(name: &str, options: &GenerationOptions) -> Vec<FileSpec> {
    let ext = options.extension();
    let mut specs = Vec::with_capacity(1 + Platform::ALL.len());

    specs.push(FileSpec {
        role: FileRole::Index,
        file_name: format!("index.{ext}"),
        content: templates::index(name),
    });

    for platform in Platform::ALL {
        specs.push(FileSpec {
            role: FileRole::Body(platform),
            file_name: format!("{name}.{}.{ext}", platform.infix()),
            content: templates::body(name, platform, body_template(platform, options), options.language),
        });
    }

    specs
}

/// Build the test batch for one component: one snapshot test per platform,
/// written into the nested `__tests__` directory.
pub fn test_batch(name: &str, options: &GenerationOptions) -> Vec<FileSpec> {
    let ext = options.extension();
    Platform::ALL
        .iter()
        .map(|&platform| FileSpec {
            role: FileRole::Test(platform),
            file_name: format!("{name}.test.{}.{ext}", platform.infix()),
            content: templates::test(name, platform, options),
        })
        .collect()
}

/// Build the combined top-level index spec across all requested components.
pub fn combined_index(names: &[String], options: &GenerationOptions) -> FileSpec {
    FileSpec {
        role: FileRole::Index,
        file_name: format!("index.{}", options.extension()),
        content: templates::combined_index(names),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
