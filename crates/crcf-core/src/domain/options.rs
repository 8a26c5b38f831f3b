//! Generation options - the immutable per-run configuration.
//!
//! One [`GenerationOptions`] value is built from the CLI flags at startup and
//! passed by reference into every domain call. Nothing in this module reads
//! process-wide state.

use std::fmt;

/// Source language of the generated files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    /// Plain JavaScript (`.js`, or `.jsx` with the alternate extension).
    #[default]
    JavaScript,
    /// TypeScript (`.ts`).
    TypeScript,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JavaScript => write!(f, "javascript"),
            Self::TypeScript => write!(f, "typescript"),
        }
    }
}

/// Target runtime variant for a component body.
///
/// Every component is generated for the full, fixed set of platforms; there
/// is no per-run subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    /// All platforms a component is generated for, in file-set order.
    pub const ALL: [Platform; 2] = [Platform::Web, Platform::Native];

    /// Infix used in generated file names (`Name.web.js`, `Name.native.js`).
    pub fn infix(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Native => "native",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.infix())
    }
}

/// Component state style for the Web body file.
///
/// Native bodies always use the stateful (class) shape; see the selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateStyle {
    #[default]
    Stateful,
    Functional,
}

/// Whether generated bodies declare a props contract
/// (`prop-types` for JavaScript, a `Props` interface for TypeScript).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PropsDeclaration {
    #[default]
    None,
    Declared,
}

/// Casing policy applied to the component name and every derived file name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamingCase {
    #[default]
    AsGiven,
    UppercaseFirst,
}

impl NamingCase {
    /// Apply the policy to a name.
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::AsGiven => name.to_string(),
            Self::UppercaseFirst => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// The full per-run configuration record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    pub language: Language,
    pub state_style: StateStyle,
    pub props: PropsDeclaration,
    pub naming_case: NamingCase,
    /// Write a combined top-level index re-exporting every requested
    /// component into the working directory.
    pub emit_index: bool,
    /// Write the `__tests__` batch for every component.
    pub emit_tests: bool,
    /// Use `.jsx` instead of `.js` for generated files (JavaScript only).
    pub jsx_extension: bool,
}

impl GenerationOptions {
    /// File extension for every generated file this run.
    pub fn extension(&self) -> &'static str {
        match self.language {
            Language::TypeScript => "ts",
            Language::JavaScript if self.jsx_extension => "jsx",
            Language::JavaScript => "js",
        }
    }

    /// Options with the defaults the CLI uses when no flags are passed:
    /// JavaScript, stateful, no props, as-given casing, tests on, no
    /// combined index.
    pub fn standard() -> Self {
        Self {
            emit_tests: true,
            ..Self::default()
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
