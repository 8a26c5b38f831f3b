//! Naming normalizer: raw CLI argument → validated, casing-normalized
//! component request.
//!
//! A raw argument may encode a nested relative path (`Sub/Folder/Name`);
//! only the final segment is the component name and only it is validated.

use std::path::{Path, PathBuf};

use crate::domain::{DomainError, NamingCase};

/// One requested component, derived from a single positional argument.
///
/// Immutable after construction; every derived field is computed in
/// [`ComponentRequest::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRequest {
    raw: String,
    base_name: String,
    canonical_name: String,
    parent_dir: PathBuf,
}

impl ComponentRequest {
    /// Parse and validate a raw argument against the working directory.
    ///
    /// Fails when the final path segment is empty or contains anything other
    /// than ASCII letters (digits, hyphens and underscores are rejected).
    pub fn parse(raw: &str, working_dir: &Path, case: NamingCase) -> Result<Self, DomainError> {
        let path = Path::new(raw);

        let base_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DomainError::UnusableArgument { raw: raw.into() })?
            .to_string();

        validate_name(&base_name)?;

        // All but the final segment, resolved against the working directory.
        // A bare name has no parent component, so the working directory
        // itself is the parent.
        let parent_dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => working_dir.join(p),
            _ => working_dir.to_path_buf(),
        };

        let canonical_name = case.apply(&base_name);

        Ok(Self {
            raw: raw.to_string(),
            base_name,
            canonical_name,
            parent_dir,
        })
    }

    /// The argument exactly as given on the command line.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Final path segment before casing is applied.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Casing-normalized name, embedded in file names and file content.
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// Directory the component's files are written into. The directory name
    /// follows the same casing policy as the file names.
    pub fn directory(&self) -> PathBuf {
        self.parent_dir.join(&self.canonical_name)
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidComponentName {
            name: name.into(),
            reason: "name is empty".into(),
        });
    }
    if let Some(bad) = name.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(DomainError::InvalidComponentName {
            name: name.into(),
            reason: format!("'{bad}' is not a letter"),
        });
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
