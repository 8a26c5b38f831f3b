//! Scaffold service - the generation orchestrator.
//!
//! One call to [`ScaffoldService::generate`] runs the whole workflow:
//!
//! 1. Validate the argument/option set (fail fast, zero side effects)
//! 2. Normalize every requested name into a [`ComponentRequest`]
//! 3. Guard the primary target directory against clobbering prior work
//! 4. Fan out: one source batch and one test batch per component, every
//!    batch started before any is awaited
//! 5. Await all batches; siblings of a failed batch run to completion
//! 6. Report full success, or the first error after everything settled
//!
//! There is no partial-success reporting and no rollback: files written by
//! batches that succeeded before a sibling failed stay on disk.

use std::path::{Path, PathBuf};

use futures::future::join_all;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, SourceFormatter},
    },
    domain::{ComponentRequest, FileSpec, GenerationOptions, TEST_DIRECTORY, selector},
    error::CrcfResult,
};

/// What one component's generation produced, for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSummary {
    pub name: String,
    pub directory: PathBuf,
    /// File names written into the component directory.
    pub source_files: Vec<String>,
    /// File names written into the nested test directory.
    pub test_files: Vec<String>,
}

/// Aggregate result of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub components: Vec<ComponentSummary>,
    /// Path of the combined top-level index, when one was requested.
    pub combined_index: Option<PathBuf>,
}

impl GenerationReport {
    /// Total number of files written.
    pub fn file_count(&self) -> usize {
        let per_component: usize = self
            .components
            .iter()
            .map(|c| c.source_files.len() + c.test_files.len())
            .sum();
        per_component + usize::from(self.combined_index.is_some())
    }
}

/// Main scaffolding service.
///
/// Owns the driven ports; holds no run state. The working directory is an
/// explicit argument, never read from the process environment here.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    formatter: Box<dyn SourceFormatter>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, formatter: Box<dyn SourceFormatter>) -> Self {
        Self {
            filesystem,
            formatter,
        }
    }

    /// Generate the full file set for every requested component.
    #[instrument(skip_all, fields(components = raw_names.len()))]
    pub async fn generate(
        &self,
        raw_names: &[String],
        options: &GenerationOptions,
        working_dir: &Path,
    ) -> CrcfResult<GenerationReport> {
        // 1. Argument validation, before touching the filesystem.
        validate_arguments(raw_names)?;

        // 2. Normalize every name. A bad name anywhere aborts the run with
        //    zero writes.
        let requests = raw_names
            .iter()
            .map(|raw| ComponentRequest::parse(raw, working_dir, options.naming_case))
            .collect::<Result<Vec<_>, _>>()?;

        // 3. Guard the primary target directory. Must be the canonical
        //    (casing-applied) path: that is where the files actually land,
        //    so it is the path a rerun would clobber. Checked once, up
        //    front; sub-components are not re-checked.
        let primary = requests[0].directory();
        if self.filesystem.exists(&primary).await {
            return Err(ApplicationError::DirectoryExists { path: primary }.into());
        }

        // 4. Build every batch before awaiting any of them. Within a batch
        //    the individual writes also run concurrently; across batches and
        //    components, completion order is unspecified.
        let mut report = GenerationReport::default();
        let mut batches = Vec::with_capacity(requests.len() * 2 + 1);

        for request in &requests {
            let directory = request.directory();
            let sources = selector::source_batch(request.canonical_name(), options);
            let tests = if options.emit_tests {
                selector::test_batch(request.canonical_name(), options)
            } else {
                Vec::new()
            };

            report.components.push(ComponentSummary {
                name: request.canonical_name().to_string(),
                directory: directory.clone(),
                source_files: sources.iter().map(|s| s.file_name.clone()).collect(),
                test_files: tests.iter().map(|s| s.file_name.clone()).collect(),
            });

            debug!(
                component = request.canonical_name(),
                directory = %directory.display(),
                "batches prepared"
            );

            batches.push(self.write_batch(directory.clone(), sources));
            if options.emit_tests {
                batches.push(self.write_batch(directory.join(TEST_DIRECTORY), tests));
            }
        }

        if options.emit_index {
            let names: Vec<String> = requests
                .iter()
                .map(|r| r.canonical_name().to_string())
                .collect();
            let spec = selector::combined_index(&names, options);
            report.combined_index = Some(working_dir.join(&spec.file_name));
            batches.push(self.write_batch(working_dir.to_path_buf(), vec![spec]));
        }

        // 5/6. Await everything, then surface the first error. No batch is
        // cancelled because a sibling failed.
        let results = join_all(batches).await;
        if let Some(err) = results.into_iter().find_map(Result::err) {
            return Err(err);
        }

        info!(files = report.file_count(), "generation completed");
        Ok(report)
    }

    /// Write one batch: ensure the batch directory, then write its specs
    /// concurrently. Returns the first write error after all settled.
    async fn write_batch(&self, directory: PathBuf, specs: Vec<FileSpec>) -> CrcfResult<()> {
        self.filesystem.create_dir_all(&directory).await?;

        let writes = specs
            .iter()
            .map(|spec| self.write_formatted(directory.join(&spec.file_name), &spec.content));

        let results = join_all(writes).await;
        results.into_iter().find_map(Result::err).map_or(Ok(()), Err)
    }

    /// Run content through the formatter collaborator, then write it.
    /// A formatter rejection is surfaced as a write failure for that path.
    async fn write_formatted(&self, path: PathBuf, content: &str) -> CrcfResult<()> {
        let formatted =
            self.formatter
                .format(content)
                .map_err(|e| ApplicationError::WriteFailed {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
        self.filesystem.write_file(&path, &formatted).await
    }
}

/// Consistency checks on the combined argument set.
///
/// Flag-combination checks that only the CLI layer can see (style-flag
/// contradictions) happen there; this validates what the core receives.
fn validate_arguments(raw_names: &[String]) -> Result<(), ApplicationError> {
    if raw_names.is_empty() {
        return Err(ApplicationError::InvalidArguments {
            reason: "no component names were given".into(),
        });
    }
    if raw_names.iter().any(|n| n.trim().is_empty()) {
        return Err(ApplicationError::InvalidArguments {
            reason: "component names must not be blank".into(),
        });
    }
    Ok(())
}
