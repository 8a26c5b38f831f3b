//! End-to-end tests for the scaffolding orchestrator, run against an
//! in-test filesystem double so failures can be injected per path.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use crcf_core::{
    application::{ApplicationError, ScaffoldService, ports::{Filesystem, FormatError, SourceFormatter}},
    domain::{GenerationOptions, NamingCase, PropsDeclaration, StateStyle},
    error::{CrcfError, CrcfResult},
};

// ── test doubles ──────────────────────────────────────────────────────────────

#[derive(Default)]
struct FsState {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

/// Filesystem double. `fail_writes_under` makes every write below the given
/// prefix fail, to exercise the settle-then-report path.
#[derive(Clone, Default)]
struct TestFilesystem {
    state: Arc<Mutex<FsState>>,
    fail_writes_under: Option<PathBuf>,
}

impl TestFilesystem {
    fn new() -> Self {
        Self::default()
    }

    fn failing_under(prefix: impl Into<PathBuf>) -> Self {
        Self {
            fail_writes_under: Some(prefix.into()),
            ..Self::default()
        }
    }

    fn preexisting_dir(&self, path: impl Into<PathBuf>) {
        self.state.lock().unwrap().directories.insert(path.into());
    }

    fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state.lock().unwrap().files.get(path.as_ref()).cloned()
    }

    fn file_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.state.lock().unwrap().files.keys().cloned().collect();
        paths.sort();
        paths
    }

    fn write_count(&self) -> usize {
        self.state.lock().unwrap().files.len()
    }
}

#[async_trait]
impl Filesystem for TestFilesystem {
    async fn create_dir_all(&self, path: &Path) -> CrcfResult<()> {
        let mut state = self.state.lock().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            state.directories.insert(current.clone());
        }
        Ok(())
    }

    async fn write_file(&self, path: &Path, content: &str) -> CrcfResult<()> {
        if let Some(prefix) = &self.fail_writes_under {
            if path.starts_with(prefix) {
                return Err(ApplicationError::WriteFailed {
                    path: path.to_path_buf(),
                    reason: "injected failure".into(),
                }
                .into());
            }
        }
        let mut state = self.state.lock().unwrap();
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.directories.contains(path)
    }
}

/// Formatter double that tags content so tests can prove writes went through
/// the formatter collaborator.
struct TaggingFormatter;

impl SourceFormatter for TaggingFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        Ok(format!("/* formatted */\n{source}"))
    }
}

/// Formatter double that rejects everything.
struct RejectingFormatter;

impl SourceFormatter for RejectingFormatter {
    fn format(&self, _source: &str) -> Result<String, FormatError> {
        Err(FormatError {
            reason: "unparseable".into(),
        })
    }
}

fn service(fs: &TestFilesystem) -> ScaffoldService {
    ScaffoldService::new(Box::new(fs.clone()), Box::new(TaggingFormatter))
}

fn cwd() -> PathBuf {
    PathBuf::from("/work")
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ── generation scenarios ──────────────────────────────────────────────────────

#[tokio::test]
async fn default_options_produce_exactly_five_files() {
    let fs = TestFilesystem::new();
    let report = service(&fs)
        .generate(&names(&["Button"]), &GenerationOptions::standard(), &cwd())
        .await
        .unwrap();

    assert_eq!(report.file_count(), 5);
    assert_eq!(
        fs.file_paths(),
        vec![
            PathBuf::from("/work/Button/Button.native.js"),
            PathBuf::from("/work/Button/Button.web.js"),
            PathBuf::from("/work/Button/__tests__/Button.test.native.js"),
            PathBuf::from("/work/Button/__tests__/Button.test.web.js"),
            PathBuf::from("/work/Button/index.js"),
        ]
    );
}

#[tokio::test]
async fn default_bodies_are_stateful_without_props() {
    let fs = TestFilesystem::new();
    service(&fs)
        .generate(&names(&["Button"]), &GenerationOptions::standard(), &cwd())
        .await
        .unwrap();

    let web = fs.file("/work/Button/Button.web.js").unwrap();
    assert!(web.contains("class Button extends Component"));
    assert!(!web.contains("PropTypes"));

    let native = fs.file("/work/Button/Button.native.js").unwrap();
    assert!(native.contains("react-native"));
}

#[tokio::test]
async fn functional_with_props_only_affects_the_web_body() {
    let fs = TestFilesystem::new();
    let options = GenerationOptions {
        state_style: StateStyle::Functional,
        props: PropsDeclaration::Declared,
        ..GenerationOptions::standard()
    };
    service(&fs)
        .generate(&names(&["Button"]), &options, &cwd())
        .await
        .unwrap();

    let web = fs.file("/work/Button/Button.web.js").unwrap();
    assert!(web.contains("const Button = props =>"));
    assert!(web.contains("Button.propTypes = {};"));

    // Native keeps the stateful shape, modulated only by props.
    let native = fs.file("/work/Button/Button.native.js").unwrap();
    assert!(native.contains("class Button extends Component"));
    assert!(native.contains("Button.propTypes = {};"));
}

#[tokio::test]
async fn invalid_name_writes_nothing() {
    let fs = TestFilesystem::new();
    let err = service(&fs)
        .generate(&names(&["Butt0n"]), &GenerationOptions::standard(), &cwd())
        .await
        .unwrap_err();

    assert!(matches!(err, CrcfError::Domain(_)));
    assert!(err.is_pre_write());
    assert_eq!(fs.write_count(), 0);
}

#[tokio::test]
async fn invalid_name_among_many_aborts_the_whole_run() {
    let fs = TestFilesystem::new();
    let err = service(&fs)
        .generate(
            &names(&["Foo", "nav-bar", "Bar"]),
            &GenerationOptions::standard(),
            &cwd(),
        )
        .await
        .unwrap_err();

    assert!(err.is_pre_write());
    assert_eq!(fs.write_count(), 0);
}

#[tokio::test]
async fn existing_primary_target_fails_before_any_write() {
    let fs = TestFilesystem::new();
    fs.preexisting_dir("/work/Button");

    let err = service(&fs)
        .generate(&names(&["Button"]), &GenerationOptions::standard(), &cwd())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CrcfError::Application(ApplicationError::DirectoryExists { .. })
    ));
    assert_eq!(fs.write_count(), 0);
}

#[tokio::test]
async fn rerunning_the_same_target_fails_and_keeps_the_first_run() {
    let fs = TestFilesystem::new();
    let svc = service(&fs);
    let options = GenerationOptions::standard();

    svc.generate(&names(&["Button"]), &options, &cwd())
        .await
        .unwrap();
    let before = fs.file_paths();

    let err = svc
        .generate(&names(&["Button"]), &options, &cwd())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CrcfError::Application(ApplicationError::DirectoryExists { .. })
    ));
    assert_eq!(fs.file_paths(), before);
}

#[tokio::test]
async fn uppercase_rerun_fails_the_second_run() {
    // Files land in the casing-applied directory, so the guard must probe
    // that directory and not the argument as given.
    let fs = TestFilesystem::new();
    let svc = service(&fs);
    let options = GenerationOptions {
        naming_case: NamingCase::UppercaseFirst,
        ..GenerationOptions::standard()
    };

    svc.generate(&names(&["button"]), &options, &cwd())
        .await
        .unwrap();
    let before = fs.file_paths();
    assert!(before.contains(&PathBuf::from("/work/Button/index.js")));

    let err = svc
        .generate(&names(&["button"]), &options, &cwd())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CrcfError::Application(ApplicationError::DirectoryExists { .. })
    ));
    assert_eq!(fs.file_paths(), before);
}

#[tokio::test]
async fn two_components_generate_both_file_sets() {
    let fs = TestFilesystem::new();
    let report = service(&fs)
        .generate(
            &names(&["Foo", "Bar"]),
            &GenerationOptions::standard(),
            &cwd(),
        )
        .await
        .unwrap();

    assert_eq!(report.components.len(), 2);
    assert_eq!(report.file_count(), 10);
    assert!(fs.file("/work/Foo/index.js").is_some());
    assert!(fs.file("/work/Bar/index.js").is_some());
}

#[tokio::test]
async fn sibling_failure_leaves_completed_work_on_disk() {
    // Every write under /work/Bar fails; Foo's batches run to completion.
    let fs = TestFilesystem::failing_under("/work/Bar");
    let err = service(&fs)
        .generate(
            &names(&["Foo", "Bar"]),
            &GenerationOptions::standard(),
            &cwd(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CrcfError::Application(ApplicationError::WriteFailed { .. })
    ));
    // Foo's five files survive; nothing was rolled back.
    assert_eq!(
        fs.file_paths()
            .iter()
            .filter(|p| p.starts_with("/work/Foo"))
            .count(),
        5
    );
}

#[tokio::test]
async fn no_tests_option_produces_three_files_per_component() {
    let fs = TestFilesystem::new();
    let options = GenerationOptions {
        emit_tests: false,
        ..GenerationOptions::standard()
    };
    let report = service(&fs)
        .generate(&names(&["Button"]), &options, &cwd())
        .await
        .unwrap();

    assert_eq!(report.file_count(), 3);
    assert!(
        fs.file_paths()
            .iter()
            .all(|p| !p.to_string_lossy().contains("__tests__"))
    );
}

#[tokio::test]
async fn combined_index_reexports_every_component() {
    let fs = TestFilesystem::new();
    let options = GenerationOptions {
        emit_index: true,
        ..GenerationOptions::standard()
    };
    let report = service(&fs)
        .generate(&names(&["Foo", "Bar"]), &options, &cwd())
        .await
        .unwrap();

    assert_eq!(report.combined_index, Some(PathBuf::from("/work/index.js")));
    let index = fs.file("/work/index.js").unwrap();
    assert!(index.contains("export { default as Foo } from './Foo';"));
    assert!(index.contains("export { default as Bar } from './Bar';"));
}

#[tokio::test]
async fn uppercase_naming_flows_into_paths_and_content() {
    let fs = TestFilesystem::new();
    let options = GenerationOptions {
        naming_case: NamingCase::UppercaseFirst,
        ..GenerationOptions::standard()
    };
    service(&fs)
        .generate(&names(&["button"]), &options, &cwd())
        .await
        .unwrap();

    let web = fs.file("/work/Button/Button.web.js").unwrap();
    assert!(web.contains("class Button"));
}

#[tokio::test]
async fn every_write_goes_through_the_formatter() {
    let fs = TestFilesystem::new();
    service(&fs)
        .generate(&names(&["Button"]), &GenerationOptions::standard(), &cwd())
        .await
        .unwrap();

    for path in fs.file_paths() {
        let content = fs.file(&path).unwrap();
        assert!(
            content.starts_with("/* formatted */"),
            "unformatted write at {}",
            path.display()
        );
    }
}

#[tokio::test]
async fn formatter_rejection_surfaces_as_a_write_error() {
    let fs = TestFilesystem::new();
    let svc = ScaffoldService::new(Box::new(fs.clone()), Box::new(RejectingFormatter));
    let err = svc
        .generate(&names(&["Button"]), &GenerationOptions::standard(), &cwd())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CrcfError::Application(ApplicationError::WriteFailed { .. })
    ));
    assert_eq!(fs.write_count(), 0);
}

#[tokio::test]
async fn empty_request_list_is_rejected() {
    let fs = TestFilesystem::new();
    let err = service(&fs)
        .generate(&[], &GenerationOptions::standard(), &cwd())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CrcfError::Application(ApplicationError::InvalidArguments { .. })
    ));
}
