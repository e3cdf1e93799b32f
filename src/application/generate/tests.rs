//! Tests for the generate use case, against an in-memory file system

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::*;
use crate::domain::ports::{FileSystem, FixedSecret, FsError, FsResult};
use crate::domain::services::BuildSettings;
use crate::domain::value_objects::ServiceKind;
use crate::error::ComposeError;
use crate::infrastructure::ComposeRenderer;

#[derive(Default)]
struct MockState {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    executable: BTreeSet<PathBuf>,
    read_only: bool,
}

/// Clones share state so tests can inspect what the use case wrote.
#[derive(Clone, Default)]
struct MockFs(Rc<RefCell<MockState>>);

impl MockFs {
    fn read_only() -> Self {
        let fs = Self::default();
        fs.0.borrow_mut().read_only = true;
        fs
    }

    fn file(&self, path: &str) -> Option<String> {
        self.0.borrow().files.get(Path::new(path)).cloned()
    }

    fn file_count(&self) -> usize {
        self.0.borrow().files.len()
    }
}

impl FileSystem for MockFs {
    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let mut state = self.0.borrow_mut();
        if state.read_only {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.0.borrow();
        state.dirs.contains(path) || state.files.contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.0.borrow_mut().dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> FsResult<()> {
        self.0.borrow_mut().executable.insert(path.to_path_buf());
        Ok(())
    }
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn use_case(fs: MockFs) -> GenerateUseCase<MockFs, FixedSecret> {
    GenerateUseCase::new(
        fs,
        FixedSecret("test-secret".into()),
        BuildSettings::default(),
        ComposeRenderer::default(),
    )
}

#[test]
fn writes_descriptor_per_host_and_script() {
    let fs = MockFs::default();
    let options = GenerateOptions::new(list(&["a", "b"]), list(&["z"])).with_output_dir("/out");

    let result = use_case(fs.clone()).execute(&options).unwrap();

    assert_eq!(result.host_count(), 3);
    assert_eq!(fs.file_count(), 4);
    assert!(fs.file("/out/node-a.yml").is_some());
    assert!(fs.file("/out/node-b.yml").is_some());
    assert!(fs.file("/out/node-z.yml").is_some());

    let script = fs.file("/out/deploy-cluster.sh").unwrap();
    assert_eq!(script.matches("docker-compose -f").count(), 3);
}

#[test]
fn script_is_marked_executable() {
    let fs = MockFs::default();
    let options = GenerateOptions::new(list(&["a"]), list(&["z"])).with_output_dir("/out");

    let result = use_case(fs.clone()).execute(&options).unwrap();

    let state = fs.0.borrow();
    assert_eq!(state.executable.len(), 1);
    assert!(state.executable.contains(Path::new("/out/deploy-cluster.sh")));
    assert_eq!(
        result.script().map(|f| f.path.clone()),
        Some(PathBuf::from("/out/deploy-cluster.sh"))
    );
}

#[test]
fn creates_missing_output_directory() {
    let fs = MockFs::default();
    let options = GenerateOptions::new(list(&["a"]), list(&["z"])).with_output_dir("/new/dir");

    use_case(fs.clone()).execute(&options).unwrap();

    assert!(fs.0.borrow().dirs.contains(Path::new("/new/dir")));
}

#[test]
fn duplicate_addresses_write_nothing() {
    let fs = MockFs::default();
    let options = GenerateOptions::new(list(&["h1", "h1"]), list(&["z"])).with_output_dir("/out");

    let err = use_case(fs.clone()).execute(&options).unwrap_err();

    assert!(matches!(err, ComposeError::DuplicateAddress { .. }));
    assert_eq!(fs.file_count(), 0);
    assert!(fs.0.borrow().dirs.is_empty());
}

#[test]
fn malformed_address_writes_nothing() {
    let fs = MockFs::default();
    let options = GenerateOptions::new(list(&["a:b:c"]), list(&["z"])).with_output_dir("/out");

    assert!(use_case(fs.clone()).execute(&options).is_err());
    assert_eq!(fs.file_count(), 0);
}

#[test]
fn dry_run_touches_nothing() {
    let fs = MockFs::default();
    let options = GenerateOptions::new(list(&["a"]), list(&["z"]))
        .with_output_dir("/out")
        .with_dry_run(true);

    let result = use_case(fs.clone()).execute(&options).unwrap();

    assert!(result.dry_run);
    assert_eq!(result.files.len(), 3);
    assert_eq!(fs.file_count(), 0);
    assert!(fs.0.borrow().dirs.is_empty());
}

#[test]
fn write_failure_surfaces_as_io_error() {
    let options = GenerateOptions::new(list(&["a"]), list(&["z"])).with_output_dir("/out");

    let err = use_case(MockFs::read_only()).execute(&options).unwrap_err();

    assert_eq!(err.code(), "io");
}

#[test]
fn manager_descriptor_uses_injected_secret() {
    let fs = MockFs::default();
    let options = GenerateOptions::new(list(&["a"]), list(&["z"]))
        .with_managers(list(&["m"]))
        .with_output_dir("/out");

    let result = use_case(fs.clone()).execute(&options).unwrap();

    let yaml = fs.file("/out/node-m.yml").unwrap();
    assert!(yaml.contains("test-secret"));
    let manager_file = result
        .descriptors()
        .find(|f| f.host.as_deref() == Some("m"))
        .unwrap();
    assert_eq!(manager_file.services, vec![ServiceKind::Manager]);
}

#[test]
fn omitting_managers_leaves_other_descriptors_unchanged() {
    let without = MockFs::default();
    let with = MockFs::default();
    let base = GenerateOptions::new(list(&["a", "b"]), list(&["z"])).with_output_dir("/out");

    use_case(without.clone()).execute(&base).unwrap();
    use_case(with.clone())
        .execute(&base.clone().with_managers(list(&["m"])))
        .unwrap();

    for name in ["/out/node-a.yml", "/out/node-b.yml", "/out/node-z.yml"] {
        assert_eq!(without.file(name), with.file(name), "{name} changed");
    }
    assert!(without.file("/out/node-m.yml").is_none());
    assert!(!without.file("/out/node-a.yml").unwrap().contains("manager"));
}

#[test]
fn result_hashes_match_written_content() {
    let fs = MockFs::default();
    let options = GenerateOptions::new(list(&["a"]), list(&["a"])).with_output_dir("/out");

    let result = use_case(fs.clone()).execute(&options).unwrap();

    for file in &result.files {
        let content = fs.0.borrow().files.get(&file.path).cloned().unwrap();
        assert_eq!(
            file.hash,
            crate::domain::value_objects::ContentHash::from_content(&content)
        );
    }
}
