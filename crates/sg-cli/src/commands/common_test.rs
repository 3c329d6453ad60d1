use super::*;
use sg_core::{CoreError, MergeOrder};
use std::fs;
use tempfile::tempdir;

fn global_for(project_dir: PathBuf, config: Option<PathBuf>) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        project_dir,
        config,
    }
}

#[test]
fn test_project_root_keeps_absolute_path() {
    let dir = tempdir().unwrap();
    let root = project_root(&global_for(dir.path().to_path_buf(), None)).unwrap();
    assert_eq!(root, dir.path());
}

#[test]
fn test_project_root_missing_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = project_root(&global_for(missing, None)).unwrap_err();
    assert!(err.to_string().contains("Project directory not found"));
}

#[test]
fn test_load_config_from_project_dir() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("schemagen.yml"), "order: listing").unwrap();

    let config = load_config(&global_for(dir.path().to_path_buf(), None), dir.path()).unwrap();
    assert_eq!(config.order, MergeOrder::Listing);
}

#[test]
fn test_load_config_explicit_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.yml");
    fs::write(&path, "source: sql/migrations").unwrap();
    fs::write(dir.path().join("schemagen.yml"), "source: ignored").unwrap();

    let global = global_for(dir.path().to_path_buf(), Some(path));
    let config = load_config(&global, dir.path()).unwrap();
    assert_eq!(config.source, "sql/migrations");
}

#[test]
fn test_load_config_explicit_path_missing() {
    let dir = tempdir().unwrap();
    let global = global_for(dir.path().to_path_buf(), Some(dir.path().join("missing.yml")));

    let err = load_config(&global, dir.path()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CoreError>(),
        Some(CoreError::ConfigNotFound { .. })
    ));
}
