//! Unit tests for config_store module
//!
//! Exercises the atomic writer and the store against temporary directories.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use crate::{
    AiofarmError,
    config::{ConfigType, RootConfig, VisionConfig, default_server_root},
    config_store::{ConfigStore, write_atomically},
};

#[test]
fn write_atomically_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/dir/file.json");

    write_atomically(&path, b"{}").unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"{}");
}

#[test]
fn write_atomically_replaces_contents_without_leftovers() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("file.json");
    fs::write(&path, "a much longer previous content").unwrap();

    write_atomically(&path, b"short").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[cfg(unix)]
#[test]
fn write_atomically_keeps_existing_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pyproject.toml");
    fs::write(&path, "old").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    write_atomically(&path, b"new").unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn load_strict_reports_missing_file_as_io_error() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::new(temp.path().join("absent.json"));

    assert!(matches!(
        store.load_strict(),
        Err(AiofarmError::IoError { .. })
    ));
}

#[test]
fn load_server_role_strict_rejects_vision() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::new(temp.path().join("config.json"));
    assert!(store.save(&RootConfig::Vision(VisionConfig::default())));

    match store.load_server_role_strict() {
        Err(AiofarmError::RoleMismatch { expected, found }) => {
            assert_eq!(expected, ConfigType::Server);
            assert_eq!(found, ConfigType::Vision);
        }
        other => panic!("expected role mismatch, got {other:?}"),
    }
}

#[test]
fn reset_writes_default_server_configuration() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::new(temp.path().join("config.json"));
    fs::write(store.path(), "garbage").unwrap();

    let written = store.reset().unwrap();

    assert_eq!(written, default_server_root());
    assert_eq!(store.load_strict().unwrap(), default_server_root());
}
