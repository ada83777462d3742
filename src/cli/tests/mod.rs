//! Unit tests for CLI module
//!
//! Tests command registry, formatting, and command execution against a
//! temporary home directory.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::{fs, path::PathBuf, sync::Arc};

use tempfile::TempDir;

use crate::{
    backup::BackupManager,
    cli::{ArgType, CliError, CliService, CommandRegistry, formatting::format_path_list},
    config::{ConfigPaths, RootConfig, VisionConfig},
    config_store::ConfigStore,
};

fn service_in(temp: &TempDir) -> (CliService, ConfigPaths) {
    let paths = ConfigPaths::new(temp.path(), temp.path().join("project"));
    let service = CliService::new(
        ConfigStore::from_paths(&paths),
        BackupManager::from_paths(&paths),
    );
    (service, paths)
}

#[test]
fn format_path_list_one_per_line() {
    let paths = vec![PathBuf::from("/a/b.json"), PathBuf::from("/c.lock")];

    assert_eq!(
        format_path_list("Copied", &paths),
        "Copied:\n  /a/b.json\n  /c.lock"
    );
    assert_eq!(format_path_list("Copied", &[]), "");
}

#[test]
fn command_registry_starts_empty() {
    let temp = TempDir::new().unwrap();
    let paths = ConfigPaths::new(temp.path(), temp.path());
    let registry = CommandRegistry::new(
        Arc::new(ConfigStore::from_paths(&paths)),
        Arc::new(BackupManager::from_paths(&paths)),
    );

    assert!(registry.list_commands().is_empty());
}

#[test]
fn all_commands_are_registered() {
    let temp = TempDir::new().unwrap();
    let (service, _) = service_in(&temp);

    assert_eq!(
        service.list_all(),
        vec![
            (
                "backup".to_string(),
                vec!["create".to_string(), "list".to_string(), "rollback".to_string()]
            ),
            (
                "config".to_string(),
                vec![
                    "repair".to_string(),
                    "reset".to_string(),
                    "schema".to_string(),
                    "show".to_string(),
                    "validate".to_string(),
                ]
            ),
        ]
    );
}

#[test]
fn only_rollback_takes_an_argument() {
    let temp = TempDir::new().unwrap();
    let paths = ConfigPaths::new(temp.path(), temp.path());
    let mut registry = CommandRegistry::new(
        Arc::new(ConfigStore::from_paths(&paths)),
        Arc::new(BackupManager::from_paths(&paths)),
    );
    registry.register_all_commands();

    for (category, commands) in registry.list_commands() {
        for command in commands {
            let metadata = registry.metadata(&category, &command).unwrap();
            if command == "rollback" {
                assert_eq!(metadata.args.len(), 1);
                assert!(matches!(metadata.args[0].value_type, ArgType::Timestamp));
                assert!(metadata.args[0].required);
            } else {
                assert!(metadata.args.is_empty(), "{category} {command}");
            }
        }
    }
}

#[test]
fn help_lists_every_category() {
    let temp = TempDir::new().unwrap();
    let (service, _) = service_in(&temp);
    let help = service.help_text();

    assert!(help.contains("backup"));
    assert!(help.contains("rollback"));
    assert!(help.contains("Print the effective configuration as JSON"));
}

#[test]
fn unknown_category_is_not_found() {
    let temp = TempDir::new().unwrap();
    let (service, _) = service_in(&temp);

    assert!(matches!(
        service.execute_command("audio", "mute", &[]),
        Err(CliError::CommandNotFound(_))
    ));
    assert!(matches!(
        service.execute_command("config", "get", &[]),
        Err(CliError::CommandNotFound(_))
    ));
}

#[test]
fn argument_count_is_checked() {
    let temp = TempDir::new().unwrap();
    let (service, _) = service_in(&temp);

    assert!(matches!(
        service.execute_command("backup", "rollback", &[]),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(matches!(
        service.execute_command("config", "show", &["extra".to_string()]),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn rollback_rejects_malformed_timestamp() {
    let temp = TempDir::new().unwrap();
    let (service, _) = service_in(&temp);

    assert!(matches!(
        service.execute_command("backup", "rollback", &["../../etc".to_string()]),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn show_prints_defaults_when_file_missing() {
    let temp = TempDir::new().unwrap();
    let (service, paths) = service_in(&temp);

    let output = service.execute_command("config", "show", &[]).unwrap();

    assert!(output.contains("\"config_type\": \"server\""));
    assert!(!paths.config_file().exists());
}

#[test]
fn validate_reports_strict_failure() {
    let temp = TempDir::new().unwrap();
    let (service, paths) = service_in(&temp);
    fs::write(paths.config_file(), "not json").unwrap();

    assert!(matches!(
        service.execute_command("config", "validate", &[]),
        Err(CliError::ConfigError(_))
    ));
}

#[test]
fn repair_replaces_vision_configuration() {
    let temp = TempDir::new().unwrap();
    let (service, paths) = service_in(&temp);
    let store = ConfigStore::from_paths(&paths);
    assert!(store.save(&RootConfig::Vision(VisionConfig::default())));

    let output = service.execute_command("config", "repair", &[]).unwrap();

    assert!(output.contains("replaced"));
    assert_eq!(store.load_strict().unwrap(), RootConfig::default());
}

#[test]
fn backup_then_list_then_rollback() {
    let temp = TempDir::new().unwrap();
    let (service, paths) = service_in(&temp);
    service.execute_command("config", "reset", &[]).unwrap();

    let created = service.execute_command("backup", "create", &[]).unwrap();
    assert!(created.contains("aiofarm_config_"));
    assert!(created.contains("Skipped (missing)"));

    let listed = service.execute_command("backup", "list", &[]).unwrap();
    let timestamp = listed.lines().next().unwrap().to_string();

    fs::write(paths.config_file(), "broken").unwrap();
    let restored = service
        .execute_command("backup", "rollback", &[timestamp])
        .unwrap();

    assert!(restored.contains("Restored"));
    assert_eq!(
        ConfigStore::from_paths(&paths).load_strict().unwrap(),
        RootConfig::default()
    );
}

#[test]
fn list_without_backups_says_so() {
    let temp = TempDir::new().unwrap();
    let (service, _) = service_in(&temp);

    let output = service.execute_command("backup", "list", &[]).unwrap();
    assert!(output.starts_with("No backups found"));
}
