use std::sync::Arc;

use crate::{
    backup::{BackupManager, BackupTimestamp},
    cli::{
        CliError, Command, CommandResult,
        formatting::{format_path_list, format_warning},
        types::{ArgType, CommandArg, CommandMetadata},
    },
};

/// Command for restoring every tracked file from one backup generation.
///
/// Runs immediately; there is no confirmation prompt.
///
/// # Example Usage
///
/// ```bash
/// aiofarm-config backup rollback 20240101-120000
/// ```
pub struct RollbackCommand {
    backup_manager: Arc<BackupManager>,
}

impl RollbackCommand {
    /// Creates a new RollbackCommand with the provided backup manager.
    pub fn new(backup_manager: Arc<BackupManager>) -> Self {
        Self { backup_manager }
    }
}

impl Command for RollbackCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let raw = args.first().ok_or_else(|| {
            CliError::InvalidArguments(
                "Expected <timestamp> argument for 'rollback' command".to_string(),
            )
        })?;

        let timestamp = raw
            .parse::<BackupTimestamp>()
            .map_err(|e| CliError::InvalidArguments(e.reason))?;

        let report = self
            .backup_manager
            .rollback(&timestamp)
            .map_err(|e| CliError::BackupError(e.to_string()))?;

        if report.restored.is_empty() {
            return Err(CliError::BackupError(format!(
                "No backups found for {timestamp}"
            )));
        }

        let mut lines = vec![
            format!("Rollback {}", report.timestamp),
            format_path_list("Restored", &report.restored),
        ];
        if !report.skipped.is_empty() {
            lines.push(format_warning(&format_path_list(
                "Skipped (no backup)",
                &report.skipped,
            )));
        }

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "rollback".to_string(),
            description: "Restore tracked files from a backup timestamp".to_string(),
            category: "backup".to_string(),
            args: vec![CommandArg {
                name: "timestamp".to_string(),
                description: "Backup timestamp (YYYYMMDD-HHMMSS) from 'backup list'".to_string(),
                required: true,
                value_type: ArgType::Timestamp,
            }],
            examples: vec!["aiofarm-config backup rollback 20240101-120000".to_string()],
        }
    }
}
