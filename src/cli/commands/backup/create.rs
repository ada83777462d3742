use std::sync::Arc;

use crate::{
    backup::BackupManager,
    cli::{
        CliError, Command, CommandResult,
        formatting::{format_path_list, format_warning},
        types::CommandMetadata,
    },
};

/// Command for snapshotting the configuration and project manifests.
///
/// # Example Usage
///
/// ```bash
/// aiofarm-config backup create
/// ```
pub struct CreateCommand {
    /// Shared reference to the backup manager.
    backup_manager: Arc<BackupManager>,
}

impl CreateCommand {
    /// Creates a new CreateCommand with the provided backup manager.
    ///
    /// # Arguments
    ///
    /// * `backup_manager` - Shared reference to the backup manager
    pub fn new(backup_manager: Arc<BackupManager>) -> Self {
        Self { backup_manager }
    }
}

impl Command for CreateCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let report = self
            .backup_manager
            .backup()
            .map_err(|e| CliError::BackupError(e.to_string()))?;

        let mut lines = vec![format!("Backup {}", report.timestamp)];
        if !report.copied.is_empty() {
            lines.push(format_path_list("Copied", &report.copied));
        }
        if !report.skipped.is_empty() {
            lines.push(format_warning(&format_path_list(
                "Skipped (missing)",
                &report.skipped,
            )));
        }

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "create".to_string(),
            description: "Copy the configuration and manifests into the backup directory"
                .to_string(),
            category: "backup".to_string(),
            args: Vec::new(),
            examples: vec!["aiofarm-config backup create".to_string()],
        }
    }
}
