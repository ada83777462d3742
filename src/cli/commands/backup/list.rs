use std::sync::Arc;

use crate::{
    backup::BackupManager,
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
};

/// Command for listing available restore points, oldest first.
pub struct ListCommand {
    backup_manager: Arc<BackupManager>,
}

impl ListCommand {
    /// Creates a new ListCommand with the provided backup manager.
    pub fn new(backup_manager: Arc<BackupManager>) -> Self {
        Self { backup_manager }
    }
}

impl Command for ListCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let timestamps = self
            .backup_manager
            .list_timestamps()
            .map_err(|e| CliError::BackupError(e.to_string()))?;

        if timestamps.is_empty() {
            return Ok(format!(
                "No backups found in {}",
                self.backup_manager.backup_dir().display()
            ));
        }

        Ok(timestamps
            .iter()
            .map(|timestamp| timestamp.to_string())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List backup timestamps available for rollback".to_string(),
            category: "backup".to_string(),
            args: Vec::new(),
            examples: vec!["aiofarm-config backup list".to_string()],
        }
    }
}
