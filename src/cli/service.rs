use std::sync::Arc;

use crate::{backup::BackupManager, config_store::ConfigStore};

use super::{
    CliError, CommandRegistry,
    formatting::{format_category, format_command, format_description, format_header},
};

/// High-level service for managing and executing CLI commands.
///
/// Commands are organized by category and can be listed or executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// # Arguments
    /// * `config_store` - Store for the live configuration file
    /// * `backup_manager` - Manager for the backup directory
    pub fn new(config_store: ConfigStore, backup_manager: BackupManager) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(config_store), Arc::new(backup_manager));
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category,
    /// or the error of the command itself.
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        self.registry.execute(category, command_name, args)
    }

    /// Lists all available commands organized by category.
    ///
    /// # Returns
    /// Vector of (category_name, command_names) tuples
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    /// Renders help text for every registered command.
    pub fn help_text(&self) -> String {
        let mut lines = vec![
            format_header("aiofarm-config"),
            String::new(),
            "Usage: aiofarm-config <category> <command> [args]".to_string(),
        ];

        for (category, commands) in self.list_all() {
            lines.push(String::new());
            lines.push(format_category(&category));

            for command in commands {
                let description = self
                    .registry
                    .metadata(&category, &command)
                    .map(|metadata| metadata.description)
                    .unwrap_or_default();

                lines.push(format!(
                    "  {} {}",
                    format_command(&format!("{command:<10}")),
                    format_description(&description)
                ));
            }
        }

        lines.join("\n")
    }
}
