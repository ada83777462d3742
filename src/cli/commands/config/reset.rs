use std::sync::Arc;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config_store::ConfigStore,
};

/// Command for overwriting the configuration with the server default.
pub struct ResetCommand {
    config_store: Arc<ConfigStore>,
}

impl ResetCommand {
    /// Creates a new ResetCommand with the provided config store.
    pub fn new(config_store: Arc<ConfigStore>) -> Self {
        Self { config_store }
    }
}

impl Command for ResetCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        self.config_store
            .reset()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(format!(
            "Wrote default server configuration to {}",
            self.config_store.path().display()
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "reset".to_string(),
            description: "Overwrite the configuration with the server default".to_string(),
            category: "config".to_string(),
            args: Vec::new(),
            examples: vec!["aiofarm-config config reset".to_string()],
        }
    }
}
