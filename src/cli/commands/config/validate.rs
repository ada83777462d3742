use std::sync::Arc;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config_store::ConfigStore,
};

/// Command for checking the configuration file without falling back to defaults.
pub struct ValidateCommand {
    config_store: Arc<ConfigStore>,
}

impl ValidateCommand {
    /// Creates a new ValidateCommand with the provided config store.
    pub fn new(config_store: Arc<ConfigStore>) -> Self {
        Self { config_store }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let config = self
            .config_store
            .load_strict()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(format!(
            "{} holds a valid {} configuration",
            self.config_store.path().display(),
            config.config_type()
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "validate".to_string(),
            description: "Check the configuration file and report the first error".to_string(),
            category: "config".to_string(),
            args: Vec::new(),
            examples: vec!["aiofarm-config config validate".to_string()],
        }
    }
}
