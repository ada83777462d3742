use std::sync::Arc;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config_store::ConfigStore,
};

/// Command for printing the configuration the machine would run with.
///
/// Uses the degrading load, so an unreadable file shows the defaults that
/// would be substituted for it.
///
/// # Example Usage
///
/// ```bash
/// aiofarm-config config show
/// ```
pub struct ShowCommand {
    /// Shared reference to the configuration store.
    config_store: Arc<ConfigStore>,
}

impl ShowCommand {
    /// Creates a new ShowCommand with the provided config store.
    ///
    /// # Arguments
    ///
    /// * `config_store` - Shared reference to the configuration store
    pub fn new(config_store: Arc<ConfigStore>) -> Self {
        Self { config_store }
    }
}

impl Command for ShowCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let config = self.config_store.load();
        let json = config
            .to_pretty_json()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(String::from_utf8_lossy(&json).trim_end().to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Print the effective configuration as JSON".to_string(),
            category: "config".to_string(),
            args: Vec::new(),
            examples: vec!["aiofarm-config config show".to_string()],
        }
    }
}
