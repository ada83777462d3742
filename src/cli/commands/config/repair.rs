use std::sync::Arc;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    config_store::ConfigStore,
};

/// Command for running the self-healing server load.
///
/// Leaves a valid server configuration untouched and replaces anything else
/// with the default server configuration.
pub struct RepairCommand {
    config_store: Arc<ConfigStore>,
}

impl RepairCommand {
    /// Creates a new RepairCommand with the provided config store.
    pub fn new(config_store: Arc<ConfigStore>) -> Self {
        Self { config_store }
    }
}

impl Command for RepairCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let before = self.config_store.load_server_role_strict();
        let config = self.config_store.load_server_role();

        let message = match before {
            Ok(_) => format!(
                "{} already holds a valid {} configuration",
                self.config_store.path().display(),
                config.config_type()
            ),
            Err(e) => format!(
                "{} was replaced with the default server configuration ({e})",
                self.config_store.path().display()
            ),
        };

        Ok(message)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "repair".to_string(),
            description: "Replace an unusable configuration with the server default".to_string(),
            category: "config".to_string(),
            args: Vec::new(),
            examples: vec!["aiofarm-config config repair".to_string()],
        }
    }
}
