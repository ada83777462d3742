use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config::RootConfig,
};

/// Command for printing the JSON Schema of the configuration file.
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        serde_json::to_string_pretty(&RootConfig::document_schema())
            .map_err(|e| CliError::ConfigError(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the JSON Schema of the configuration file".to_string(),
            category: "config".to_string(),
            args: Vec::new(),
            examples: vec!["aiofarm-config config schema > aiofarm_config.schema.json".to_string()],
        }
    }
}
