//! Configuration management commands.
mod repair;
mod reset;
mod schema;
mod show;
mod validate;

use std::sync::Arc;

pub use repair::RepairCommand;
pub use reset::ResetCommand;
pub use schema::SchemaCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;

use crate::{cli::CommandRegistry, config_store::ConfigStore};

/// Registers all configuration-related commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `config_store` - Shared configuration store for the commands
pub fn register_commands(registry: &mut CommandRegistry, config_store: Arc<ConfigStore>) {
    const CATEGORY_NAME: &str = "config";

    registry.register_command(
        CATEGORY_NAME,
        Box::new(ShowCommand::new(config_store.clone())),
    );

    registry.register_command(
        CATEGORY_NAME,
        Box::new(ValidateCommand::new(config_store.clone())),
    );

    registry.register_command(
        CATEGORY_NAME,
        Box::new(RepairCommand::new(config_store.clone())),
    );

    registry.register_command(CATEGORY_NAME, Box::new(ResetCommand::new(config_store)));

    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand));
}
