//! Backup and rollback commands.
mod create;
mod list;
mod rollback;

use std::sync::Arc;

pub use create::CreateCommand;
pub use list::ListCommand;
pub use rollback::RollbackCommand;

use crate::{backup::BackupManager, cli::CommandRegistry};

/// Registers all backup-related commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `backup_manager` - Shared backup manager for the commands
pub fn register_commands(registry: &mut CommandRegistry, backup_manager: Arc<BackupManager>) {
    const CATEGORY_NAME: &str = "backup";

    registry.register_command(
        CATEGORY_NAME,
        Box::new(CreateCommand::new(backup_manager.clone())),
    );

    registry.register_command(
        CATEGORY_NAME,
        Box::new(ListCommand::new(backup_manager.clone())),
    );

    registry.register_command(CATEGORY_NAME, Box::new(RollbackCommand::new(backup_manager)));
}
