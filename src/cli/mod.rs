//! Command-line interface for operating the machine configuration.
//!
//! Exposes load, validation, repair, backup and rollback as commands grouped
//! by category. Help text is generated from command metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use commands::backup::{CreateCommand, ListCommand, RollbackCommand};
pub use commands::config::{
    RepairCommand, ResetCommand, SchemaCommand, ShowCommand, ValidateCommand,
};
pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
