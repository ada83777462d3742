use thiserror::Error;

/// Errors that can occur during CLI command execution.
///
/// Each variant carries enough context for an operator to see what went
/// wrong without reading logs.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned when argument count validation fails or an argument does not
    /// parse, such as a malformed backup timestamp.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The configuration could not be loaded, validated or written.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A backup or rollback could not be completed.
    #[error("Backup error: {0}")]
    BackupError(String),
}

/// Type alias for command execution results.
///
/// All CLI commands return either their output text or a `CliError`.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
///
/// Drives help generation and argument count validation.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "timestamp").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for validation and help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone)]
pub enum ArgType {
    /// A backup timestamp in `YYYYMMDD-HHMMSS` form.
    Timestamp,
}

/// Complete metadata for a CLI command.
///
/// Single source of truth for a command's identity, arguments, usage
/// examples, and category.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "show", "rollback").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "config", "backup").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against
    /// `metadata`; the command validates argument values itself.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for any execution failure.
    fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
