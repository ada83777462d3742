//! aiofarm-config - operator entry point for the machine configuration
//!
//! Routes `<category> <command> [args]` to the command registry. Missing or
//! unknown input prints help.

use std::{env, error::Error, process};

use aiofarm_config::{
    backup::BackupManager,
    cli::{CliService, formatting::format_error},
    config::ConfigPaths,
    config_store::ConfigStore,
    tracing_config,
};
use tracing::debug;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let paths = ConfigPaths::from_env()?;

    let _log_guard = match tracing_config::init_with_file(&paths) {
        Ok(guard) => Some(guard),
        Err(_) => {
            tracing_config::init()?;
            None
        }
    };
    debug!("Using configuration home {}", paths.home().display());

    let cli_service = CliService::new(
        ConfigStore::from_paths(&paths),
        BackupManager::from_paths(&paths),
    );

    let category = args.get(1).map(|s| s.as_str()).unwrap_or("help");
    let command = args.get(2).map(|s| s.as_str()).unwrap_or("");
    let remaining_args = args.get(3..).unwrap_or(&[]);

    if matches!(category, "help" | "--help" | "-h") || command.is_empty() {
        println!("{}", cli_service.help_text());
        return Ok(());
    }

    match cli_service.execute_command(category, command, remaining_args) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{}: {}", format_error("Error"), e);
            process::exit(1);
        }
    }

    Ok(())
}
