use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{info, instrument, warn};

use crate::{
    AiofarmError, Result,
    config::{ConfigPaths, ConfigType, RootConfig, ServerConfig, Validate, default_server_root},
};

use super::atomic_write::write_atomically;

/// Reads and writes the machine configuration file
///
/// The file is the only authority: every load re-reads it and nothing is
/// cached between calls. Writes replace the whole file, so the last save wins.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store backed by the configuration file under `paths`
    pub fn from_paths(paths: &ConfigPaths) -> Self {
        Self::new(paths.config_file())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads, parses and validates the configuration file
    ///
    /// # Errors
    /// * `AiofarmError::IoError` - If the file is missing or unreadable
    /// * `AiofarmError::MalformedData` - If the content is not a configuration document
    /// * `AiofarmError::Validation` - If a field or the role payload is invalid
    pub fn load_strict(&self) -> Result<RootConfig> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| AiofarmError::io(e, &self.path))?;
        RootConfig::from_json(&content, Some(&self.path))
    }

    /// Loads the configuration, falling back to the default server configuration
    ///
    /// Never fails: any error is logged and the default is returned instead.
    /// The file is left untouched.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> RootConfig {
        match self.load_strict() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load configuration: {e}");
                warn!("Using default server configuration");
                default_server_root()
            }
        }
    }

    /// Loads the configuration and requires it to describe a server
    ///
    /// # Errors
    /// Everything `load_strict` returns, plus `AiofarmError::RoleMismatch`
    /// if the file holds a vision configuration
    pub fn load_server_role_strict(&self) -> Result<ServerConfig> {
        match self.load_strict()? {
            RootConfig::Server(config) => {
                config
                    .validate()
                    .map_err(|e| AiofarmError::from(e.within("config")))?;
                Ok(config)
            }
            other => Err(AiofarmError::RoleMismatch {
                expected: ConfigType::Server,
                found: other.config_type(),
            }),
        }
    }

    /// Loads a server configuration, repairing the file if it is unusable
    ///
    /// If the file is missing, invalid, or describes another role, the default
    /// server configuration is written over it and returned, so a misconfigured
    /// machine boots into a known-good state. A failed repair write is logged
    /// and the default is still returned.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load_server_role(&self) -> RootConfig {
        match self.load_server_role_strict() {
            Ok(config) => RootConfig::Server(config),
            Err(e) => {
                warn!("Failed to load server configuration: {e}");
                warn!("Replacing configuration file with default server configuration");

                let default = default_server_root();
                if !self.save(&default) {
                    warn!("Default configuration not written; continuing with it in memory");
                }
                default
            }
        }
    }

    /// Validates and writes a configuration, replacing the file
    ///
    /// # Errors
    /// * `AiofarmError::Validation` - If the configuration violates a constraint
    /// * `AiofarmError::IoError` - If the file cannot be written
    pub fn try_save(&self, config: &RootConfig) -> Result<()> {
        config.validate()?;
        let contents = config.to_pretty_json()?;
        write_atomically(&self.path, &contents)?;

        info!(
            "Saved {} configuration to {}",
            config.config_type(),
            self.path.display()
        );
        Ok(())
    }

    /// Validates and writes a configuration, reporting success as a boolean
    ///
    /// Failures are logged so the caller only decides how to alert the operator.
    #[instrument(skip(self, config), fields(path = %self.path.display()))]
    pub fn save(&self, config: &RootConfig) -> bool {
        match self.try_save(config) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to save configuration: {e}");
                false
            }
        }
    }

    /// Overwrites the file with the default server configuration
    ///
    /// # Errors
    /// * `AiofarmError::IoError` - If the file cannot be written
    pub fn reset(&self) -> Result<RootConfig> {
        let default = default_server_root();
        self.try_save(&default)?;
        Ok(default)
    }
}
