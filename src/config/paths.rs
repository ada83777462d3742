use std::{
    env,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

/// File name of the live configuration.
pub const CONFIG_FILE_NAME: &str = "aiofarm_config.json";

/// Directory name holding timestamped backups.
pub const BACKUP_DIR_NAME: &str = "aiofarm_config_backup";

/// Project manifests swept up by every backup, relative to the project directory.
pub const PROJECT_MANIFESTS: [&str; 2] = ["pyproject.toml", "poetry.lock"];

/// Locations of every file the configuration service touches
///
/// The home directory defaults to `$HOME`; `AIOFARM_HOME` overrides it so
/// tests and staging machines never touch the operator's real files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    home: PathBuf,
    project_dir: PathBuf,
}

impl ConfigPaths {
    /// Creates paths rooted at explicit directories
    pub fn new(home: impl Into<PathBuf>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            project_dir: project_dir.into(),
        }
    }

    /// Resolves paths from the environment
    ///
    /// - Home: `AIOFARM_HOME`, falling back to `HOME`
    /// - Project directory: `AIOFARM_PROJECT_DIR`, falling back to the current directory
    ///
    /// # Errors
    /// Returns an error if neither `AIOFARM_HOME` nor `HOME` is set, or the
    /// current directory cannot be read
    pub fn from_env() -> Result<Self, Error> {
        let home = env::var("AIOFARM_HOME")
            .or_else(|_| env::var("HOME"))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither AIOFARM_HOME nor HOME environment variable found",
                )
            })?;

        let project_dir = match env::var("AIOFARM_PROJECT_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => env::current_dir()?,
        };

        Ok(Self::new(home, project_dir))
    }

    /// Home directory the configuration lives in
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Path to the live configuration file
    pub fn config_file(&self) -> PathBuf {
        self.home.join(CONFIG_FILE_NAME)
    }

    /// Directory holding timestamped backups
    pub fn backup_dir(&self) -> PathBuf {
        self.home.join(BACKUP_DIR_NAME)
    }

    /// Every file a backup copies, config file first
    pub fn tracked_files(&self) -> Vec<PathBuf> {
        let mut files = vec![self.config_file()];
        files.extend(PROJECT_MANIFESTS.iter().map(|name| self.project_dir.join(name)));
        files
    }

    /// Get the application log directory
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns error if directory cannot be created
    pub fn log_dir(&self) -> Result<PathBuf, Error> {
        let log_dir = self.home.join(".aiofarm").join("logs");

        if !log_dir.exists() {
            std::fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }
}
