use std::{
    collections::BTreeSet,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use regex::Regex;
use tracing::{info, instrument};

use crate::{AiofarmError, Result, config::ConfigPaths, config_store::write_atomically};

use super::timestamp::BackupTimestamp;

/// Outcome of one backup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReport {
    /// Generation the copies were written under.
    pub timestamp: BackupTimestamp,
    /// Backup files written, in tracked-file order.
    pub copied: Vec<PathBuf>,
    /// Tracked files that did not exist and were skipped.
    pub skipped: Vec<PathBuf>,
}

/// Outcome of one rollback run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollbackReport {
    /// Generation that was restored.
    pub timestamp: BackupTimestamp,
    /// Live files overwritten from their backup.
    pub restored: Vec<PathBuf>,
    /// Live files left untouched because no backup exists for the timestamp.
    pub skipped: Vec<PathBuf>,
}

/// Copies tracked files into timestamped backups and restores them.
///
/// A backup of `<dir>/<stem>.<ext>` is stored as
/// `<backup_dir>/<stem>_<YYYYMMDD-HHMMSS>.<ext>`. The first tracked file is
/// the configuration file; its backups define the available restore points.
/// Missing files are skipped with a log entry, never treated as errors.
#[derive(Debug, Clone)]
pub struct BackupManager {
    backup_dir: PathBuf,
    tracked_files: Vec<PathBuf>,
}

impl BackupManager {
    /// Creates a manager for explicit locations.
    pub fn new(backup_dir: impl Into<PathBuf>, tracked_files: Vec<PathBuf>) -> Self {
        Self {
            backup_dir: backup_dir.into(),
            tracked_files,
        }
    }

    /// Creates a manager for the configuration file and project manifests under `paths`.
    pub fn from_paths(paths: &ConfigPaths) -> Self {
        Self::new(paths.backup_dir(), paths.tracked_files())
    }

    /// Directory backups are written to.
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Backs up every tracked file under the current local time.
    ///
    /// # Errors
    /// Returns `AiofarmError::IoError` if the backup directory cannot be
    /// created or an existing file cannot be copied.
    pub fn backup(&self) -> Result<BackupReport> {
        self.backup_at(&BackupTimestamp::now())
    }

    /// Backs up every tracked file under the given timestamp.
    ///
    /// Existing backups with the same timestamp are overwritten.
    ///
    /// # Errors
    /// Returns `AiofarmError::IoError` if the backup directory cannot be
    /// created or an existing file cannot be copied.
    #[instrument(skip(self), fields(backup_dir = %self.backup_dir.display()))]
    pub fn backup_at(&self, timestamp: &BackupTimestamp) -> Result<BackupReport> {
        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| AiofarmError::io(e, &self.backup_dir))?;

        let mut report = BackupReport {
            timestamp: timestamp.clone(),
            copied: Vec::new(),
            skipped: Vec::new(),
        };

        for source in &self.tracked_files {
            if !source.is_file() {
                info!("Skipping backup of {}: file does not exist", source.display());
                report.skipped.push(source.clone());
                continue;
            }

            let destination = self.backup_path(source, timestamp)?;
            fs::copy(source, &destination).map_err(|e| AiofarmError::io(e, source))?;

            info!("Backed up {} to {}", source.display(), destination.display());
            report.copied.push(destination);
        }

        Ok(report)
    }

    /// Lists the timestamps for which a configuration backup exists, oldest first.
    ///
    /// A missing backup directory yields an empty list.
    ///
    /// # Errors
    /// Returns `AiofarmError::IoError` if the backup directory cannot be read.
    pub fn list_timestamps(&self) -> Result<Vec<BackupTimestamp>> {
        let Some(config_file) = self.tracked_files.first() else {
            return Ok(Vec::new());
        };
        let pattern = backup_name_pattern(config_file)?;

        let entries = match fs::read_dir(&self.backup_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("Backup directory {} does not exist", self.backup_dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(AiofarmError::io(e, &self.backup_dir)),
        };

        let mut timestamps = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| AiofarmError::io(e, &self.backup_dir))?;
            let name = entry.file_name();
            let name = name.to_string_lossy();

            let parsed = pattern
                .captures(&name)
                .and_then(|captures| captures.get(1))
                .and_then(|matched| matched.as_str().parse::<BackupTimestamp>().ok());

            if let Some(timestamp) = parsed {
                timestamps.insert(timestamp);
            }
        }

        Ok(timestamps.into_iter().collect())
    }

    /// Restores every tracked file that has a backup under `timestamp`.
    ///
    /// Files without a backup for that timestamp are left as they are. The
    /// restore happens immediately; there is no confirmation step.
    ///
    /// # Errors
    /// Returns `AiofarmError::IoError` if an existing backup cannot be read or
    /// its live file cannot be written.
    #[instrument(skip(self), fields(backup_dir = %self.backup_dir.display()))]
    pub fn rollback(&self, timestamp: &BackupTimestamp) -> Result<RollbackReport> {
        let mut report = RollbackReport {
            timestamp: timestamp.clone(),
            restored: Vec::new(),
            skipped: Vec::new(),
        };

        for target in &self.tracked_files {
            let backup = self.backup_path(target, timestamp)?;

            if !backup.is_file() {
                info!(
                    "Skipping restore of {}: no backup for {timestamp}",
                    target.display()
                );
                report.skipped.push(target.clone());
                continue;
            }

            let contents = fs::read(&backup).map_err(|e| AiofarmError::io(e, &backup))?;
            write_atomically(target, &contents)?;

            info!("Restored {} from {}", target.display(), backup.display());
            report.restored.push(target.clone());
        }

        Ok(report)
    }

    fn backup_path(&self, source: &Path, timestamp: &BackupTimestamp) -> Result<PathBuf> {
        let stem = source
            .file_stem()
            .ok_or_else(|| AiofarmError::io("tracked path has no file name", source))?
            .to_string_lossy();

        let name = match source.extension() {
            Some(extension) => format!("{stem}_{timestamp}.{}", extension.to_string_lossy()),
            None => format!("{stem}_{timestamp}"),
        };

        Ok(self.backup_dir.join(name))
    }
}

fn backup_name_pattern(source: &Path) -> Result<Regex> {
    let stem = source
        .file_stem()
        .map(|stem| regex::escape(&stem.to_string_lossy()))
        .unwrap_or_default();

    let suffix = source
        .extension()
        .map(|extension| format!(r"\.{}", regex::escape(&extension.to_string_lossy())))
        .unwrap_or_default();

    Regex::new(&format!(r"^{stem}_(\d{{8}}-\d{{6}}){suffix}$"))
        .map_err(|e| AiofarmError::malformed(e, Some(source)))
}
