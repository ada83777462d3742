//! Timestamped backup and rollback of the configuration file.
//!
//! Every backup copies the configuration file and the project manifests into
//! one backup directory under a shared second-granularity timestamp. Restore
//! points are enumerated from the configuration file's backups.

mod manager;
mod timestamp;

pub use manager::{BackupManager, BackupReport, RollbackReport};
pub use timestamp::{BackupTimestamp, TIMESTAMP_FORMAT};
