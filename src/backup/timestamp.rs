use std::{fmt, str::FromStr};

use chrono::{Local, NaiveDateTime};

use crate::config::ValidationError;

/// `chrono` format of a backup timestamp, e.g. `20240101-120000`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Identifies one backup generation across all tracked files.
///
/// Granularity is one second; two backups taken within the same second share
/// a timestamp and the later one overwrites the earlier copies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BackupTimestamp(String);

impl BackupTimestamp {
    /// Timestamp for the current local time.
    pub fn now() -> Self {
        Self(Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    /// Timestamp text as used in backup file names.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for BackupTimestamp {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts unpadded fields, so the length check keeps names canonical.
        let canonical =
            s.len() == 15 && NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).is_ok();

        if !canonical {
            return Err(ValidationError::new(
                "timestamp",
                format!("'{s}' is not a YYYYMMDD-HHMMSS timestamp"),
            ));
        }

        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for BackupTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
