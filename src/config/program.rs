use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sorting program settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(default)]
pub struct ProgramConfig {
    /// Number of sorting lines the program drives.
    pub line_count: i64,
}
