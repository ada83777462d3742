use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    arduino::ArduinoConfig,
    program::ProgramConfig,
    serial::SerialConfig,
    validation::{Validate, ValidationError},
};

/// Settings for the sorter/server role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ServerConfig {
    /// Whether the sorting program runs its self-check on start.
    pub program_check: bool,

    /// Whether the machine runs in test mode.
    pub test_status: bool,

    /// Sorting program settings.
    pub program_config: ProgramConfig,

    /// Arduino link settings.
    pub arduino_config: ArduinoConfig,

    /// Serial wiring of the sorting line.
    pub serial_config: SerialConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            program_check: false,
            test_status: true,
            program_config: ProgramConfig::default(),
            arduino_config: ArduinoConfig::default(),
            serial_config: SerialConfig::default(),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        self.serial_config
            .validate()
            .map_err(|e| e.within("serial_config"))
    }
}
