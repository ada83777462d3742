use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::port::PortBaseConfig;

/// Link to the Arduino that drives the sorter gates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ArduinoConfig {
    /// Port and line speed of the Arduino.
    #[serde(flatten)]
    pub port: PortBaseConfig,

    /// Message echoed back by the Arduino when testing the link.
    pub test_message: String,

    /// Whether an upload port has been assigned for flashing sketches.
    pub is_upload_port_assigned: bool,
}

impl Default for ArduinoConfig {
    fn default() -> Self {
        Self {
            port: PortBaseConfig::default(),
            test_message: "test_message".to_string(),
            is_upload_port_assigned: false,
        }
    }
}
