use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Serial device name used when none is configured.
pub const DEFAULT_PORT: &str = "COM3";

/// Baud rate used when none is configured.
pub const DEFAULT_BAUDRATE: u32 = 38400;

/// Serial port settings shared by every device link.
///
/// Embedded with `#[serde(flatten)]` so `port` and `baudrate` sit at the same
/// level as the owning record's own fields in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PortBaseConfig {
    /// Serial device name (e.g. "COM3" or "/dev/ttyUSB0").
    pub port: String,

    /// Line speed in bits per second.
    pub baudrate: u32,
}

impl PortBaseConfig {
    /// Creates port settings for the given device and speed.
    pub fn new(port: impl Into<String>, baudrate: u32) -> Self {
        Self {
            port: port.into(),
            baudrate,
        }
    }
}

impl Default for PortBaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PORT, DEFAULT_BAUDRATE)
    }
}
