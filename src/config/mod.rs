//! Configuration schema definitions and validation.
//!
//! Defines the typed configuration of a serial/Arduino sorting machine. The
//! persisted document is a [`RootConfig`], whose `config_type` selects either
//! a [`ServerConfig`] or a [`VisionConfig`] payload. All records serialize
//! to/from JSON and carry a JSON Schema.

mod arduino;
mod defaults;
mod paths;
mod port;
mod program;
mod root;
mod serial;
mod server;
mod validation;
mod vision;

#[cfg(test)]
mod tests;

pub use arduino::ArduinoConfig;
pub use defaults::{
    DEFAULT_ARDUINO_PORT, DEFAULT_INPUT_PORT, DEFAULT_OUTPUT_OFFSET, DEFAULT_OUTPUT_PORTS,
    default_server_root,
};
pub use paths::{BACKUP_DIR_NAME, CONFIG_FILE_NAME, ConfigPaths, PROJECT_MANIFESTS};
pub use port::{DEFAULT_BAUDRATE, DEFAULT_PORT, PortBaseConfig};
pub use program::ProgramConfig;
pub use root::{ConfigType, RootConfig};
pub use serial::{
    EncodeType, FormatType, INPUT_PIN_RANGE, InputSerialConfigItem, OUTPUT_PIN_RANGE,
    OutputSerialConfigItem, SerialConfig,
};
pub use server::ServerConfig;
pub use validation::{Validate, ValidationError};
pub use vision::VisionConfig;
