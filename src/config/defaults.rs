//! Known-good configuration used whenever the on-disk file cannot be trusted.

use super::{
    ArduinoConfig, DEFAULT_BAUDRATE, INPUT_PIN_RANGE, InputSerialConfigItem, OUTPUT_PIN_RANGE,
    OutputSerialConfigItem, PortBaseConfig, ProgramConfig, RootConfig, SerialConfig, ServerConfig,
};

/// Device the Arduino enumerates as on the production image.
pub const DEFAULT_ARDUINO_PORT: &str = "/dev/ttyACM0";

/// Device of the single camera-trigger input line.
pub const DEFAULT_INPUT_PORT: &str = "/dev/ttyUSB0";

/// Devices of the two sorter output lines, in wiring order.
pub const DEFAULT_OUTPUT_PORTS: [&str; 2] = ["/dev/ttyUSB1", "/dev/ttyUSB2"];

/// Pulse offset of every default output line.
pub const DEFAULT_OUTPUT_OFFSET: i64 = 23;

/// Builds the default server-role configuration.
///
/// This is what `load` returns on any failure and what a self-healing load
/// writes back to disk.
pub fn default_server_root() -> RootConfig {
    RootConfig::Server(default_server_config())
}

fn default_server_config() -> ServerConfig {
    let outputs = DEFAULT_OUTPUT_PORTS
        .iter()
        .zip(OUTPUT_PIN_RANGE)
        .map(|(port, pin)| OutputSerialConfigItem {
            port: PortBaseConfig::new(*port, DEFAULT_BAUDRATE),
            offset: DEFAULT_OUTPUT_OFFSET,
            pin,
        })
        .collect();

    ServerConfig {
        program_check: false,
        test_status: true,
        program_config: ProgramConfig {
            line_count: DEFAULT_OUTPUT_PORTS.len() as i64,
        },
        arduino_config: ArduinoConfig {
            port: PortBaseConfig::new(DEFAULT_ARDUINO_PORT, DEFAULT_BAUDRATE),
            test_message: "test_message".to_string(),
            is_upload_port_assigned: true,
        },
        serial_config: SerialConfig {
            inputs: vec![InputSerialConfigItem {
                port: PortBaseConfig::new(DEFAULT_INPUT_PORT, DEFAULT_BAUDRATE),
                pin: *INPUT_PIN_RANGE.start(),
                camera_delay: 0,
            }],
            outputs,
            ..SerialConfig::default()
        },
    }
}
