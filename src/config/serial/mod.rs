mod message;

pub use message::{EncodeType, FormatType};

use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    port::{DEFAULT_BAUDRATE, PortBaseConfig},
    validation::{Validate, ValidationError, check_pin, validate_items},
};

/// Pins an input (camera trigger) line may be wired to.
pub const INPUT_PIN_RANGE: RangeInclusive<u8> = 2..=9;

/// Pins an output (sorter actuator) line may be wired to.
pub const OUTPUT_PIN_RANGE: RangeInclusive<u8> = 30..=37;

/// One input line: a serial port that reports objects entering the camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InputSerialConfigItem {
    /// Port and line speed.
    #[serde(flatten)]
    pub port: PortBaseConfig,

    /// Arduino pin, within `2..=9`.
    pub pin: u8,

    /// Delay between the input signal and the camera capture.
    #[serde(default)]
    pub camera_delay: i64,
}

impl InputSerialConfigItem {
    /// Creates an input line, rejecting pins outside `2..=9`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for field `pin` if it is out of range.
    pub fn new(port: PortBaseConfig, pin: u8, camera_delay: i64) -> Result<Self, ValidationError> {
        let item = Self {
            port,
            pin,
            camera_delay,
        };
        item.validate()?;
        Ok(item)
    }
}

impl Validate for InputSerialConfigItem {
    fn validate(&self) -> Result<(), ValidationError> {
        check_pin("pin", self.pin, &INPUT_PIN_RANGE)
    }
}

/// One output line: a serial port driving a sorter gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OutputSerialConfigItem {
    /// Port and line speed.
    #[serde(flatten)]
    pub port: PortBaseConfig,

    /// Pulse offset between detection and actuation.
    #[serde(default)]
    pub offset: i64,

    /// Arduino pin, within `30..=37`.
    pub pin: u8,
}

impl OutputSerialConfigItem {
    /// Creates an output line, rejecting pins outside `30..=37`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for field `pin` if it is out of range.
    pub fn new(port: PortBaseConfig, offset: i64, pin: u8) -> Result<Self, ValidationError> {
        let item = Self { port, offset, pin };
        item.validate()?;
        Ok(item)
    }
}

impl Validate for OutputSerialConfigItem {
    fn validate(&self) -> Result<(), ValidationError> {
        check_pin("pin", self.pin, &OUTPUT_PIN_RANGE)
    }
}

/// Serial wiring of the sorting line.
///
/// Lists every input and output line plus the encoding and framing used
/// for messages sent to the sorter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SerialConfig {
    /// Input lines in wiring order.
    pub inputs: Vec<InputSerialConfigItem>,

    /// Output lines in wiring order.
    pub outputs: Vec<OutputSerialConfigItem>,

    /// Encoding of `test_message_to_sorter`.
    pub test_message_encode_type: EncodeType,

    /// Framing of messages sent to the sorter.
    pub test_message_format_type: FormatType,

    /// Line speed of the sorter link.
    pub baudrate: u32,

    /// Message sent to the sorter when testing the link.
    pub test_message_to_sorter: String,

    /// Module that reports production results, if any.
    pub production_result_sender_module: Option<String>,

    /// Whether the production sketch has been flashed to the Arduino.
    pub is_production_sketch_uploaded: bool,

    /// Whether the read side of the link has been configured.
    pub is_read_configured: bool,

    /// Whether the send side of the link has been configured.
    pub is_send_configured: bool,

    /// Number of encoder signals making up one pulse.
    pub signal_count_per_pulse: i64,
}

impl SerialConfig {
    /// Encodes and frames `test_message_to_sorter` for transmission.
    ///
    /// Not part of `validate`: an unencodable message fails only when sent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the message contains a character the
    /// configured encoding cannot represent.
    pub fn encoded_test_message(&self) -> Result<Vec<u8>, ValidationError> {
        let payload = self
            .test_message_encode_type
            .encode(&self.test_message_to_sorter)
            .map_err(|c| {
                ValidationError::new(
                    "test_message_to_sorter",
                    format!(
                        "character {c:?} cannot be encoded as {}",
                        self.test_message_encode_type
                    ),
                )
            })?;

        Ok(self.test_message_format_type.frame(&payload))
    }
}

impl Validate for SerialConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_items("inputs", &self.inputs)?;
        validate_items("outputs", &self.outputs)
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            inputs: vec![InputSerialConfigItem {
                port: PortBaseConfig::default(),
                pin: *INPUT_PIN_RANGE.start(),
                camera_delay: 0,
            }],
            outputs: vec![OutputSerialConfigItem {
                port: PortBaseConfig::default(),
                offset: 0,
                pin: *OUTPUT_PIN_RANGE.start(),
            }],
            test_message_encode_type: EncodeType::default(),
            test_message_format_type: FormatType::default(),
            baudrate: DEFAULT_BAUDRATE,
            test_message_to_sorter: "test_message".to_string(),
            production_result_sender_module: None,
            is_production_sketch_uploaded: false,
            is_read_configured: false,
            is_send_configured: false,
            signal_count_per_pulse: 1,
        }
    }
}
