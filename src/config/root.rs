use std::{fmt, path::Path};

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeStruct};
use serde_json::{Value, ser::PrettyFormatter};

use super::{
    ServerConfig, VisionConfig,
    defaults::default_server_root,
    validation::{Validate, ValidationError},
};
use crate::{AiofarmError, Result};

/// Machine role selected by the `config_type` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    /// Camera/vision machine.
    Vision,

    /// Sorter/server machine.
    Server,
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigType::Vision => write!(f, "vision"),
            ConfigType::Server => write!(f, "server"),
        }
    }
}

/// Top-level persisted configuration.
///
/// The role and its payload are one value, so a server tag can never carry a
/// vision payload. In JSON this is `{"config_type": ..., "config": {...}}`;
/// deserializing checks the pairing and runs [`Validate`] on the payload.
#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(tag = "config_type", content = "config", rename_all = "lowercase")]
pub enum RootConfig {
    /// Sorter/server machine settings.
    Server(ServerConfig),

    /// Camera/vision machine settings.
    Vision(VisionConfig),
}

impl Default for RootConfig {
    fn default() -> Self {
        default_server_root()
    }
}

impl RootConfig {
    /// Role of this configuration.
    pub fn config_type(&self) -> ConfigType {
        match self {
            RootConfig::Server(_) => ConfigType::Server,
            RootConfig::Vision(_) => ConfigType::Vision,
        }
    }

    /// Server payload, if this is a server configuration.
    pub fn as_server(&self) -> Option<&ServerConfig> {
        match self {
            RootConfig::Server(config) => Some(config),
            RootConfig::Vision(_) => None,
        }
    }

    /// Parses and validates a configuration document.
    ///
    /// # Arguments
    ///
    /// * `content` - JSON text
    /// * `path` - File the text came from, used in error messages
    ///
    /// # Errors
    ///
    /// * `AiofarmError::MalformedData` - Not JSON, or `config_type` missing or unknown
    /// * `AiofarmError::Validation` - Payload has the wrong shape or a field violates a constraint
    pub fn from_json(content: &str, path: Option<&Path>) -> Result<Self> {
        let raw: RawRootConfig =
            serde_json::from_str(content).map_err(|e| AiofarmError::malformed(e, path))?;

        Ok(RootConfig::try_from(raw)?)
    }

    /// Serializes to JSON indented with four spaces, ending in a newline.
    ///
    /// # Errors
    ///
    /// Returns `AiofarmError::MalformedData` if serialization fails.
    pub fn to_pretty_json(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

        self.serialize(&mut serializer)
            .map_err(|e| AiofarmError::malformed(e, None))?;
        buffer.push(b'\n');

        Ok(buffer)
    }

    /// JSON Schema describing the persisted document.
    pub fn document_schema() -> Schema {
        schema_for!(RootConfig)
    }
}

impl Validate for RootConfig {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        match self {
            RootConfig::Server(config) => config.validate().map_err(|e| e.within("config")),
            RootConfig::Vision(_) => Ok(()),
        }
    }
}

/// Document shape before the discriminator has been checked.
#[derive(Deserialize)]
struct RawRootConfig {
    config_type: ConfigType,

    #[serde(default)]
    config: Option<Value>,
}

impl TryFrom<RawRootConfig> for RootConfig {
    type Error = ValidationError;

    fn try_from(raw: RawRootConfig) -> std::result::Result<Self, Self::Error> {
        let root = match (raw.config_type, raw.config) {
            (ConfigType::Server, None) => {
                return Err(ValidationError::new(
                    "config",
                    "a server configuration requires a config object",
                ));
            }
            (ConfigType::Vision, None) => RootConfig::Vision(VisionConfig::default()),
            (config_type, Some(Value::Object(payload))) => {
                coerce_payload(config_type, Value::Object(payload))?
            }
            (config_type, Some(other)) => {
                return Err(ValidationError::new(
                    "config",
                    format!(
                        "expected an object for a '{config_type}' configuration, found {}",
                        json_kind(&other)
                    ),
                ));
            }
        };

        root.validate()?;
        Ok(root)
    }
}

fn coerce_payload(
    config_type: ConfigType,
    payload: Value,
) -> std::result::Result<RootConfig, ValidationError> {
    match config_type {
        ConfigType::Server => deserialize_payload(payload).map(RootConfig::Server),
        ConfigType::Vision => deserialize_payload(payload).map(RootConfig::Vision),
    }
}

/// Deserializes a payload, naming the offending field in the error.
fn deserialize_payload<T>(payload: Value) -> std::result::Result<T, ValidationError>
where
    T: de::DeserializeOwned,
{
    serde_path_to_error::deserialize(payload).map_err(|e| {
        let path = e.path().to_string();
        let field = if path == "." {
            "config".to_string()
        } else {
            format!("config.{path}")
        };

        ValidationError::new(field, e.into_inner().to_string())
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<'de> Deserialize<'de> for RootConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawRootConfig::deserialize(deserializer)?;
        RootConfig::try_from(raw).map_err(de::Error::custom)
    }
}

impl Serialize for RootConfig {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("RootConfig", 2)?;
        state.serialize_field("config_type", &self.config_type())?;

        match self {
            RootConfig::Server(config) => state.serialize_field("config", config)?,
            RootConfig::Vision(config) => state.serialize_field("config", config)?,
        }

        state.end()
    }
}
