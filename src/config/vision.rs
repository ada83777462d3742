use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings for the vision role.
///
/// Carries no fields yet; it exists so a vision machine has a payload of its
/// own type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct VisionConfig {}
