use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One sorting decision reported by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(default)]
pub struct DefaultResult {
    /// Index of the client (camera) that produced the result.
    pub client: u32,

    /// Non-zero when the object counts toward production totals.
    pub count_flag: u32,

    /// Grade assigned to the object.
    pub grade: i32,

    /// Color score.
    pub color: f64,

    /// Size score.
    pub size: f64,
}

/// One sorting decision produced in test mode, keyed by sorting line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(default)]
pub struct TestSortResult {
    /// Index of the sorting line.
    pub line: u32,

    /// Non-zero when the object counts toward production totals.
    pub count_flag: u32,

    /// Grade assigned to the object.
    pub grade: i32,

    /// Color score.
    pub color: f64,

    /// Size score.
    pub size: f64,
}

impl From<TestSortResult> for DefaultResult {
    fn from(result: TestSortResult) -> Self {
        Self {
            client: result.line,
            count_flag: result.count_flag,
            grade: result.grade,
            color: result.color,
            size: result.size,
        }
    }
}
