use std::ops::RangeInclusive;

use thiserror::Error;

/// A configuration value that violates a declared constraint.
///
/// `field` is a dotted path from the record that was validated down to the
/// offending value, e.g. `config.serial_config.outputs[1].pin`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid config field '{field}': {reason}")]
pub struct ValidationError {
    /// Path of the offending field
    pub field: String,
    /// Constraint that was violated
    pub reason: String,
}

impl ValidationError {
    /// Creates a validation error for a single field.
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Prefixes the field path with the name of the enclosing record field.
    pub fn within(mut self, parent: &str) -> Self {
        self.field = format!("{parent}.{}", self.field);
        self
    }
}

/// Configuration records that carry constraints serde cannot express.
///
/// Validation runs at every deserialization boundary and before every save,
/// so a tree that passed `validate` is safe to persist.
pub trait Validate {
    /// Checks every constrained field of this record and its children.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint found.
    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn check_pin(
    field: &str,
    pin: u8,
    range: &RangeInclusive<u8>,
) -> Result<(), ValidationError> {
    if range.contains(&pin) {
        return Ok(());
    }

    Err(ValidationError::new(
        field,
        format!(
            "pin {pin} is outside the allowed range {}..={}",
            range.start(),
            range.end()
        ),
    ))
}

pub(crate) fn validate_items<T: Validate>(
    field: &str,
    items: &[T],
) -> Result<(), ValidationError> {
    for (index, item) in items.iter().enumerate() {
        item.validate()
            .map_err(|e| e.within(&format!("{field}[{index}]")))?;
    }

    Ok(())
}
