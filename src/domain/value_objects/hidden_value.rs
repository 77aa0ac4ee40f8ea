//! Hidden Value Object
//!
//! The numeric payload kept behind `ValidatedContainer`'s accessor pair.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ValidationError;

/// A number that is always `>= HiddenValue::MINIMUM`.
///
/// The only way in is [`HiddenValue::new`] (or `TryFrom<f64>`, which calls
/// it). Deserialization goes through the same check. Serializes as a bare
/// number, or as `"inf"` for positive infinity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct HiddenValue(f64);

impl HiddenValue {
    /// Smallest accepted value
    pub const MINIMUM: f64 = 10.0;

    /// Value a fresh container starts with
    pub const DEFAULT: f64 = 20.0;

    /// Validate and wrap a raw number
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() {
            return Err(ValidationError::not_a_number());
        }
        if value < Self::MINIMUM {
            return Err(ValidationError::below_minimum(value));
        }
        Ok(Self(value))
    }

    /// Get the raw number
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for HiddenValue {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<f64> for HiddenValue {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HiddenValue> for f64 {
    fn from(value: HiddenValue) -> Self {
        value.0
    }
}

impl Serialize for HiddenValue {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        crate::serde_float::serialize_f64(&self.0, s)
    }
}

impl fmt::Display for HiddenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
