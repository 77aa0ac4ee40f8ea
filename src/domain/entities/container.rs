//! ValidatedContainer entity
//!
//! A container with one public field (`radius`) and one hidden field that is
//! reachable only through the `read`/`write` accessor pair. `write` is the
//! single mutation path for the hidden value and refuses anything below
//! [`HiddenValue::MINIMUM`].

use serde::Serialize;

use crate::domain::value_objects::HiddenValue;
use crate::error::ValidationError;
use crate::serde_float::serialize_f64;

/// Radius used by `ValidatedContainer::default()`
const DEFAULT_RADIUS: f64 = 10.0;

/// Public radius plus a guarded hidden value
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedContainer {
    /// Freely mutable, no constraints
    pub radius: f64,
    hidden_value: HiddenValue,
}

impl ValidatedContainer {
    /// Create a container with the given radius and the default hidden value (20)
    pub fn create(radius: f64) -> Self {
        Self {
            radius,
            hidden_value: HiddenValue::default(),
        }
    }

    /// Current hidden value
    pub fn read(&self) -> f64 {
        self.hidden_value.get()
    }

    /// Replace the hidden value.
    ///
    /// On error the stored value is left as it was.
    pub fn write(&mut self, value: f64) -> Result<(), ValidationError> {
        self.hidden_value = HiddenValue::new(value)?;
        Ok(())
    }

    /// Human-readable combination of both fields
    pub fn describe(&self) -> String {
        format!("hidden value {}, radius {}", self.hidden_value, self.radius)
    }

    /// Serializable copy of the current state
    pub fn snapshot(&self) -> ContainerSnapshot {
        ContainerSnapshot {
            radius: self.radius,
            hidden_value: self.read(),
        }
    }
}

impl Default for ValidatedContainer {
    fn default() -> Self {
        Self::create(DEFAULT_RADIUS)
    }
}

/// Read-only view of a container, used for JSON output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContainerSnapshot {
    #[serde(serialize_with = "serialize_f64")]
    pub radius: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub hidden_value: f64,
}
