//! Error types for circle-lab
//!
//! Uses `thiserror` for library errors. The binary wraps these in
//! `anyhow::Error` and downcasts when rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for circle-lab operations
pub type LabResult<T> = Result<T, LabError>;

/// A rejected attempt to store a hidden value.
///
/// Returned by [`crate::ValidatedContainer::write`] and
/// [`crate::HiddenValue::new`]. The rejected value is kept so callers can
/// report it; the container that produced the error is left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid value {value}: {reason}")]
pub struct ValidationError {
    pub reason: String,
    pub value: f64,
}

impl ValidationError {
    /// Reason used when the value is smaller than the minimum
    pub const BELOW_MINIMUM: &'static str = "value below minimum";

    /// Reason used when the value is NaN
    pub const NOT_A_NUMBER: &'static str = "value is not a number";

    pub fn below_minimum(value: f64) -> Self {
        Self {
            reason: Self::BELOW_MINIMUM.to_string(),
            value,
        }
    }

    pub fn not_a_number() -> Self {
        Self {
            reason: Self::NOT_A_NUMBER.to_string(),
            value: f64::NAN,
        }
    }
}

/// Main error type for circle-lab operations
#[derive(Error, Debug)]
pub enum LabError {
    /// Hidden value rejected by the accessor
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config file passed explicitly does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::below_minimum(5.0);
        assert_eq!(err.to_string(), "invalid value 5: value below minimum");
    }

    #[test]
    fn test_not_a_number_reason() {
        let err = ValidationError::not_a_number();
        assert_eq!(err.reason, ValidationError::NOT_A_NUMBER);
        assert!(err.value.is_nan());
    }

    #[test]
    fn test_lab_error_wraps_validation_transparently() {
        let err: LabError = ValidationError::below_minimum(3.5).into();
        assert_eq!(err.to_string(), "invalid value 3.5: value below minimum");
        assert!(matches!(err, LabError::Validation(_)));
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = LabError::InvalidConfig {
            file: PathBuf::from("circle-lab.toml"),
            message: "expected a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config in circle-lab.toml: expected a number"
        );
    }
}
