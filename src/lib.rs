//! circle-lab - validated object model with guarded accessors
//!
//! The core type is [`ValidatedContainer`]: a public `radius` plus a hidden
//! value that can only be read through [`ValidatedContainer::read`] and
//! changed through [`ValidatedContainer::write`], which rejects anything
//! below [`HiddenValue::MINIMUM`].
//!
//! ```
//! use circle_lab::ValidatedContainer;
//!
//! let mut c = ValidatedContainer::create(1.0);
//! assert_eq!(c.read(), 20.0);
//! assert!(c.write(5.0).is_err());
//! assert_eq!(c.read(), 20.0);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod serde_float;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, OutputFormat, Verbosity};
pub use domain::entities::{create_circle, Circle, ContainerSnapshot, ValidatedContainer};
pub use domain::value_objects::{HiddenValue, Location};
pub use error::{LabError, LabResult, ValidationError};
