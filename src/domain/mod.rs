//! Domain Layer
//!
//! The object model itself: value types and the entities built from them.
//! Nothing in here touches the file system or the terminal.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (HiddenValue, Location)
//! - `entities/` - Objects with mutable state (ValidatedContainer, Circle)

pub mod entities;
pub mod value_objects;
