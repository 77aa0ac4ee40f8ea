//! Domain Value Objects
//!
//! Immutable value types. A value object that carries an invariant can only
//! be obtained through a constructor that checks it.

mod hidden_value;
mod location;

pub use hidden_value::HiddenValue;
pub use location::Location;
