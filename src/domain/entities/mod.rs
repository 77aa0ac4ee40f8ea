//! Domain Entities
//!
//! - `ValidatedContainer` - public radius plus a hidden value behind an accessor pair
//! - `Circle` - plain circle built by literal, factory or constructor

mod circle;
mod container;

pub use circle::{create_circle, Circle};
pub use container::{ContainerSnapshot, ValidatedContainer};
