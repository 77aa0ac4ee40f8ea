//! Circle entity
//!
//! A plain circle with no invariants. It can be built three ways: the fixed
//! literal, the `create_circle` factory, or the `Circle::new` constructor.
//! All three produce a fully initialized value.

use serde::Serialize;

use crate::domain::value_objects::Location;
use crate::serde_float::serialize_f64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    #[serde(serialize_with = "serialize_f64")]
    pub radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Circle {
    /// Constructor: radius only, no location
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            location: None,
        }
    }

    /// The literal circle: radius 1 at (1, 1)
    pub fn literal() -> Self {
        Self {
            radius: 1.0,
            location: Some(Location::new(1.0, 1.0)),
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Output of the circle's draw behaviour.
    ///
    /// A placed circle draws as "Circle", an unplaced one as "Draw".
    pub fn draw(&self) -> String {
        match self.location {
            Some(_) => "Circle".to_string(),
            None => "Draw".to_string(),
        }
    }
}

/// Factory function: radius only, no location
pub fn create_circle(radius: f64) -> Circle {
    Circle::new(radius)
}
