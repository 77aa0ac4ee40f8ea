//! Location Value Object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::serde_float::serialize_f64;

/// A point on the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(serialize_with = "serialize_f64")]
    pub x: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub y: f64,
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
