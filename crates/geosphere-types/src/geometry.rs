//! Plain 3D coordinate and bounding-box records.
//!
//! Coordinates use terrain-site scale: the origin is a surface corner of the
//! site and each axis runs from `0` to the matching [`Dimensions`] extent.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A point in terrain space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Position {
    /// Easting within the site.
    pub x: f64,
    /// Vertical axis.
    pub y: f64,
    /// Northing within the site.
    pub z: f64,
}

impl Position {
    /// Construct a position from its three components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Bounding box of a terrain volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Dimensions {
    /// Extent along `x`.
    pub width: f64,
    /// Extent along `y`.
    pub height: f64,
    /// Extent along `z`.
    pub depth: f64,
}

impl Dimensions {
    /// Whether `position` lies inside the box, bounds inclusive.
    pub fn contains(&self, position: &Position) -> bool {
        (0.0..=self.width).contains(&position.x)
            && (0.0..=self.height).contains(&position.y)
            && (0.0..=self.depth).contains(&position.z)
    }
}
