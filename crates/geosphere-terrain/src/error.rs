//! Error types for the `geosphere-terrain` crate.
//!
//! Only catalog validation can fail. Once a catalog has been accepted,
//! terrain generation is infallible.

/// Reasons a [`TerrainCatalog`](crate::TerrainCatalog) is rejected.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// A bounding-box extent is zero, negative, or not finite.
    #[error("dimension {axis} must be positive and finite, got {value}")]
    InvalidDimension {
        /// Which extent (`width`, `height`, `depth`).
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The catalog defines no layers.
    #[error("terrain catalog has no layers")]
    NoLayers,

    /// A layer has a non-positive or non-finite thickness.
    #[error("layer {name:?} has invalid thickness {thickness}")]
    InvalidThickness {
        /// Layer name.
        name: String,
        /// The rejected thickness.
        thickness: f64,
    },

    /// A layer property lies outside its allowed range.
    #[error("layer {name:?} has {field} {value} outside {min}..={max}")]
    OutOfRange {
        /// Layer name.
        name: String,
        /// Offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A layer colour is not a `#RRGGBB` hex string.
    #[error("layer {name:?} has invalid color {color:?}")]
    InvalidColor {
        /// Layer name.
        name: String,
        /// The rejected colour.
        color: String,
    },

    /// A drill point has a non-positive or non-finite depth.
    #[error("drill point {name:?} has invalid depth {depth}")]
    InvalidDrillDepth {
        /// Drill point name.
        name: String,
        /// The rejected depth.
        depth: f64,
    },
}
