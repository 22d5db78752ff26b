//! Terrain payload: dimensions, the layered column, and drill points.
//!
//! Field names follow the client's lower-camel-case JSON schema
//! (`drillPoints`, `sampleData`).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::Material;
use crate::geometry::{Dimensions, Position};
use crate::ids::{DrillPointId, LayerId, TerrainId};

/// Physical properties of a layer.
///
/// Porosity and permeability are fractional (`0.0..=1.0`) for every layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LayerMetadata {
    /// Geological age label (e.g. `Cretaceous`).
    pub age: String,
    /// Free-text mineral composition.
    pub composition: String,
    /// Pore volume fraction.
    pub porosity: f64,
    /// Relative permeability fraction.
    pub permeability: f64,
    /// Bulk density in g/cm³.
    pub density: f64,
}

/// One stratum of the terrain column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TerrainLayer {
    /// Layer identifier, referenced by insights.
    pub id: LayerId,
    /// Display name.
    pub name: String,
    /// Depth of the layer top below the surface.
    pub depth: f64,
    /// Vertical thickness; always positive.
    pub thickness: f64,
    /// Render colour as `#RRGGBB`.
    pub color: String,
    /// Dominant material.
    pub material: Material,
    /// Render opacity in `0.0..=1.0`.
    pub opacity: f64,
    /// Physical properties.
    pub metadata: LayerMetadata,
    /// Whether the client shows the layer initially.
    pub visible: bool,
}

impl TerrainLayer {
    /// Depth of the layer bottom (`depth + thickness`).
    pub fn base(&self) -> f64 {
        self.depth + self.thickness
    }
}

/// Sampling record attached to a drill point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct DrillPointMetadata {
    /// Date the hole was drilled (`YYYY-MM-DD`).
    pub date: String,
    /// Total drilled depth; always positive.
    pub depth: f64,
    /// Summary of what the core showed.
    pub sample_data: String,
}

/// A fixed sampling location on the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DrillPoint {
    /// Drill point identifier.
    pub id: DrillPointId,
    /// Display name.
    pub name: String,
    /// Collar position.
    pub position: Position,
    /// Sampling record.
    pub metadata: DrillPointMetadata,
}

/// Complete terrain model returned by `GET /api/terrain`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TerrainData {
    /// Site identifier.
    pub id: TerrainId,
    /// Site display name.
    pub name: String,
    /// Bounding box of the modelled volume.
    pub dimensions: Dimensions,
    /// Layers ordered by ascending depth, stacked without gaps.
    pub layers: Vec<TerrainLayer>,
    /// Drill points in catalog order.
    pub drill_points: Vec<DrillPoint>,
}

impl TerrainData {
    /// Identifiers of every layer, top down.
    pub fn layer_ids(&self) -> Vec<LayerId> {
        self.layers.iter().map(|layer| layer.id.clone()).collect()
    }
}
