//! Terrain Data Generator.
//!
//! Turns a validated [`TerrainCatalog`] into a [`TerrainData`] aggregate.
//! Layer depths are computed from the cumulative thickness of every layer
//! above, so for consecutive layers `depth == previous.depth + previous.thickness`
//! holds by construction and the column is sorted by ascending depth.

use geosphere_types::{
    DrillPoint, DrillPointId, DrillPointMetadata, LayerId, TerrainData, TerrainId, TerrainLayer,
};

use crate::catalog::TerrainCatalog;
use crate::error::TerrainError;

/// Builds terrain payloads from a fixed catalog.
///
/// Cheap to clone; generation has no side effects, so one generator can be
/// shared by every request.
#[derive(Debug, Clone, Default)]
pub struct TerrainGenerator {
    catalog: TerrainCatalog,
}

impl TerrainGenerator {
    /// Validate `catalog` and wrap it in a generator.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError`] if the catalog violates a terrain invariant.
    pub fn new(catalog: TerrainCatalog) -> Result<Self, TerrainError> {
        catalog.validate()?;
        let column = catalog.column_thickness();
        if column > catalog.dimensions.depth {
            tracing::warn!(
                column,
                site_depth = catalog.dimensions.depth,
                "layer column extends below the site bounding box"
            );
        }
        Ok(Self { catalog })
    }

    /// The catalog this generator was built from.
    pub const fn catalog(&self) -> &TerrainCatalog {
        &self.catalog
    }

    /// Produce the complete terrain model for the catalog's site.
    pub fn generate_terrain(&self) -> TerrainData {
        let mut depth = 0.0_f64;
        let layers = self
            .catalog
            .layers
            .iter()
            .enumerate()
            .map(|(index, template)| {
                let layer = TerrainLayer {
                    id: LayerId::numbered(index.saturating_add(1)),
                    name: template.name.clone(),
                    depth,
                    thickness: template.thickness,
                    color: template.color.clone(),
                    material: template.material,
                    opacity: template.opacity,
                    metadata: template.metadata.clone(),
                    visible: template.visible,
                };
                depth = layer.base();
                layer
            })
            .collect();

        let drill_points = self
            .catalog
            .drill_points
            .iter()
            .enumerate()
            .map(|(index, template)| DrillPoint {
                id: DrillPointId::numbered(index.saturating_add(1)),
                name: template.name.clone(),
                position: template.position,
                metadata: DrillPointMetadata {
                    date: template.date.clone(),
                    depth: template.depth,
                    sample_data: template.sample_data.clone(),
                },
            })
            .collect();

        TerrainData {
            id: TerrainId::numbered(1),
            name: self.catalog.name.clone(),
            dimensions: self.catalog.dimensions,
            layers,
            drill_points,
        }
    }
}

/// Generate the built-in site.
pub fn generate_terrain() -> TerrainData {
    TerrainGenerator::default().generate_terrain()
}
