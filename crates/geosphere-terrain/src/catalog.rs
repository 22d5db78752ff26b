//! Layer and drill point templates describing one terrain site.
//!
//! A [`TerrainCatalog`] is the static input to the generator. It lists layers
//! top down with their thicknesses only; identifiers and depths are derived
//! at generation time so the column is always contiguous.
//!
//! The built-in catalog models a 1000 x 500 x 600 mountain range
//! cross-section with six strata whose thicknesses sum to the site depth.

use geosphere_types::{Dimensions, LayerMetadata, Material, Position};
use serde::Deserialize;

use crate::error::TerrainError;

/// Template for one layer; `id` and `depth` are assigned by the generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayerTemplate {
    /// Display name.
    pub name: String,
    /// Vertical thickness.
    pub thickness: f64,
    /// Render colour as `#RRGGBB`.
    pub color: String,
    /// Dominant material.
    pub material: Material,
    /// Render opacity in `0.0..=1.0`.
    pub opacity: f64,
    /// Physical properties (fractional porosity and permeability).
    pub metadata: LayerMetadata,
    /// Initial client visibility.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

const fn default_visible() -> bool {
    true
}

/// Template for one drill point; `id` is assigned by the generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DrillPointTemplate {
    /// Display name.
    pub name: String,
    /// Collar position.
    pub position: Position,
    /// Drilling date (`YYYY-MM-DD`).
    pub date: String,
    /// Total drilled depth.
    pub depth: f64,
    /// Core sample summary.
    pub sample_data: String,
}

/// Everything needed to build a [`TerrainData`](geosphere_types::TerrainData).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TerrainCatalog {
    /// Site display name.
    pub name: String,
    /// Bounding box of the site.
    pub dimensions: Dimensions,
    /// Layers, top down.
    pub layers: Vec<LayerTemplate>,
    /// Drill points.
    #[serde(default)]
    pub drill_points: Vec<DrillPointTemplate>,
}

impl TerrainCatalog {
    /// Check every template against the terrain invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`TerrainError`] found, in catalog order.
    pub fn validate(&self) -> Result<(), TerrainError> {
        check_dimension("width", self.dimensions.width)?;
        check_dimension("height", self.dimensions.height)?;
        check_dimension("depth", self.dimensions.depth)?;

        if self.layers.is_empty() {
            return Err(TerrainError::NoLayers);
        }
        for layer in &self.layers {
            layer.validate()?;
        }

        for point in &self.drill_points {
            if !(point.depth.is_finite() && point.depth > 0.0) {
                return Err(TerrainError::InvalidDrillDepth {
                    name: point.name.clone(),
                    depth: point.depth,
                });
            }
        }
        Ok(())
    }

    /// Sum of all layer thicknesses.
    pub fn column_thickness(&self) -> f64 {
        self.layers.iter().map(|layer| layer.thickness).sum()
    }
}

impl LayerTemplate {
    fn validate(&self) -> Result<(), TerrainError> {
        if !(self.thickness.is_finite() && self.thickness > 0.0) {
            return Err(TerrainError::InvalidThickness {
                name: self.name.clone(),
                thickness: self.thickness,
            });
        }
        if !is_hex_color(&self.color) {
            return Err(TerrainError::InvalidColor {
                name: self.name.clone(),
                color: self.color.clone(),
            });
        }
        self.check_unit("opacity", self.opacity)?;
        self.check_unit("porosity", self.metadata.porosity)?;
        self.check_unit("permeability", self.metadata.permeability)?;
        if !(self.metadata.density.is_finite() && self.metadata.density > 0.0) {
            return Err(TerrainError::OutOfRange {
                name: self.name.clone(),
                field: "density",
                value: self.metadata.density,
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
            });
        }
        Ok(())
    }

    fn check_unit(&self, field: &'static str, value: f64) -> Result<(), TerrainError> {
        if (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(TerrainError::OutOfRange {
                name: self.name.clone(),
                field,
                value,
                min: 0.0,
                max: 1.0,
            })
        }
    }
}

fn check_dimension(axis: &'static str, value: f64) -> Result<(), TerrainError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TerrainError::InvalidDimension { axis, value })
    }
}

/// `#RRGGBB`, case-insensitive.
fn is_hex_color(color: &str) -> bool {
    color
        .strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()))
}

// ---------------------------------------------------------------------------
// Built-in catalog
// ---------------------------------------------------------------------------

/// Helper to build a [`LayerTemplate`].
#[allow(clippy::too_many_arguments)]
fn layer(
    name: &str,
    thickness: f64,
    color: &str,
    material: Material,
    opacity: f64,
    age: &str,
    composition: &str,
    (porosity, permeability, density): (f64, f64, f64),
) -> LayerTemplate {
    LayerTemplate {
        name: name.to_owned(),
        thickness,
        color: color.to_owned(),
        material,
        opacity,
        metadata: LayerMetadata {
            age: age.to_owned(),
            composition: composition.to_owned(),
            porosity,
            permeability,
            density,
        },
        visible: true,
    }
}

/// Helper to build a surface [`DrillPointTemplate`].
fn drill(name: &str, x: f64, z: f64, date: &str, depth: f64, sample: &str) -> DrillPointTemplate {
    DrillPointTemplate {
        name: name.to_owned(),
        position: Position::new(x, 0.0, z),
        date: date.to_owned(),
        depth,
        sample_data: sample.to_owned(),
    }
}

impl Default for TerrainCatalog {
    fn default() -> Self {
        Self {
            name: String::from("Mountain Range Cross-Section"),
            dimensions: Dimensions {
                width: 1000.0,
                height: 500.0,
                depth: 600.0,
            },
            layers: vec![
                layer(
                    "Topsoil",
                    20.0,
                    "#8B4513",
                    Material::Soil,
                    0.9,
                    "Recent",
                    "Organic matter, clay, silt",
                    (0.5, 0.4, 1.2),
                ),
                layer(
                    "Clay",
                    50.0,
                    "#A0522D",
                    Material::Clay,
                    0.85,
                    "Holocene",
                    "Clay minerals, quartz",
                    (0.4, 0.1, 1.5),
                ),
                layer(
                    "Sandstone",
                    150.0,
                    "#DEB887",
                    Material::Sandstone,
                    0.8,
                    "Cretaceous",
                    "Quartz, feldspar",
                    (0.3, 0.6, 2.3),
                ),
                layer(
                    "Limestone",
                    180.0,
                    "#F5F5DC",
                    Material::Limestone,
                    0.75,
                    "Jurassic",
                    "Calcium carbonate",
                    (0.2, 0.3, 2.7),
                ),
                layer(
                    "Shale",
                    100.0,
                    "#2F4F4F",
                    Material::Shale,
                    0.7,
                    "Triassic",
                    "Clay minerals, quartz, organic matter",
                    (0.1, 0.05, 2.4),
                ),
                layer(
                    "Granite",
                    100.0,
                    "#B0B0B0",
                    Material::Granite,
                    0.9,
                    "Precambrian",
                    "Quartz, feldspar, mica",
                    (0.01, 0.001, 2.8),
                ),
            ],
            drill_points: vec![
                drill(
                    "Drill Site Alpha",
                    200.0,
                    100.0,
                    "2024-02-15",
                    450.0,
                    "Sandstone with oil traces at 320m depth",
                ),
                drill(
                    "Drill Site Beta",
                    600.0,
                    300.0,
                    "2024-03-22",
                    520.0,
                    "Limestone with karst features at 250m depth",
                ),
                drill(
                    "Drill Site Gamma",
                    800.0,
                    450.0,
                    "2024-04-10",
                    580.0,
                    "Granite with mineral veins at 550m depth",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_valid() {
        assert!(TerrainCatalog::default().validate().is_ok());
    }

    #[test]
    fn default_column_fills_site_depth() {
        let catalog = TerrainCatalog::default();
        assert!((catalog.column_thickness() - catalog.dimensions.depth).abs() < 1e-9);
    }

    #[test]
    fn rejects_empty_layers() {
        let mut catalog = TerrainCatalog::default();
        catalog.layers.clear();
        assert!(matches!(catalog.validate(), Err(TerrainError::NoLayers)));
    }

    #[test]
    fn rejects_zero_thickness() {
        let mut catalog = TerrainCatalog::default();
        if let Some(first) = catalog.layers.first_mut() {
            first.thickness = 0.0;
        }
        assert!(matches!(
            catalog.validate(),
            Err(TerrainError::InvalidThickness { .. })
        ));
    }

    #[test]
    fn rejects_percentage_porosity() {
        let mut catalog = TerrainCatalog::default();
        if let Some(first) = catalog.layers.first_mut() {
            first.metadata.porosity = 35.0;
        }
        assert!(matches!(
            catalog.validate(),
            Err(TerrainError::OutOfRange { field: "porosity", .. })
        ));
    }

    #[test]
    fn rejects_bad_color() {
        let mut catalog = TerrainCatalog::default();
        if let Some(last) = catalog.layers.last_mut() {
            last.color = String::from("grey");
        }
        assert!(matches!(
            catalog.validate(),
            Err(TerrainError::InvalidColor { .. })
        ));
    }

    #[test]
    fn rejects_nonpositive_dimension() {
        let mut catalog = TerrainCatalog::default();
        catalog.dimensions.height = 0.0;
        assert!(matches!(
            catalog.validate(),
            Err(TerrainError::InvalidDimension { axis: "height", .. })
        ));
    }

    #[test]
    fn rejects_nonpositive_drill_depth() {
        let mut catalog = TerrainCatalog::default();
        if let Some(point) = catalog.drill_points.first_mut() {
            point.depth = -1.0;
        }
        assert!(matches!(
            catalog.validate(),
            Err(TerrainError::InvalidDrillDepth { .. })
        ));
    }

    #[test]
    fn hex_color_check() {
        assert!(is_hex_color("#8b4513"));
        assert!(is_hex_color("#A9A9A9"));
        assert!(!is_hex_color("8B4513"));
        assert!(!is_hex_color("#8B451"));
        assert!(!is_hex_color("#8B451G"));
    }

    #[test]
    fn parses_from_yaml() {
        let yaml = r##"
name: Test Site
dimensions: { width: 20, height: 10, depth: 20 }
layers:
  - name: Topsoil
    thickness: 1.5
    color: "#8B4513"
    material: soil
    opacity: 0.9
    metadata: { age: Recent, composition: Silty loam, porosity: 0.35, permeability: 0.15, density: 1.3 }
  - name: Bedrock
    thickness: 10
    color: "#A9A9A9"
    material: granite
    opacity: 0.9
    visible: false
    metadata: { age: Precambrian, composition: Granite, porosity: 0.03, permeability: 0.01, density: 2.8 }
drill_points:
  - name: Drill Point A
    position: { x: 5, y: 0, z: 3 }
    date: "2023-04-15"
    depth: 18.5
    sample_data: Core sample with traces of minerals
"##;
        let catalog: TerrainCatalog = serde_yml::from_str(yaml).unwrap_or_default();
        assert_eq!(catalog.name, "Test Site");
        assert_eq!(catalog.layers.len(), 2);
        assert!(catalog.layers.first().is_some_and(|l| l.visible));
        assert!(catalog.layers.last().is_some_and(|l| !l.visible));
        assert_eq!(catalog.drill_points.len(), 1);
        assert!(catalog.validate().is_ok());
    }
}
