//! Terrain model for Geosphere: site catalogs and the layered column generator.
//!
//! # Modules
//!
//! - [`catalog`] -- Layer and drill point templates, validation, and the
//!   built-in mountain range cross-section.
//! - [`generator`] -- [`TerrainGenerator`], which stacks catalog layers into
//!   a contiguous column and assigns identifiers.
//! - [`error`] -- [`TerrainError`] for rejected catalogs.

pub mod catalog;
pub mod error;
pub mod generator;

pub use catalog::{DrillPointTemplate, LayerTemplate, TerrainCatalog};
pub use error::TerrainError;
pub use generator::{TerrainGenerator, generate_terrain};
