//! Shared wire types for the Geosphere terrain and insights API.
//!
//! This crate is the single source of truth for every payload the API
//! serves. Types flow to the `TypeScript` viewer via `ts-rs`, so the JSON
//! field names here are the client contract.
//!
//! # Modules
//!
//! - [`ids`] -- String-backed identifiers (`layer-3`, `insight-1`, ...)
//! - [`enums`] -- Insight type, severity, layer material, response status
//! - [`geometry`] -- [`Position`] and [`Dimensions`]
//! - [`terrain`] -- Layers, drill points, and the [`TerrainData`] aggregate
//! - [`insight`] -- The [`Insight`] record
//! - [`response`] -- [`StatusResponse`] acknowledgement and error bodies

pub mod enums;
pub mod geometry;
pub mod ids;
pub mod insight;
pub mod response;
pub mod terrain;

// Re-export all public types at crate root for convenience.
pub use enums::{InsightType, Material, ResponseStatus, Severity};
pub use geometry::{Dimensions, Position};
pub use ids::{DrillPointId, InsightId, LayerId, TerrainId};
pub use insight::Insight;
pub use response::StatusResponse;
pub use terrain::{DrillPoint, DrillPointMetadata, LayerMetadata, TerrainData, TerrainLayer};
