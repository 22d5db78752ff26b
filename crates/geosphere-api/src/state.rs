//! Shared application state for the Geosphere API.
//!
//! [`AppState`] owns the terrain generator and the insight cache. It is
//! built once at startup and injected into every handler through Axum's
//! `State` extractor, so tests can construct it with a seeded RNG.

use std::sync::Arc;

use geosphere_insights::{InsightConfig, InsightContext, InsightError, InsightStore};
use geosphere_terrain::{TerrainCatalog, TerrainError, TerrainGenerator};

/// Errors that can occur while assembling [`AppState`].
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The terrain catalog was rejected.
    #[error("terrain catalog error: {0}")]
    Terrain(#[from] TerrainError),

    /// The insight configuration was rejected.
    #[error("insight config error: {0}")]
    Insights(#[from] InsightError),
}

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] by the router. The insight store synchronizes its own
/// cache, so no outer lock is needed.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Builds the terrain payload for `GET /api/terrain`.
    pub terrain: TerrainGenerator,
    /// Current insight batch for `GET /api/insights`.
    pub insights: Arc<InsightStore>,
}

impl AppState {
    /// Assemble state from already-built parts.
    pub const fn new(terrain: TerrainGenerator, insights: Arc<InsightStore>) -> Self {
        Self { terrain, insights }
    }

    /// Validate configuration and build the generator and an empty cache.
    ///
    /// Insight locations and layer references are drawn from the terrain
    /// this catalog produces.
    pub fn build(catalog: TerrainCatalog, insights: &InsightConfig) -> Result<Self, StateError> {
        let terrain = TerrainGenerator::new(catalog)?;
        let context = InsightContext::from_terrain(&terrain.generate_terrain());
        let store = InsightStore::new(insights, context)?;
        Ok(Self::new(terrain, Arc::new(store)))
    }
}
