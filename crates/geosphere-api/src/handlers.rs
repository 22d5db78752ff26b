//! REST API endpoint handlers.
//!
//! Each handler is a thin adapter: call the generator or the insight cache
//! held in [`AppState`] and serialize the result as JSON. Payloads go
//! through [`serde_json::to_value`] so a serialization failure becomes a
//! 500 error body instead of a panic.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/terrain` | Terrain model for the configured site |
//! | `GET` | `/api/insights` | Current insight batch (generated on first read) |
//! | `POST` | `/api/insights/analyze` | Replace the insight batch |
//! | `GET` | `/api/test` | Liveness probe |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::Uri;
use axum::response::IntoResponse;
use geosphere_types::StatusResponse;

use crate::error::ApiError;
use crate::state::AppState;

/// Acknowledgement message returned by `POST /api/insights/analyze`.
pub const ANALYSIS_COMPLETE: &str = "Analysis completed successfully";

// ---------------------------------------------------------------------------
// GET /api/terrain
// ---------------------------------------------------------------------------

/// Return the terrain model: dimensions, layer column, and drill points.
pub async fn get_terrain(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let terrain = state.terrain.generate_terrain();
    Ok(Json(serde_json::to_value(&terrain)?))
}

// ---------------------------------------------------------------------------
// GET /api/insights
// ---------------------------------------------------------------------------

/// Return the cached insight batch, generating it if none exists yet.
///
/// Repeated calls return the identical batch until the next analysis.
pub async fn list_insights(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let batch = state.insights.list_insights().await;
    Ok(Json(serde_json::to_value(batch.as_slice())?))
}

// ---------------------------------------------------------------------------
// POST /api/insights/analyze
// ---------------------------------------------------------------------------

/// Regenerate insights and replace the cache. Any request body is ignored.
pub async fn run_analysis(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let batch = state.insights.refresh_insights().await;
    tracing::debug!(count = batch.len(), "analysis run complete");
    Ok(Json(StatusResponse::success(ANALYSIS_COMPLETE)))
}

// ---------------------------------------------------------------------------
// GET /api/test
// ---------------------------------------------------------------------------

/// Liveness probe used by front-end proxies before forwarding requests.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// JSON 404 for paths no route matches.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
