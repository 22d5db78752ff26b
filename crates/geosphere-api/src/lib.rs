//! HTTP API for the Geosphere terrain viewer.
//!
//! This crate provides an Axum server exposing:
//!
//! - **`GET /api/terrain`** -- the layered terrain model with drill points
//! - **`GET /api/insights`** -- the current batch of synthetic insights
//! - **`POST /api/insights/analyze`** -- regenerate the insight batch
//! - **`GET /api/test`** -- liveness probe
//!
//! # Architecture
//!
//! Handlers are stateless adapters over [`AppState`], which owns the
//! [`TerrainGenerator`](geosphere_terrain::TerrainGenerator) and the
//! [`InsightStore`](geosphere_insights::InsightStore). The store is the only
//! mutable state shared across requests and does its own locking.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::{AppState, StateError};
