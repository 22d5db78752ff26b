//! Axum router construction for the Geosphere API.
//!
//! Assembles all routes into a single [`Router`] with CORS, request tracing,
//! and panic-to-500 middleware.

use std::sync::Arc;

use axum::Router;
use axum::http::{Method, header};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::panic_response;
use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /api/terrain` -- terrain model
/// - `GET /api/insights` -- cached insight batch
/// - `POST /api/insights/analyze` -- regenerate insights
/// - `GET /api/test` -- liveness probe
///
/// Unknown paths get a JSON 404; a known path with the wrong method gets
/// 405. CORS allows any origin with the methods and headers the viewer
/// client uses.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/api/terrain", get(handlers::get_terrain))
        .route("/api/insights", get(handlers::list_insights))
        .route("/api/insights/analyze", post(handlers::run_analysis))
        .route("/api/test", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
