//! Synthetic terrain insights for Geosphere.
//!
//! There is no real analysis here: each insight is a random draw of type,
//! severity, layer, location, and confidence, with wording taken from a fixed
//! per-type table.
//!
//! # Modules
//!
//! - [`config`] -- [`InsightConfig`]: batch size range and RNG seed
//! - [`templates`] -- The per-type description/recommendation table
//! - [`generator`] -- [`generate_insights`] over an injected RNG and clock
//! - [`store`] -- [`InsightStore`], the lazily populated, swap-on-refresh cache
//! - [`error`] -- [`InsightError`]

pub mod config;
pub mod error;
pub mod generator;
pub mod store;
pub mod templates;

pub use config::{DEFAULT_MAX_INSIGHTS, DEFAULT_MIN_INSIGHTS, InsightConfig};
pub use error::InsightError;
pub use generator::{InsightContext, MAX_CONFIDENCE, MIN_CONFIDENCE, generate_insights};
pub use store::{InsightBatch, InsightStore};
pub use templates::{InsightTemplate, template};
