//! Geosphere API server binary.
//!
//! Serves mock terrain models and synthetic insights over HTTP.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `geosphere-config.yaml` (or `$GEOSPHERE_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Validate the terrain catalog and insight settings
//! 4. Serve the API until `Ctrl-C`

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use geosphere_api::{AppState, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, GeosphereConfig};

/// Where the configuration came from, logged once tracing is up.
enum ConfigSource {
    File(PathBuf),
    Defaults,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration. Logging depends on it, so nothing is logged yet.
    let (config, source) = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("geosphere-server starting");
    match &source {
        ConfigSource::File(path) => info!(path = %path.display(), "Configuration loaded"),
        ConfigSource::Defaults => info!("Config file not found, using defaults"),
    }

    // 3. Build shared state.
    let catalog = config.catalog();
    let site = catalog.name.clone();
    let state = AppState::build(catalog, &config.insights).context("invalid configuration")?;
    info!(
        site = %site,
        layers = state.terrain.catalog().layers.len(),
        drill_points = state.terrain.catalog().drill_points.len(),
        min_insights = config.insights.min_count,
        max_insights = config.insights.max_count,
        seeded = config.insights.seed.is_some(),
        "Terrain site ready"
    );

    // 4. Serve.
    start_server(&config.server, Arc::new(state))
        .await
        .context("API server failed")?;

    info!("geosphere-server stopped");
    Ok(())
}

/// Resolve and load the configuration file.
///
/// An explicit `$GEOSPHERE_CONFIG` must exist. The default path is optional
/// and falls back to built-in defaults (still honouring `PORT`).
fn load_config() -> anyhow::Result<(GeosphereConfig, ConfigSource)> {
    let (path, explicit) = std::env::var_os(CONFIG_PATH_ENV).map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        |path| (PathBuf::from(path), true),
    );

    if explicit || path.exists() {
        let config = GeosphereConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?;
        Ok((config, ConfigSource::File(path)))
    } else {
        let mut config = GeosphereConfig::default();
        config.apply_env_overrides()?;
        Ok((config, ConfigSource::Defaults))
    }
}
