//! Configuration loading for the Geosphere server.
//!
//! The optional `geosphere-config.yaml` mirrors [`GeosphereConfig`]. Every
//! section has defaults, so a missing section (or an empty file) yields the
//! built-in site on `0.0.0.0:8080`.

use std::path::Path;

use geosphere_api::ServerConfig;
use geosphere_insights::InsightConfig;
use geosphere_terrain::TerrainCatalog;
use serde::Deserialize;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "geosphere-config.yaml";

/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "GEOSPHERE_CONFIG";

/// Environment variable that overrides `server.port`.
pub const PORT_ENV: &str = "PORT";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The `PORT` override is not a valid TCP port.
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        /// The rejected value.
        value: String,
        /// Why it did not parse as a `u16`.
        source: std::num::ParseIntError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeosphereConfig {
    /// Listen address.
    #[serde(default)]
    pub server: ServerConfig,

    /// Insight batch sizing and seeding.
    #[serde(default)]
    pub insights: InsightConfig,

    /// Site to serve. `None` uses the built-in mountain cross-section.
    #[serde(default)]
    pub terrain: Option<TerrainCatalog>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GeosphereConfig {
    /// Load configuration from a YAML file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidPort`] if `PORT` is set but malformed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as null.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply `PORT` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` does not parse as `u16`.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_port_override(std::env::var(PORT_ENV).ok().as_deref())
    }

    fn apply_port_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        if let Some(raw) = value {
            self.server.port = raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort {
                    value: raw.to_owned(),
                    source,
                })?;
        }
        Ok(())
    }

    /// The catalog to serve, falling back to the built-in site.
    pub fn catalog(&self) -> TerrainCatalog {
        self.terrain.clone().unwrap_or_default()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. `info`, `geosphere_api=debug`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GeosphereConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.insights, InsightConfig::default());
        assert!(config.terrain.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_empty_yaml() {
        let config = GeosphereConfig::parse("").unwrap();
        assert_eq!(config, GeosphereConfig::default());
    }

    #[test]
    fn parse_partial_yaml() {
        let yaml = "server:\n  port: 9000\ninsights:\n  seed: 7\n";
        let config = GeosphereConfig::parse(yaml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.insights.seed, Some(7));
        assert_eq!(config.insights.min_count, 3);
        assert_eq!(config.insights.max_count, 7);
    }

    #[test]
    fn parse_custom_terrain() {
        let yaml = r##"
terrain:
  name: "Test Basin"
  dimensions: { width: 100.0, height: 50.0, depth: 40.0 }
  layers:
    - name: "Sand"
      thickness: 40.0
      color: "#C2B280"
      material: sandstone
      opacity: 0.9
      metadata: { density: 2.2, porosity: 0.3, permeability: 0.5, age: "Recent", composition: "Quartz" }
"##;
        let config = GeosphereConfig::parse(yaml).unwrap();
        let catalog = config.catalog();
        assert_eq!(catalog.name, "Test Basin");
        assert_eq!(catalog.layers.len(), 1);
        assert!(catalog.drill_points.is_empty());
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn missing_terrain_uses_builtin_site() {
        let config = GeosphereConfig::default();
        assert_eq!(config.catalog(), TerrainCatalog::default());
    }

    #[test]
    fn parse_invalid_yaml() {
        let result = GeosphereConfig::parse("server: [not, a, map");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn port_override() {
        let mut config = GeosphereConfig::default();
        config.apply_port_override(Some("3001")).unwrap();
        assert_eq!(config.server.port, 3001);

        config.apply_port_override(None).unwrap();
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn port_override_rejects_garbage() {
        let mut config = GeosphereConfig::default();
        let result = config.apply_port_override(Some("eighty"));
        assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));

        let result = config.apply_port_override(Some("70000"));
        assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn invalid_port_keeps_parse_error() {
        use std::error::Error as _;

        let mut config = GeosphereConfig::default();
        let err = config.apply_port_override(Some("80a")).unwrap_err();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid PORT value \"80a\": "));
    }

    #[test]
    fn project_config_file_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../geosphere-config.yaml");
        let contents = std::fs::read_to_string(path).unwrap();
        let config = GeosphereConfig::parse(&contents).unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.catalog().validate().is_ok());
    }
}
