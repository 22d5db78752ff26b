//! Insight generation settings.
//!
//! Loaded from the `insights` section of `geosphere-config.yaml`. Every field
//! has a default so the section may be omitted entirely.

use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::error::InsightError;

/// Fewest insights produced by one analysis run.
pub const DEFAULT_MIN_INSIGHTS: usize = 3;

/// Most insights produced by one analysis run.
pub const DEFAULT_MAX_INSIGHTS: usize = 7;

/// Count range and RNG seeding for insight generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InsightConfig {
    /// Inclusive lower bound on batch size.
    #[serde(default = "default_min_count")]
    pub min_count: usize,

    /// Inclusive upper bound on batch size.
    #[serde(default = "default_max_count")]
    pub max_count: usize,

    /// Fixed RNG seed for reproducible batches. OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

const fn default_min_count() -> usize {
    DEFAULT_MIN_INSIGHTS
}

const fn default_max_count() -> usize {
    DEFAULT_MAX_INSIGHTS
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            min_count: DEFAULT_MIN_INSIGHTS,
            max_count: DEFAULT_MAX_INSIGHTS,
            seed: None,
        }
    }
}

impl InsightConfig {
    /// Reject ranges that are inverted or admit an empty batch.
    pub const fn validate(&self) -> Result<(), InsightError> {
        if self.min_count == 0 || self.min_count > self.max_count {
            return Err(InsightError::InvalidCountRange {
                min: self.min_count,
                max: self.max_count,
            });
        }
        Ok(())
    }

    /// The batch size range as `min_count..=max_count`.
    pub const fn count_range(&self) -> RangeInclusive<usize> {
        self.min_count..=self.max_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_three_to_seven() {
        let config = InsightConfig::default();
        assert_eq!(config.count_range(), 3..=7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_range() {
        let config = InsightConfig {
            min_count: 8,
            max_count: 4,
            seed: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_minimum() {
        let config = InsightConfig {
            min_count: 0,
            max_count: 4,
            seed: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: InsightConfig = serde_yml::from_str("seed: 42").unwrap_or_default();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.min_count, DEFAULT_MIN_INSIGHTS);
        assert_eq!(config.max_count, DEFAULT_MAX_INSIGHTS);
    }
}
