//! Insight Generator.
//!
//! Draws a batch of synthetic insights from an injected RNG. Everything that
//! varies between batches comes from the RNG and the supplied instant, so a
//! seeded [`StdRng`](rand::rngs::StdRng) plus a fixed `now` reproduces a
//! batch exactly.
//!
//! Per insight, in order: type, severity, layer, `x`, `y`, `z`, confidence.
//! Each is drawn uniformly and independently. Locations fall inside the
//! terrain bounding box: `x` in `[0, width]`, `y` in `[0, height]`,
//! `z` in `[0, depth]`.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use geosphere_types::{
    Dimensions, Insight, InsightId, InsightType, LayerId, Position, Severity, TerrainData,
};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::templates::template;

/// Lowest confidence a generated insight can carry.
pub const MIN_CONFIDENCE: f64 = 0.5;

/// Highest confidence a generated insight can carry.
pub const MAX_CONFIDENCE: f64 = 1.0;

/// The parts of a terrain model that insight generation samples from.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightContext {
    /// Bounding box locations are drawn from.
    pub bounds: Dimensions,
    /// Layers an insight may be attributed to.
    pub layer_ids: Vec<LayerId>,
}

impl InsightContext {
    /// Capture bounds and layer identifiers from a terrain model.
    pub fn from_terrain(terrain: &TerrainData) -> Self {
        Self {
            bounds: terrain.dimensions,
            layer_ids: terrain.layer_ids(),
        }
    }
}

/// Generate one batch of insights.
///
/// The batch size is drawn uniformly from `count_range`; an empty range
/// yields an empty batch. IDs run `insight-1`, `insight-2`, ... within the
/// batch. `layerId` is omitted when the context has no layers.
pub fn generate_insights(
    rng: &mut impl Rng,
    count_range: RangeInclusive<usize>,
    context: &InsightContext,
    now: DateTime<Utc>,
) -> Vec<Insight> {
    if count_range.is_empty() {
        return Vec::new();
    }
    let count = rng.random_range(count_range);

    (1..=count)
        .map(|index| generate_one(rng, index, context, now))
        .collect()
}

fn generate_one(
    rng: &mut impl Rng,
    index: usize,
    context: &InsightContext,
    now: DateTime<Utc>,
) -> Insight {
    let kind = InsightType::ALL
        .choose(rng)
        .copied()
        .unwrap_or(InsightType::Anomaly);
    let severity = Severity::ALL.choose(rng).copied().unwrap_or(Severity::Low);
    let layer_id = context.layer_ids.choose(rng).cloned();
    let location = Position {
        x: sample_axis(rng, context.bounds.width),
        y: sample_axis(rng, context.bounds.height),
        z: sample_axis(rng, context.bounds.depth),
    };
    let confidence = rng.random_range(MIN_CONFIDENCE..=MAX_CONFIDENCE);
    let text = template(kind);

    Insight {
        id: InsightId::numbered(index),
        timestamp: now,
        kind,
        location,
        layer_id,
        confidence,
        description: text.description.to_owned(),
        recommendation: Some(text.recommendation.to_owned()),
        severity,
    }
}

/// Uniform in `[0, extent]`; degenerate extents collapse to the origin.
fn sample_axis(rng: &mut impl Rng, extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        rng.random_range(0.0..=extent)
    } else {
        0.0
    }
}
