//! Synthetic insight records returned by `GET /api/insights`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{InsightType, Severity};
use crate::geometry::Position;
use crate::ids::{InsightId, LayerId};

/// One generated observation about the terrain.
///
/// `description` and `recommendation` are always taken from the fixed
/// per-type template table; they never vary independently of `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Insight {
    /// Identifier, unique within one generated batch.
    pub id: InsightId,
    /// Generation instant, serialized as RFC 3339.
    pub timestamp: DateTime<Utc>,
    /// Kind of feature reported.
    #[serde(rename = "type")]
    pub kind: InsightType,
    /// Where the feature was observed.
    pub location: Position,
    /// Layer the feature is attributed to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub layer_id: Option<LayerId>,
    /// Confidence score in `0.5..=1.0`.
    pub confidence: f64,
    /// Templated description.
    pub description: String,
    /// Templated follow-up action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub recommendation: Option<String>,
    /// Severity level.
    pub severity: Severity,
}
