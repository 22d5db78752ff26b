//! Enumeration types carried in terrain and insight payloads.
//!
//! Every enum serializes to the exact lower-case literal the viewer client
//! expects. No other values are ever produced.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Insight classification
// ---------------------------------------------------------------------------

/// The kind of feature an insight reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum InsightType {
    /// Material that does not match the surrounding formation.
    Anomaly,
    /// Signatures of an exploitable deposit.
    PotentialResource,
    /// Fracturing or other loss of rock integrity.
    StructuralWeakness,
    /// Density change between or within formations.
    DensityVariation,
    /// Discontinuity running across several layers.
    FaultLine,
}

impl InsightType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Anomaly,
        Self::PotentialResource,
        Self::StructuralWeakness,
        Self::DensityVariation,
        Self::FaultLine,
    ];
}

/// How urgently an insight should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Severity {
    /// Informational.
    Low,
    /// Worth scheduling follow-up work.
    Medium,
    /// Needs attention before any site work.
    High,
}

impl Severity {
    /// Every variant, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];
}

// ---------------------------------------------------------------------------
// Layer material
// ---------------------------------------------------------------------------

/// Dominant material of a geological layer, used by the client for shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Material {
    /// Unconsolidated surface soil.
    Soil,
    /// Fine-grained clay.
    Clay,
    /// Cemented sand.
    Sandstone,
    /// Carbonate rock.
    Limestone,
    /// Laminated mudrock.
    Shale,
    /// Crystalline igneous basement.
    Granite,
}

// ---------------------------------------------------------------------------
// Response status
// ---------------------------------------------------------------------------

/// Outcome marker in acknowledgement and error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ResponseStatus {
    /// The request completed.
    Success,
    /// The request failed; `message` says why.
    Error,
}
