//! Fixed per-type description and recommendation text.
//!
//! This table is the only source of insight wording. An insight's text is a
//! pure function of its [`InsightType`].

use geosphere_types::InsightType;

/// Text attached to every insight of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightTemplate {
    /// What was detected.
    pub description: &'static str,
    /// Suggested follow-up.
    pub recommendation: &'static str,
}

/// Look up the template for `kind`.
pub const fn template(kind: InsightType) -> InsightTemplate {
    match kind {
        InsightType::Anomaly => InsightTemplate {
            description: "Unexpected material composition detected, potential anomaly",
            recommendation: "Further analysis recommended to identify origin",
        },
        InsightType::PotentialResource => InsightTemplate {
            description: "High porosity zone detected with potential resource signatures",
            recommendation: "Recommend detailed survey to confirm resource potential",
        },
        InsightType::StructuralWeakness => InsightTemplate {
            description: "Fracture pattern detected with potential for structural issues",
            recommendation: "Monitor for instability and consider reinforcement",
        },
        InsightType::DensityVariation => InsightTemplate {
            description: "Unusual density variation detected, potential mineral deposit",
            recommendation: "Sample for mineral content and assess economic viability",
        },
        InsightType::FaultLine => InsightTemplate {
            description: "Discontinuity detected across layers indicating potential fault line",
            recommendation: "Consider fault implications for construction and stability",
        },
    }
}
