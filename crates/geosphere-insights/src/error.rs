//! Error types for the `geosphere-insights` crate.

/// Errors raised while configuring insight generation.
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    /// The configured count range is empty or allows empty batches.
    #[error("invalid insight count range {min}..={max}: need 1 <= min <= max")]
    InvalidCountRange {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
}
