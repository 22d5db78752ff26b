//! Small status bodies shared by acknowledgement and error responses.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::ResponseStatus;

/// `{"status": ..., "message": ...}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StatusResponse {
    /// Outcome marker.
    pub status: ResponseStatus,
    /// Human-readable detail.
    pub message: String,
}

impl StatusResponse {
    /// A `success` body with the given message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
        }
    }

    /// An `error` body with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
        }
    }
}
