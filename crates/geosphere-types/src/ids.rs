//! Type-safe identifier wrappers around [`String`].
//!
//! Every entity in a terrain payload carries a strongly-typed ID so layer
//! references cannot be mixed up with insight or drill point IDs at compile
//! time. On the wire every ID is a plain string such as `layer-3`.
//!
//! IDs are assigned positionally by the generators (1-based), which keeps
//! them stable across requests for the same catalog.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around [`String`] with a fixed label prefix.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[serde(transparent)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub String);

        impl $name {
            /// Label prefix used by [`Self::numbered`].
            pub const PREFIX: &'static str = $prefix;

            /// Build the sequential identifier `<prefix>-<index>`.
            pub fn numbered(index: usize) -> Self {
                Self(format!("{}-{index}", Self::PREFIX))
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Identifier of a terrain site.
    TerrainId, "terrain"
}

define_id! {
    /// Identifier of a geological layer within a terrain column.
    LayerId, "layer"
}

define_id! {
    /// Identifier of a drill point on the terrain surface.
    DrillPointId, "drill"
}

define_id! {
    /// Identifier of a generated insight, unique within one batch.
    InsightId, "insight"
}
