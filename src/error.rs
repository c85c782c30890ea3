//! Error types
//!
//! Every error here is a precondition violation surfaced at construction.
//! Nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Degenerate entity geometry rejected at creation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{entity} radius must be positive, got {radius}")]
    NonPositiveRadius { entity: &'static str, radius: f32 },

    #[error("wall {dimension} must be positive, got {value}")]
    NonPositiveExtent {
        dimension: &'static str,
        value: f32,
    },

    #[error("{what} must be finite")]
    NonFinite { what: &'static str },
}

/// Invalid or unreadable game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("failed to read config {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config JSON")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
