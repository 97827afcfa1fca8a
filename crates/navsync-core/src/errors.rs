//! Error types for navbar synchronization.

use thiserror::Error;

/// Top-level error type for a synchronization run.
///
/// A missing target element is not an error; see
/// [`SyncOutcome::TargetMissing`](crate::SyncOutcome::TargetMissing).
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// The host rejected a custom property write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to set {property}: {reason}")]
pub struct SinkError {
    pub property: String,
    pub reason: String,
}

impl SinkError {
    pub fn new(property: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            reason: reason.into(),
        }
    }
}

/// Invalid synchronization options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Element id must not be empty")]
    EmptyElementId,

    #[error("Invalid custom property name '{name}': must start with \"--\"")]
    InvalidPropertyName { name: String },

    #[error("Width and height must publish to different properties, both are '{name}'")]
    DuplicatePropertyName { name: String },
}
