//! Error types for keyframe operations

use serde::{Deserialize, Serialize};

use crate::schema::TransformType;

/// Failures reported by the fallible (`try_*`) surface of the crate.
///
/// The non-fallible accessors log the same conditions and fall back to a
/// zero/default placeholder instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum KeyframeError {
    /// Named custom value is not declared by the kind's schema
    #[error("Custom value not found: {key} on {kind:?}")]
    UnknownCustomValue { kind: TransformType, key: String },

    /// Named string value is not declared by the kind's schema
    #[error("String value not found: {key} on {kind:?}")]
    UnknownStrValue { kind: TransformType, key: String },

    /// Tangent update called without a neighbouring keyframe
    #[error("Missing {side} keyframe for tangent update")]
    MissingNeighbor { side: String },

    /// Tangent update called with frame times that are not strictly increasing
    #[error("Frame delta must be positive: dt0={dt0}, dt1={dt1}")]
    NonPositiveFrameDelta { dt0: f32, dt1: f32 },

    /// Two instances do not share the same channel layout
    #[error("Schema mismatch: expected {expected:?}, got {actual:?}")]
    SchemaMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Kind has no registered schema
    #[error("No schema registered for {kind:?}")]
    NoSchema { kind: TransformType },

    /// Smooth flags only fit 64 channels
    #[error("{kind:?} declares {count} channels, more than the 64 a smooth mask can hold")]
    TooManyChannels { kind: TransformType, count: usize },

    /// Schema table references a slot outside its value array
    #[error("{kind:?} references slot {index} but only has {count}")]
    IndexOutOfRange {
        kind: TransformType,
        index: usize,
        count: usize,
    },

    /// Record JSON could not be read or written
    #[error("Record JSON error: {reason}")]
    Json { reason: String },
}

impl From<serde_json::Error> for KeyframeError {
    fn from(err: serde_json::Error) -> Self {
        KeyframeError::Json {
            reason: err.to_string(),
        }
    }
}

/// Result alias used across the crate.
pub type KeyframeResult<T> = Result<T, KeyframeError>;
