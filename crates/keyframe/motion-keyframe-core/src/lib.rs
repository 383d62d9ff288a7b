//! Motion Keyframe Core
//!
//! Per-kind channel layouts and the keyframe instances built on them:
//! typed accessors over a flat value array, Hermite tangent recomputation
//! from neighboring keys, rotation/euler continuity fix-ups and the record
//! codec used to persist keyframes. Curve sampling is left to the caller.

pub mod cell;
pub mod config;
pub mod continuity;
pub mod error;
pub mod math;
pub mod record;
pub mod schema;
pub mod transform;

// Re-exports for consumers (timeline tracks, editors)
pub use cell::{TangentData, ValueData};
pub use config::{
    BoneKeys, EasingType, KeyframeConfig, TangentPair, TangentToggle, TangentToggles, TangentType,
};
pub use continuity::{fixed_euler_angles, normalized_euler_angles};
pub use error::{KeyframeError, KeyframeResult};
pub use record::{
    record_from_json, record_to_json, records_from_json, records_to_json, SmoothBits,
    TransformRecord,
};
pub use schema::{
    registered_kinds, schema, CustomValueInfo, CustomValueType, Group, Schema, StrValueInfo,
    TangentSupport, TangentValueType, TransformType, MAX_CHANNELS,
};
pub use transform::{NoRestPose, RestPoseSource, TransformData};
