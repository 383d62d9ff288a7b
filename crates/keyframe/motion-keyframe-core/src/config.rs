//! Editor-level defaults consumed by transform instances.
//!
//! Nothing here is global: a [`KeyframeConfig`] is passed to
//! [`crate::TransformData::initialize`] and [`crate::TransformData::init_tangent`]
//! by whoever owns the timeline.

use serde::{Deserialize, Serialize};

use crate::error::KeyframeResult;

/// Tangent preset applied to freshly created keyframes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TangentType {
    EaseInOut,
    EaseIn,
    EaseOut,
    Linear,
    #[default]
    Smooth,
}

/// Seed for one cell's in/out tangents.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TangentPair {
    pub in_tangent: f32,
    pub out_tangent: f32,
    pub is_smooth: bool,
}

impl TangentType {
    pub const ALL: [TangentType; 5] = [
        TangentType::EaseInOut,
        TangentType::EaseIn,
        TangentType::EaseOut,
        TangentType::Linear,
        TangentType::Smooth,
    ];

    /// Normalized tangents a new keyframe starts with for this preset.
    pub fn default_pair(self) -> TangentPair {
        let (in_tangent, out_tangent, is_smooth) = match self {
            TangentType::EaseInOut => (0.0, 0.0, false),
            TangentType::EaseIn => (0.0, 1.0, false),
            TangentType::EaseOut => (1.0, 0.0, false),
            TangentType::Linear => (1.0, 1.0, false),
            TangentType::Smooth => (0.0, 0.0, true),
        };
        TangentPair {
            in_tangent,
            out_tangent,
            is_smooth,
        }
    }
}

/// Easing curve id stored in a kind's easing slot. Discriminants are the
/// integers written to the value array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum EasingType {
    Linear = 0,
    SineIn,
    SineOut,
    #[default]
    SineInOut,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    ExpIn,
    ExpOut,
    ExpInOut,
    CircIn,
    CircOut,
    CircInOut,
}

impl EasingType {
    pub const ALL: [EasingType; 22] = [
        EasingType::Linear,
        EasingType::SineIn,
        EasingType::SineOut,
        EasingType::SineInOut,
        EasingType::QuadIn,
        EasingType::QuadOut,
        EasingType::QuadInOut,
        EasingType::CubicIn,
        EasingType::CubicOut,
        EasingType::CubicInOut,
        EasingType::QuartIn,
        EasingType::QuartOut,
        EasingType::QuartInOut,
        EasingType::QuintIn,
        EasingType::QuintOut,
        EasingType::QuintInOut,
        EasingType::ExpIn,
        EasingType::ExpOut,
        EasingType::ExpInOut,
        EasingType::CircIn,
        EasingType::CircOut,
        EasingType::CircInOut,
    ];

    #[inline]
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Map a stored slot value back to an easing id.
    pub fn from_index(index: i32) -> Option<EasingType> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Per-kind switches selecting tangent interpolation over easing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TangentToggles {
    pub camera: bool,
    pub light: bool,
    pub motion: bool,
    pub model_shape_key: bool,
}

/// Selects one of the [`TangentToggles`] switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TangentToggle {
    Camera,
    Light,
    Motion,
    ModelShapeKey,
}

impl TangentToggles {
    pub fn is_enabled(&self, toggle: TangentToggle) -> bool {
        match toggle {
            TangentToggle::Camera => self.camera,
            TangentToggle::Light => self.light,
            TangentToggle::Motion => self.motion,
            TangentToggle::ModelShapeKey => self.model_shape_key,
        }
    }
}

/// Which head and bust bones keep their own rotation keys. Rotation
/// keyframes for a disabled bone are hidden from the timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoneKeys {
    pub head: bool,
    pub bust_left: bool,
    pub bust_right: bool,
}

/// Defaults for tangent seeding, easing and slider ranges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyframeConfig {
    pub default_tangent_type: TangentType,
    pub default_easing: EasingType,
    pub tangent_toggles: TangentToggles,
    pub bone_keys: BoneKeys,
    /// Upper bound of the depth-of-field focal length slider.
    pub position_range: f32,
}

impl Default for KeyframeConfig {
    fn default() -> Self {
        Self {
            default_tangent_type: TangentType::Smooth,
            default_easing: EasingType::SineInOut,
            tangent_toggles: TangentToggles::default(),
            bone_keys: BoneKeys::default(),
            position_range: 5.0,
        }
    }
}

impl KeyframeConfig {
    pub fn from_json(json: &str) -> KeyframeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> KeyframeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[inline]
    pub fn default_tangent_pair(&self) -> TangentPair {
        self.default_tangent_type.default_pair()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_seed_expected_pairs() {
        let ease_in = TangentType::EaseIn.default_pair();
        assert_eq!((ease_in.in_tangent, ease_in.out_tangent), (0.0, 1.0));
        let ease_out = TangentType::EaseOut.default_pair();
        assert_eq!((ease_out.in_tangent, ease_out.out_tangent), (1.0, 0.0));
        assert!(TangentType::Smooth.default_pair().is_smooth);
        assert!(!TangentType::Linear.default_pair().is_smooth);
    }

    #[test]
    fn easing_index_round_trips() {
        for easing in EasingType::ALL {
            assert_eq!(EasingType::from_index(easing.index()), Some(easing));
        }
        assert_eq!(EasingType::from_index(-1), None);
        assert_eq!(EasingType::from_index(22), None);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = KeyframeConfig::from_json(r#"{ "tangentToggles": { "camera": true } }"#)
            .expect("config json");
        assert!(cfg.tangent_toggles.camera);
        assert!(!cfg.tangent_toggles.light);
        assert_eq!(cfg.bone_keys, BoneKeys::default());
        assert_eq!(cfg.default_tangent_type, TangentType::Smooth);
        assert_eq!(cfg.default_easing, EasingType::SineInOut);
        assert_eq!(cfg.position_range, 5.0);
    }
}
