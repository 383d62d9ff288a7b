//! Channel layouts per transform kind.
//!
//! Every kind maps its semantic groups (position, rotation, color, ...) and
//! its named extras onto slots of one flat value array. Layouts are built
//! once on first use and validated before they are handed out.

mod builder;
mod catalog;
mod kind;

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::TangentToggle;
use crate::error::{KeyframeError, KeyframeResult};

pub use builder::SchemaBuilder;
pub use kind::TransformType;

/// Largest channel count a smooth-flag mask can describe.
pub const MAX_CHANNELS: usize = 64;

/// Semantic slot groups. Vector groups hold three slots, rotations four,
/// colors three or four.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    Position,
    SubPosition,
    Rotation,
    SubRotation,
    EulerAngles,
    SubEulerAngles,
    Scale,
    Color,
    SubColor,
}

impl Group {
    pub const ALL: [Group; 9] = [
        Group::Position,
        Group::SubPosition,
        Group::Rotation,
        Group::SubRotation,
        Group::EulerAngles,
        Group::SubEulerAngles,
        Group::Scale,
        Group::Color,
        Group::SubColor,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

/// How a custom value is presented by an editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomValueType {
    FloatValue,
    FloatSlider,
    Int,
    Bool,
}

/// Named scalar extra.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomValueInfo {
    pub key: &'static str,
    pub index: usize,
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default_value: f32,
    /// `max` follows [`crate::KeyframeConfig::position_range`].
    pub max_from_position_range: bool,
}

impl CustomValueInfo {
    pub fn value_type(&self) -> CustomValueType {
        if self.min == 0.0 && self.max == 1.0 && self.step == 1.0 {
            CustomValueType::Bool
        } else if self.step == 1.0 {
            CustomValueType::Int
        } else if self.step > 0.0 {
            CustomValueType::FloatSlider
        } else {
            CustomValueType::FloatValue
        }
    }
}

/// Named string extra.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StrValueInfo {
    pub key: &'static str,
    pub index: usize,
    pub name: &'static str,
}

/// Whether a kind interpolates its channels through Hermite tangents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TangentSupport {
    None,
    Always,
    /// Chosen by the timeline config; easing is used whenever tangents are off.
    Toggle(TangentToggle),
}

/// Values `reset` restores.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialValues {
    pub position: [f32; 3],
    pub sub_position: [f32; 3],
    pub rotation: [f32; 4],
    pub sub_rotation: [f32; 4],
    pub euler_angles: [f32; 3],
    pub sub_euler_angles: [f32; 3],
    pub scale: [f32; 3],
    pub color: [f32; 4],
    pub sub_color: [f32; 4],
    pub visible: bool,
}

impl Default for InitialValues {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            sub_position: [0.0; 3],
            rotation: crate::math::IDENTITY_QUAT,
            sub_rotation: crate::math::IDENTITY_QUAT,
            euler_angles: [0.0; 3],
            sub_euler_angles: [0.0; 3],
            scale: [1.0; 3],
            color: [1.0; 4],
            sub_color: [1.0; 4],
            visible: true,
        }
    }
}

/// Coarse channel selector used by tangent editing tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TangentValueType {
    X,
    Y,
    Z,
    RX,
    RY,
    RZ,
    RW,
    Move,
    Rotation,
    SX,
    SY,
    SZ,
    Scale,
    All,
}

/// Channel layout of one transform kind.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) kind: TransformType,
    pub(crate) value_count: usize,
    pub(crate) str_value_count: usize,
    pub(crate) groups: [Vec<usize>; 9],
    pub(crate) visible: Option<usize>,
    pub(crate) easing: Option<usize>,
    pub(crate) tangent: TangentSupport,
    pub(crate) tangent_indices: Vec<usize>,
    pub(crate) custom_values: Vec<CustomValueInfo>,
    pub(crate) custom_lookup: HashMap<&'static str, usize>,
    pub(crate) str_values: Vec<StrValueInfo>,
    pub(crate) str_lookup: HashMap<&'static str, usize>,
    pub(crate) initial: InitialValues,
    pub(crate) is_global: bool,
    pub(crate) uses_rest_pose: bool,
    pub(crate) hidden_by_bone_key: bool,
    pub(crate) fix_rotation: bool,
}

impl Schema {
    #[inline]
    pub fn kind(&self) -> TransformType {
        self.kind
    }

    #[inline]
    pub fn value_count(&self) -> usize {
        self.value_count
    }

    #[inline]
    pub fn str_value_count(&self) -> usize {
        self.str_value_count
    }

    /// Slot indices of a group; empty when the kind lacks it.
    #[inline]
    pub fn group(&self, group: Group) -> &[usize] {
        &self.groups[group.slot()]
    }

    #[inline]
    pub fn has_group(&self, group: Group) -> bool {
        !self.group(group).is_empty()
    }

    #[inline]
    pub fn visible_index(&self) -> Option<usize> {
        self.visible
    }

    #[inline]
    pub fn easing_index(&self) -> Option<usize> {
        self.easing
    }

    #[inline]
    pub fn tangent_support(&self) -> TangentSupport {
        self.tangent
    }

    /// Ordered slots that carry tangents when tangents are enabled.
    #[inline]
    pub fn tangent_indices(&self) -> &[usize] {
        &self.tangent_indices
    }

    /// Position, rotation, euler and scale slots, in that order.
    pub fn base_indices(&self) -> Vec<usize> {
        [Group::Position, Group::Rotation, Group::EulerAngles, Group::Scale]
            .iter()
            .flat_map(|g| self.group(*g).iter().copied())
            .collect()
    }

    #[inline]
    pub fn initial(&self) -> &InitialValues {
        &self.initial
    }

    #[inline]
    pub fn is_global(&self) -> bool {
        self.is_global
    }

    /// Initial position and orientation come from the host skeleton.
    #[inline]
    pub fn uses_rest_pose(&self) -> bool {
        self.uses_rest_pose
    }

    /// Whether neighboring keys are made continuous by
    /// [`crate::TransformData::fix_rotation`] and
    /// [`crate::TransformData::fix_euler_angles`].
    #[inline]
    pub fn is_fix_rotation(&self) -> bool {
        self.fix_rotation
    }

    pub fn custom_values(&self) -> &[CustomValueInfo] {
        &self.custom_values
    }

    pub fn custom_value_info(&self, key: &str) -> Option<&CustomValueInfo> {
        self.custom_lookup
            .get(key)
            .map(|&i| &self.custom_values[i])
    }

    pub fn str_values(&self) -> &[StrValueInfo] {
        &self.str_values
    }

    pub fn str_value_info(&self, key: &str) -> Option<&StrValueInfo> {
        self.str_lookup.get(key).map(|&i| &self.str_values[i])
    }

    /// Check every referenced slot against the declared counts.
    pub fn validate(&self) -> KeyframeResult<()> {
        if self.value_count > MAX_CHANNELS {
            return Err(KeyframeError::TooManyChannels {
                kind: self.kind,
                count: self.value_count,
            });
        }

        let value_slots = self
            .groups
            .iter()
            .flatten()
            .chain(self.visible.iter())
            .chain(self.easing.iter())
            .chain(self.tangent_indices.iter())
            .chain(self.custom_values.iter().map(|info| &info.index));
        for &index in value_slots {
            if index >= self.value_count {
                return Err(KeyframeError::IndexOutOfRange {
                    kind: self.kind,
                    index,
                    count: self.value_count,
                });
            }
        }

        for info in &self.str_values {
            if info.index >= self.str_value_count {
                return Err(KeyframeError::IndexOutOfRange {
                    kind: self.kind,
                    index: info.index,
                    count: self.str_value_count,
                });
            }
        }
        Ok(())
    }
}

static REGISTRY: Lazy<HashMap<TransformType, Schema>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for kind in TransformType::ALL {
        let Some(schema) = catalog::build(kind) else {
            continue;
        };
        match schema.validate() {
            Ok(()) => {
                map.insert(kind, schema);
            }
            Err(err) => log::error!("dropping schema for {kind:?}: {err}"),
        }
    }
    map
});

/// Schema for `kind`, if the kind can be instantiated.
pub fn schema(kind: TransformType) -> Option<&'static Schema> {
    REGISTRY.get(&kind)
}

/// Kinds with a registered schema, in tag order.
pub fn registered_kinds() -> Vec<TransformType> {
    let mut kinds: Vec<_> = REGISTRY.keys().copied().collect();
    kinds.sort();
    kinds
}
