use hashbrown::HashMap;

use super::{
    CustomValueInfo, Group, InitialValues, Schema, StrValueInfo, TangentSupport, TransformType,
};
use crate::config::TangentToggle;

/// Which slots tangents apply to.
#[derive(Clone, Debug)]
enum TangentSet {
    All,
    Base,
    Groups(Vec<Group>, Vec<usize>),
}

/// Fluent construction of a [`Schema`].
pub struct SchemaBuilder {
    kind: TransformType,
    value_count: usize,
    str_value_count: usize,
    groups: [Vec<usize>; 9],
    visible: Option<usize>,
    easing: Option<usize>,
    tangent: TangentSupport,
    tangent_set: TangentSet,
    custom_values: Vec<CustomValueInfo>,
    str_values: Vec<StrValueInfo>,
    initial: InitialValues,
    is_global: bool,
    uses_rest_pose: bool,
    hidden_by_bone_key: bool,
    fix_rotation: bool,
}

impl SchemaBuilder {
    pub fn new(kind: TransformType, value_count: usize) -> Self {
        Self {
            kind,
            value_count,
            str_value_count: 0,
            groups: Default::default(),
            visible: None,
            easing: None,
            tangent: TangentSupport::None,
            tangent_set: TangentSet::All,
            custom_values: Vec::new(),
            str_values: Vec::new(),
            initial: InitialValues::default(),
            is_global: false,
            uses_rest_pose: false,
            hidden_by_bone_key: false,
            fix_rotation: true,
        }
    }

    pub fn str_value_count(mut self, count: usize) -> Self {
        self.str_value_count = count;
        self
    }

    fn group(mut self, group: Group, slots: &[usize]) -> Self {
        self.groups[group as usize] = slots.to_vec();
        self
    }

    pub fn position(self, slots: [usize; 3]) -> Self {
        self.group(Group::Position, &slots)
    }

    pub fn sub_position(self, slots: [usize; 3]) -> Self {
        self.group(Group::SubPosition, &slots)
    }

    pub fn rotation(self, slots: [usize; 4]) -> Self {
        self.group(Group::Rotation, &slots)
    }

    pub fn euler_angles(self, slots: [usize; 3]) -> Self {
        self.group(Group::EulerAngles, &slots)
    }

    pub fn sub_euler_angles(self, slots: [usize; 3]) -> Self {
        self.group(Group::SubEulerAngles, &slots)
    }

    pub fn scale(self, slots: [usize; 3]) -> Self {
        self.group(Group::Scale, &slots)
    }

    /// Three slots (RGB) or four (RGBA).
    pub fn color(self, slots: &[usize]) -> Self {
        self.group(Group::Color, slots)
    }

    pub fn sub_color(self, slots: &[usize]) -> Self {
        self.group(Group::SubColor, slots)
    }

    pub fn visible(mut self, slot: usize) -> Self {
        self.visible = Some(slot);
        self
    }

    pub fn easing(mut self, slot: usize) -> Self {
        self.easing = Some(slot);
        self
    }

    /// Tangents on every slot.
    pub fn tangents_all(mut self) -> Self {
        self.tangent = TangentSupport::Always;
        self.tangent_set = TangentSet::All;
        self
    }

    /// Tangents on position, rotation, euler and scale.
    pub fn tangents_base(mut self) -> Self {
        self.tangent = TangentSupport::Always;
        self.tangent_set = TangentSet::Base;
        self
    }

    /// Tangents on the listed groups followed by the listed extra slots.
    pub fn tangents(mut self, groups: &[Group], extra: &[usize]) -> Self {
        self.tangent = TangentSupport::Always;
        self.tangent_set = TangentSet::Groups(groups.to_vec(), extra.to_vec());
        self
    }

    /// Makes tangent support config driven. Call after choosing the slot set.
    pub fn toggled_by(mut self, toggle: TangentToggle) -> Self {
        self.tangent = TangentSupport::Toggle(toggle);
        self
    }

    pub fn custom(mut self, info: CustomValueInfo) -> Self {
        self.custom_values.push(info);
        self
    }

    pub fn customs(mut self, infos: impl IntoIterator<Item = CustomValueInfo>) -> Self {
        self.custom_values.extend(infos);
        self
    }

    pub fn str_value(mut self, key: &'static str, index: usize, name: &'static str) -> Self {
        self.str_values.push(StrValueInfo { key, index, name });
        self
    }

    pub fn initial(mut self, edit: impl FnOnce(&mut InitialValues)) -> Self {
        edit(&mut self.initial);
        self
    }

    pub fn global(mut self) -> Self {
        self.is_global = true;
        self
    }

    pub fn rest_pose(mut self) -> Self {
        self.uses_rest_pose = true;
        self
    }

    pub fn hidden_by_bone_key(mut self) -> Self {
        self.hidden_by_bone_key = true;
        self
    }

    /// Keys keep their authored rotation; no short-arc or unwrap fix-up.
    pub fn keep_rotation(mut self) -> Self {
        self.fix_rotation = false;
        self
    }

    pub fn build(self) -> Schema {
        let tangent_indices = match (&self.tangent, &self.tangent_set) {
            (TangentSupport::None, _) => Vec::new(),
            (_, TangentSet::All) => (0..self.value_count).collect(),
            (_, TangentSet::Base) => [
                Group::Position,
                Group::Rotation,
                Group::EulerAngles,
                Group::Scale,
            ]
            .iter()
            .flat_map(|g| self.groups[*g as usize].iter().copied())
            .collect(),
            (_, TangentSet::Groups(groups, extra)) => groups
                .iter()
                .flat_map(|g| self.groups[*g as usize].iter().copied())
                .chain(extra.iter().copied())
                .collect(),
        };

        let custom_lookup: HashMap<_, _> = self
            .custom_values
            .iter()
            .enumerate()
            .map(|(i, info)| (info.key, i))
            .collect();
        let str_lookup: HashMap<_, _> = self
            .str_values
            .iter()
            .enumerate()
            .map(|(i, info)| (info.key, i))
            .collect();

        Schema {
            kind: self.kind,
            value_count: self.value_count,
            str_value_count: self.str_value_count,
            groups: self.groups,
            visible: self.visible,
            easing: self.easing,
            tangent: self.tangent,
            tangent_indices,
            custom_values: self.custom_values,
            custom_lookup,
            str_values: self.str_values,
            str_lookup,
            initial: self.initial,
            is_global: self.is_global,
            uses_rest_pose: self.uses_rest_pose,
            hidden_by_bone_key: self.hidden_by_bone_key,
            fix_rotation: self.fix_rotation,
        }
    }
}

/// Custom value with a slider range.
pub(crate) const fn ranged(
    key: &'static str,
    index: usize,
    name: &'static str,
    min: f32,
    max: f32,
    step: f32,
    default_value: f32,
) -> CustomValueInfo {
    CustomValueInfo {
        key,
        index,
        name,
        min,
        max,
        step,
        default_value,
        max_from_position_range: false,
    }
}

/// Custom value edited as a free float field.
pub(crate) const fn plain(
    key: &'static str,
    index: usize,
    name: &'static str,
    default_value: f32,
) -> CustomValueInfo {
    ranged(key, index, name, 0.0, 0.0, 0.0, default_value)
}
