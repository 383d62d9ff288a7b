//! Keyframe transform instance.
//!
//! A [`TransformData`] owns one keyframe's flat value array and string
//! slots. Its kind's [`Schema`] decides what the slots mean; every typed
//! accessor here is a view over those slots.

use std::fmt;

use crate::cell::{TangentData, ValueData};
use crate::config::{KeyframeConfig, TangentPair};
use crate::error::{KeyframeError, KeyframeResult};
use crate::math::{euler_deg_from_quat, quat_from_euler_deg, IDENTITY_QUAT};
use crate::schema::{
    self, CustomValueInfo, Group, Schema, TangentSupport, TangentValueType, TransformType,
};

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Host skeleton lookup for kinds whose initial pose is the bone's rest
/// pose (root, bone rotations, extended bones, model bones).
pub trait RestPoseSource {
    fn rest_position(&self, kind: TransformType, name: &str) -> Option<[f32; 3]>;
    fn rest_euler_angles(&self, kind: TransformType, name: &str) -> Option<[f32; 3]>;
}

/// Rest-pose source with no skeleton; schema defaults apply.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRestPose;

impl RestPoseSource for NoRestPose {
    fn rest_position(&self, _kind: TransformType, _name: &str) -> Option<[f32; 3]> {
        None
    }

    fn rest_euler_angles(&self, _kind: TransformType, _name: &str) -> Option<[f32; 3]> {
        None
    }
}

/// Bone names whose rotation keys can be switched off by the timeline.
const HEAD_BONE: &str = "Bip01 Head";
const BUST_L_BONE: &str = "Mune_L";
const BUST_R_BONE: &str = "Mune_R";

#[derive(Clone, Debug)]
pub struct TransformData {
    pub(crate) name: String,
    pub(crate) schema: &'static Schema,
    pub(crate) values: Vec<ValueData>,
    pub(crate) str_values: Vec<String>,
    tangent_enabled: bool,
    hidden: bool,
    position_range: f32,
}

impl TransformData {
    /// Uninitialized instance of `kind`; call [`initialize`](Self::initialize)
    /// before use.
    pub fn new(kind: TransformType) -> KeyframeResult<Self> {
        let schema = schema::schema(kind).ok_or(KeyframeError::NoSchema { kind })?;
        Ok(Self {
            name: String::new(),
            schema,
            values: Vec::new(),
            str_values: Vec::new(),
            tangent_enabled: matches!(schema.tangent_support(), TangentSupport::Always),
            hidden: false,
            position_range: KeyframeConfig::default().position_range,
        })
    }

    /// Create and initialize in one step.
    pub fn with_name(
        kind: TransformType,
        name: impl Into<String>,
        config: &KeyframeConfig,
    ) -> KeyframeResult<Self> {
        let mut data = Self::new(kind)?;
        data.initialize(name, config);
        Ok(data)
    }

    /// Name the instance and size its slots to the schema.
    ///
    /// Slot arrays are replaced, never resized, when their length differs
    /// from the schema; fresh cells take their tangents from `config`.
    pub fn initialize(&mut self, name: impl Into<String>, config: &KeyframeConfig) {
        self.name = name.into();

        self.tangent_enabled = match self.schema.tangent_support() {
            TangentSupport::None => false,
            TangentSupport::Always => true,
            TangentSupport::Toggle(toggle) => config.tangent_toggles.is_enabled(toggle),
        };
        self.hidden = self.schema.hidden_by_bone_key
            && match self.name.as_str() {
                HEAD_BONE => !config.bone_keys.head,
                BUST_L_BONE => !config.bone_keys.bust_left,
                BUST_R_BONE => !config.bone_keys.bust_right,
                _ => false,
            };
        self.position_range = config.position_range;

        let count = self.schema.value_count();
        if self.values.len() != count {
            let seed = ValueData::seeded(config.default_tangent_pair());
            self.values = vec![seed; count];
        }

        let str_count = self.schema.str_value_count();
        if self.str_values.len() != str_count {
            self.str_values = vec![String::new(); str_count];
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> TransformType {
        self.schema.kind()
    }

    #[inline]
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    #[inline]
    pub fn values(&self) -> &[ValueData] {
        &self.values
    }

    #[inline]
    pub fn values_mut(&mut self) -> &mut [ValueData] {
        &mut self.values
    }

    #[inline]
    pub fn str_values(&self) -> &[String] {
        &self.str_values
    }

    #[inline]
    pub fn value_count(&self) -> usize {
        self.schema.value_count()
    }

    #[inline]
    pub fn str_value_count(&self) -> usize {
        self.schema.str_value_count()
    }

    // ---- capabilities ----

    pub fn has_position(&self) -> bool {
        self.schema.has_group(Group::Position)
    }

    pub fn has_sub_position(&self) -> bool {
        self.schema.has_group(Group::SubPosition)
    }

    pub fn has_rotation(&self) -> bool {
        self.schema.has_group(Group::Rotation)
    }

    pub fn has_sub_rotation(&self) -> bool {
        self.schema.has_group(Group::SubRotation)
    }

    pub fn has_euler_angles(&self) -> bool {
        self.schema.has_group(Group::EulerAngles)
    }

    pub fn has_sub_euler_angles(&self) -> bool {
        self.schema.has_group(Group::SubEulerAngles)
    }

    pub fn has_scale(&self) -> bool {
        self.schema.has_group(Group::Scale)
    }

    pub fn has_color(&self) -> bool {
        self.schema.has_group(Group::Color)
    }

    pub fn has_sub_color(&self) -> bool {
        self.schema.has_group(Group::SubColor)
    }

    pub fn has_visible(&self) -> bool {
        self.schema.visible_index().is_some()
    }

    /// Toggled kinds drop easing while tangents are on.
    pub fn has_easing(&self) -> bool {
        self.schema.easing_index().is_some()
            && !(matches!(self.schema.tangent_support(), TangentSupport::Toggle(_))
                && self.tangent_enabled)
    }

    pub fn has_tangent(&self) -> bool {
        self.tangent_enabled
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_global(&self) -> bool {
        self.schema.is_global()
    }

    // ---- slot plumbing ----

    fn slot(&self, index: usize) -> f32 {
        self.values.get(index).map(ValueData::value).unwrap_or(0.0)
    }

    fn set_slot(&mut self, index: usize, value: f32) {
        if let Some(cell) = self.values.get_mut(index) {
            cell.set_value(value);
        }
    }

    fn read_group<const N: usize>(&self, group: Group, fallback: [f32; N]) -> [f32; N] {
        let slots = self.schema.group(group);
        if slots.len() != N {
            return fallback;
        }
        let mut out = [0.0; N];
        for (dst, &index) in out.iter_mut().zip(slots) {
            *dst = self.slot(index);
        }
        out
    }

    fn write_group(&mut self, group: Group, values: &[f32]) {
        let slots = self.schema.group(group);
        for (&index, &value) in slots.iter().zip(values) {
            self.set_slot(index, value);
        }
    }

    fn read_color(&self, group: Group) -> [f32; 4] {
        match *self.schema.group(group) {
            [r, g, b] => [self.slot(r), self.slot(g), self.slot(b), 1.0],
            [r, g, b, a] => [self.slot(r), self.slot(g), self.slot(b), self.slot(a)],
            _ => WHITE,
        }
    }

    // ---- typed accessors ----

    pub fn position(&self) -> [f32; 3] {
        self.read_group(Group::Position, [0.0; 3])
    }

    pub fn set_position(&mut self, value: [f32; 3]) {
        self.write_group(Group::Position, &value);
    }

    pub fn sub_position(&self) -> [f32; 3] {
        self.read_group(Group::SubPosition, [0.0; 3])
    }

    pub fn set_sub_position(&mut self, value: [f32; 3]) {
        self.write_group(Group::SubPosition, &value);
    }

    /// Quaternion `(x, y, z, w)`.
    pub fn rotation(&self) -> [f32; 4] {
        self.read_group(Group::Rotation, IDENTITY_QUAT)
    }

    pub fn set_rotation(&mut self, value: [f32; 4]) {
        self.write_group(Group::Rotation, &value);
    }

    pub fn sub_rotation(&self) -> [f32; 4] {
        self.read_group(Group::SubRotation, IDENTITY_QUAT)
    }

    pub fn set_sub_rotation(&mut self, value: [f32; 4]) {
        self.write_group(Group::SubRotation, &value);
    }

    /// Euler degrees; derived from the quaternion when the kind stores
    /// rotation only.
    pub fn euler_angles(&self) -> [f32; 3] {
        if self.has_euler_angles() {
            self.read_group(Group::EulerAngles, [0.0; 3])
        } else if self.has_rotation() {
            euler_deg_from_quat(self.rotation())
        } else {
            [0.0; 3]
        }
    }

    pub fn set_euler_angles(&mut self, value: [f32; 3]) {
        if self.has_euler_angles() {
            self.write_group(Group::EulerAngles, &value);
        } else if self.has_rotation() {
            self.set_rotation(quat_from_euler_deg(value));
        }
    }

    pub fn sub_euler_angles(&self) -> [f32; 3] {
        if self.has_sub_euler_angles() {
            self.read_group(Group::SubEulerAngles, [0.0; 3])
        } else if self.has_sub_rotation() {
            euler_deg_from_quat(self.sub_rotation())
        } else {
            [0.0; 3]
        }
    }

    pub fn set_sub_euler_angles(&mut self, value: [f32; 3]) {
        if self.has_sub_euler_angles() {
            self.write_group(Group::SubEulerAngles, &value);
        } else if self.has_sub_rotation() {
            self.set_sub_rotation(quat_from_euler_deg(value));
        }
    }

    pub fn normalized_euler_angles(&self) -> [f32; 3] {
        crate::continuity::normalized_euler_angles(self.euler_angles())
    }

    pub fn normalized_sub_euler_angles(&self) -> [f32; 3] {
        crate::continuity::normalized_euler_angles(self.sub_euler_angles())
    }

    pub fn scale(&self) -> [f32; 3] {
        self.read_group(Group::Scale, [0.0; 3])
    }

    pub fn set_scale(&mut self, value: [f32; 3]) {
        self.write_group(Group::Scale, &value);
    }

    /// RGBA; three-slot colors read with alpha 1.
    pub fn color(&self) -> [f32; 4] {
        self.read_color(Group::Color)
    }

    /// Alpha is dropped for three-slot colors.
    pub fn set_color(&mut self, value: [f32; 4]) {
        self.write_group(Group::Color, &value);
    }

    pub fn sub_color(&self) -> [f32; 4] {
        self.read_color(Group::SubColor)
    }

    pub fn set_sub_color(&mut self, value: [f32; 4]) {
        self.write_group(Group::SubColor, &value);
    }

    pub fn visible(&self) -> bool {
        self.schema
            .visible_index()
            .and_then(|i| self.values.get(i))
            .is_some_and(ValueData::as_bool)
    }

    pub fn set_visible(&mut self, visible: bool) {
        if let Some(cell) = self.schema.visible_index().and_then(|i| self.values.get_mut(i)) {
            cell.set_bool(visible);
        }
    }

    /// Easing id stored in the easing slot, see [`crate::EasingType`].
    pub fn easing(&self) -> i32 {
        self.schema
            .easing_index()
            .and_then(|i| self.values.get(i))
            .map_or(0, ValueData::as_int)
    }

    pub fn set_easing(&mut self, easing: i32) {
        if let Some(cell) = self.schema.easing_index().and_then(|i| self.values.get_mut(i)) {
            cell.set_int(easing);
        }
    }

    // ---- custom values ----

    /// Display metadata for `key`; logs and returns `None` when undeclared.
    pub fn custom_value_info(&self, key: &str) -> Option<CustomValueInfo> {
        match self.lookup_custom(key) {
            Ok(info) => Some(info),
            Err(err) => {
                log::error!("{err}");
                None
            }
        }
    }

    fn lookup_custom(&self, key: &str) -> KeyframeResult<CustomValueInfo> {
        let info = self.schema.custom_value_info(key).ok_or_else(|| {
            KeyframeError::UnknownCustomValue {
                kind: self.kind(),
                key: key.to_string(),
            }
        })?;
        let mut info = *info;
        if info.max_from_position_range {
            info.max = self.position_range;
        }
        Ok(info)
    }

    pub fn has_custom_value(&self, key: &str) -> bool {
        self.schema.custom_value_info(key).is_some()
    }

    pub fn try_custom_value(&self, key: &str) -> KeyframeResult<&ValueData> {
        let info = self.lookup_custom(key)?;
        self.values
            .get(info.index)
            .ok_or(KeyframeError::IndexOutOfRange {
                kind: self.kind(),
                index: info.index,
                count: self.values.len(),
            })
    }

    /// Copy of the cell behind `key`, or a zero cell when undeclared.
    pub fn custom_value(&self, key: &str) -> ValueData {
        match self.try_custom_value(key) {
            Ok(cell) => *cell,
            Err(err) => {
                log::error!("{err}");
                ValueData::default()
            }
        }
    }

    pub fn try_custom_value_mut(&mut self, key: &str) -> KeyframeResult<&mut ValueData> {
        let info = self.lookup_custom(key)?;
        let count = self.values.len();
        let kind = self.kind();
        self.values
            .get_mut(info.index)
            .ok_or(KeyframeError::IndexOutOfRange {
                kind,
                index: info.index,
                count,
            })
    }

    pub fn custom_value_mut(&mut self, key: &str) -> Option<&mut ValueData> {
        match self.try_custom_value_mut(key) {
            Ok(cell) => Some(cell),
            Err(err) => {
                log::error!("{err}");
                None
            }
        }
    }

    pub fn try_set_custom_value(&mut self, key: &str, value: f32) -> KeyframeResult<()> {
        self.try_custom_value_mut(key)?.set_value(value);
        Ok(())
    }

    /// Logs and ignores undeclared keys.
    pub fn set_custom_value(&mut self, key: &str, value: f32) {
        if let Some(cell) = self.custom_value_mut(key) {
            cell.set_value(value);
        }
    }

    /// Display name, falling back to the key itself.
    pub fn custom_value_name<'a>(&self, key: &'a str) -> &'a str {
        self.custom_value_info(key).map_or(key, |info| info.name)
    }

    pub fn default_custom_value(&self, key: &str) -> f32 {
        self.custom_value_info(key)
            .map_or(0.0, |info| info.default_value)
    }

    // ---- string values ----

    pub fn has_str_value(&self, key: &str) -> bool {
        self.schema.str_value_info(key).is_some()
    }

    fn str_index(&self, key: &str) -> KeyframeResult<usize> {
        self.schema
            .str_value_info(key)
            .map(|info| info.index)
            .ok_or_else(|| KeyframeError::UnknownStrValue {
                kind: self.kind(),
                key: key.to_string(),
            })
    }

    pub fn try_str_value(&self, key: &str) -> KeyframeResult<&str> {
        let index = self.str_index(key)?;
        Ok(self.str_values.get(index).map_or("", String::as_str))
    }

    /// Empty when undeclared.
    pub fn str_value(&self, key: &str) -> &str {
        match self.try_str_value(key) {
            Ok(value) => value,
            Err(err) => {
                log::error!("{err}");
                ""
            }
        }
    }

    pub fn try_set_str_value(&mut self, key: &str, value: impl Into<String>) -> KeyframeResult<()> {
        let index = self.str_index(key)?;
        if let Some(slot) = self.str_values.get_mut(index) {
            *slot = value.into();
        }
        Ok(())
    }

    pub fn set_str_value(&mut self, key: &str, value: impl Into<String>) {
        if let Err(err) = self.try_set_str_value(key, value) {
            log::error!("{err}");
        }
    }

    pub fn str_value_name<'a>(&self, key: &'a str) -> &'a str {
        match self.schema.str_value_info(key) {
            Some(info) => info.name,
            None => {
                log::error!(
                    "{}",
                    KeyframeError::UnknownStrValue {
                        kind: self.kind(),
                        key: key.to_string(),
                    }
                );
                key
            }
        }
    }

    // ---- channel subsets ----

    /// Slot indices named by `selector`; empty when the capability is absent.
    pub fn value_indices(&self, selector: TangentValueType) -> Vec<usize> {
        let position = self.schema.group(Group::Position);
        let rotation = self.schema.group(Group::Rotation);
        let euler = self.schema.group(Group::EulerAngles);
        let scale = self.schema.group(Group::Scale);
        let angular = if rotation.is_empty() { euler } else { rotation };

        let pick = |slots: &[usize], axis: usize| -> Vec<usize> {
            slots.get(axis).copied().into_iter().collect()
        };
        match selector {
            TangentValueType::X => pick(position, 0),
            TangentValueType::Y => pick(position, 1),
            TangentValueType::Z => pick(position, 2),
            TangentValueType::RX => pick(angular, 0),
            TangentValueType::RY => pick(angular, 1),
            TangentValueType::RZ => pick(angular, 2),
            TangentValueType::RW => pick(rotation, 3),
            TangentValueType::Move => position.to_vec(),
            TangentValueType::Rotation => angular.to_vec(),
            TangentValueType::SX => pick(scale, 0),
            TangentValueType::SY => pick(scale, 1),
            TangentValueType::SZ => pick(scale, 2),
            TangentValueType::Scale => scale.to_vec(),
            TangentValueType::All => self.schema.tangent_indices().to_vec(),
        }
    }

    fn cells_at(&self, indices: &[usize]) -> Vec<&ValueData> {
        indices.iter().filter_map(|&i| self.values.get(i)).collect()
    }

    pub fn value_data_list(&self, selector: TangentValueType) -> Vec<&ValueData> {
        self.cells_at(&self.value_indices(selector))
    }

    /// Mutable cells named by `selector`, in selector order.
    pub fn value_data_list_mut(&mut self, selector: TangentValueType) -> Vec<&mut ValueData> {
        let indices = self.value_indices(selector);
        let mut slots: Vec<Option<&mut ValueData>> = self.values.iter_mut().map(Some).collect();
        indices
            .iter()
            .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
            .collect()
    }

    pub fn in_tangent_list(&self, selector: TangentValueType) -> Vec<&TangentData> {
        self.value_data_list(selector)
            .into_iter()
            .map(|cell| &cell.in_tangent)
            .collect()
    }

    pub fn out_tangent_list(&self, selector: TangentValueType) -> Vec<&TangentData> {
        self.value_data_list(selector)
            .into_iter()
            .map(|cell| &cell.out_tangent)
            .collect()
    }

    /// Cells eligible for Hermite interpolation.
    pub fn tangent_values(&self) -> Vec<&ValueData> {
        self.cells_at(self.schema.tangent_indices())
    }

    pub fn base_values(&self) -> Vec<&ValueData> {
        self.cells_at(&self.schema.base_indices())
    }

    // ---- lifecycle ----

    /// Reseed tangents and easing from `config`.
    pub fn init_tangent(&mut self, config: &KeyframeConfig) {
        if self.has_tangent() {
            let pair: TangentPair = config.default_tangent_pair();
            for cell in &mut self.values {
                cell.in_tangent = TangentData::new(pair.in_tangent, pair.is_smooth);
                cell.out_tangent = TangentData::new(pair.out_tangent, pair.is_smooth);
            }
        }
        if self.has_easing() {
            self.set_easing(config.default_easing.index());
        }
    }

    /// Restore schema initial values, custom defaults and empty strings.
    pub fn reset(&mut self) {
        self.reset_with(&NoRestPose);
    }

    /// [`reset`](Self::reset) with the rest pose taken from the host skeleton
    /// for kinds that follow it.
    pub fn reset_with(&mut self, rest_pose: &dyn RestPoseSource) {
        let mut initial = *self.schema.initial();
        if self.schema.uses_rest_pose() {
            let kind = self.kind();
            if let Some(position) = rest_pose.rest_position(kind, &self.name) {
                initial.position = position;
            }
            if let Some(euler) = rest_pose.rest_euler_angles(kind, &self.name) {
                initial.euler_angles = euler;
                initial.rotation = quat_from_euler_deg(euler);
            }
        }

        if self.has_position() {
            self.set_position(initial.position);
        }
        if self.has_sub_position() {
            self.set_sub_position(initial.sub_position);
        }
        if self.has_rotation() {
            self.set_rotation(initial.rotation);
        }
        if self.has_sub_rotation() {
            self.set_sub_rotation(initial.sub_rotation);
        }
        if self.has_euler_angles() {
            self.set_euler_angles(initial.euler_angles);
        }
        if self.has_sub_euler_angles() {
            self.set_sub_euler_angles(initial.sub_euler_angles);
        }
        if self.has_scale() {
            self.set_scale(initial.scale);
        }
        if self.has_color() {
            self.set_color(initial.color);
        }
        if self.has_sub_color() {
            self.set_sub_color(initial.sub_color);
        }
        if self.has_visible() {
            self.set_visible(initial.visible);
        }
        if self.has_easing() {
            self.set_easing(0);
        }

        for info in self.schema.custom_values() {
            self.set_slot(info.index, info.default_value);
        }
        for slot in &mut self.str_values {
            slot.clear();
        }
    }

    /// Copy every cell (with tangents) and string from `other`.
    ///
    /// Both instances must share a layout; extra slots on either side are
    /// left untouched.
    pub fn copy_from(&mut self, other: &TransformData) {
        for (dst, src) in self.values.iter_mut().zip(&other.values) {
            dst.copy_from(src);
        }
        for (dst, src) in self.str_values.iter_mut().zip(&other.str_values) {
            dst.clone_from(src);
        }
    }

    /// [`copy_from`](Self::copy_from) that refuses a layout mismatch before
    /// writing anything.
    pub fn try_copy_from(&mut self, other: &TransformData) -> KeyframeResult<()> {
        let expected = (self.values.len(), self.str_values.len());
        let actual = (other.values.len(), other.str_values.len());
        if expected != actual {
            return Err(KeyframeError::SchemaMismatch { expected, actual });
        }
        self.copy_from(other);
        Ok(())
    }
}

/// Equal when name, cell values and strings match; tangents are ignored.
impl PartialEq for TransformData {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.values == other.values
            && self.str_values == other.str_values
    }
}

impl fmt::Display for TransformData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransformData {:?} name={}", self.kind(), self.name)?;
        if !self.values.is_empty() {
            let values: Vec<String> = self.values.iter().map(|v| v.value().to_string()).collect();
            write!(f, " values={}", values.join(", "))?;
        }
        if !self.str_values.is_empty() {
            write!(f, " strValues={}", self.str_values.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(kind: TransformType) -> TransformData {
        TransformData::with_name(kind, "test", &KeyframeConfig::default()).expect("schema")
    }

    #[test]
    fn initialize_sizes_slots_and_seeds_tangents() {
        let data = make(TransformType::Voice);
        assert_eq!(data.values().len(), 4);
        assert_eq!(data.str_values(), &["".to_string(), "".to_string()]);
        assert!(data.values().iter().all(|v| v.in_tangent.is_smooth));
    }

    #[test]
    fn reinitialize_keeps_matching_slots() {
        let mut data = make(TransformType::BG);
        data.set_position([1.0, 2.0, 3.0]);
        data.initialize("renamed", &KeyframeConfig::default());
        assert_eq!(data.name(), "renamed");
        assert_eq!(data.position(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn three_slot_color_reads_opaque() {
        let mut data = make(TransformType::BGColor);
        data.set_color([0.2, 0.4, 0.6, 0.1]);
        assert_eq!(data.color(), [0.2, 0.4, 0.6, 1.0]);
        assert_eq!(data.values().len(), 3);
    }

    #[test]
    fn missing_capabilities_read_neutral() {
        let mut data = make(TransformType::Eyes);
        assert_eq!(data.position(), [0.0; 3]);
        assert_eq!(data.rotation(), IDENTITY_QUAT);
        assert_eq!(data.color(), WHITE);
        assert!(!data.visible());
        data.set_position([1.0, 1.0, 1.0]);
        assert_eq!(data.values().iter().map(|v| v.value()).sum::<f32>(), 0.0);
    }

    #[test]
    fn toggled_kind_swaps_easing_for_tangents() {
        let mut cfg = KeyframeConfig::default();
        let camera = TransformData::with_name(TransformType::Camera, "cam", &cfg).expect("camera");
        assert!(camera.has_easing());
        assert!(!camera.has_tangent());

        cfg.tangent_toggles.camera = true;
        let camera = TransformData::with_name(TransformType::Camera, "cam", &cfg).expect("camera");
        assert!(!camera.has_easing());
        assert!(camera.has_tangent());
    }

    #[test]
    fn head_rotation_hidden_unless_enabled() {
        let mut cfg = KeyframeConfig::default();
        let head = TransformData::with_name(TransformType::Rotation, HEAD_BONE, &cfg).expect("rot");
        assert!(head.is_hidden());
        let arm = TransformData::with_name(TransformType::Rotation, "Bip01 L UpperArm", &cfg)
            .expect("rot");
        assert!(!arm.is_hidden());

        cfg.bone_keys.head = true;
        let head = TransformData::with_name(TransformType::Rotation, HEAD_BONE, &cfg).expect("rot");
        assert!(!head.is_hidden());
    }

    #[test]
    fn display_lists_values_and_strings() {
        let mut data = make(TransformType::Dress);
        data.set_custom_value("rid", 42.0);
        data.set_str_value("propName", "hat");
        assert_eq!(
            data.to_string(),
            "TransformData Dress name=test values=42 strValues=hat"
        );
    }
}
