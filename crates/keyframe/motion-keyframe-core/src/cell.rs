//! Scalar channel cells.
//!
//! A cell is one slot of a transform's flat value array. Bool and integer
//! channels share the float storage: `0.0` reads as `false`, any other value
//! as `true`, and integers truncate toward zero.

use serde::{Deserialize, Serialize};

use crate::config::TangentPair;

/// One side (in or out) of a cell's Hermite tangent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TangentData {
    value: f32,
    pub normalized_value: f32,
    pub is_smooth: bool,
}

impl TangentData {
    pub fn new(normalized_value: f32, is_smooth: bool) -> Self {
        Self {
            value: 0.0,
            normalized_value,
            is_smooth,
        }
    }

    /// Slope recovered from the normalized value by the last
    /// [`update_value`](Self::update_value).
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Scale the normalized tangent by the local segment slope.
    #[inline]
    pub fn update_value(&mut self, base_tangent: f32) {
        self.value = self.normalized_value * base_tangent;
    }

    /// Whether the normalized value has to be written out explicitly.
    #[inline]
    pub fn should_serialize(&self) -> bool {
        !self.is_smooth && self.normalized_value != 0.0
    }

    pub fn copy_from(&mut self, other: &TangentData) {
        *self = *other;
    }
}

/// Float slot with its in/out tangents.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueData {
    raw: f64,
    pub in_tangent: TangentData,
    pub out_tangent: TangentData,
}

impl ValueData {
    pub fn new(value: f32) -> Self {
        Self {
            raw: value as f64,
            ..Default::default()
        }
    }

    /// Cell whose tangents are seeded from a preset.
    pub fn seeded(pair: TangentPair) -> Self {
        let mut cell = Self::default();
        cell.apply_tangent_pair(pair);
        cell
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.raw as f32
    }

    #[inline]
    pub fn set_value(&mut self, value: f32) {
        self.raw = value as f64;
    }

    #[inline]
    pub fn as_int(&self) -> i32 {
        self.raw as i32
    }

    #[inline]
    pub fn set_int(&mut self, value: i32) {
        self.raw = value as f64;
    }

    #[inline]
    pub fn as_bool(&self) -> bool {
        self.raw != 0.0
    }

    #[inline]
    pub fn set_bool(&mut self, value: bool) {
        self.raw = if value { 1.0 } else { 0.0 };
    }

    /// Copy value and both tangents from `other`.
    pub fn copy_from(&mut self, other: &ValueData) {
        self.raw = other.raw;
        self.in_tangent.copy_from(&other.in_tangent);
        self.out_tangent.copy_from(&other.out_tangent);
    }

    pub fn apply_tangent_pair(&mut self, pair: TangentPair) {
        self.in_tangent.normalized_value = pair.in_tangent;
        self.in_tangent.is_smooth = pair.is_smooth;
        self.out_tangent.normalized_value = pair.out_tangent;
        self.out_tangent.is_smooth = pair.is_smooth;
    }
}

/// Cells compare by stored value only; tangent state is ignored.
impl PartialEq for ValueData {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TangentType;

    #[test]
    fn bool_and_int_views_share_storage() {
        let mut cell = ValueData::default();
        assert!(!cell.as_bool());
        cell.set_bool(true);
        assert_eq!(cell.value(), 1.0);
        cell.set_value(-2.7);
        assert_eq!(cell.as_int(), -2);
        assert!(cell.as_bool());
        cell.set_value(0.0);
        assert!(!cell.as_bool());
    }

    #[test]
    fn equality_ignores_tangents() {
        let mut a = ValueData::new(3.0);
        let b = ValueData::new(3.0);
        a.in_tangent.normalized_value = 0.5;
        assert_eq!(a, b);
        a.set_value(3.5);
        assert_ne!(a, b);
    }

    #[test]
    fn copy_from_copies_tangents() {
        let mut src = ValueData::seeded(TangentType::EaseIn.default_pair());
        src.set_value(4.0);
        src.out_tangent.update_value(2.0);
        let mut dst = ValueData::default();
        dst.copy_from(&src);
        assert_eq!(dst.value(), 4.0);
        assert_eq!(dst.out_tangent.normalized_value, 1.0);
        assert_eq!(dst.out_tangent.value(), 2.0);
        assert!(!dst.in_tangent.is_smooth);
    }

    #[test]
    fn should_serialize_only_authored_non_zero() {
        assert!(!TangentData::new(0.0, false).should_serialize());
        assert!(!TangentData::new(0.7, true).should_serialize());
        assert!(TangentData::new(0.7, false).should_serialize());
    }
}
