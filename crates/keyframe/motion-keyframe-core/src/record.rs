//! Persisted form of a transform instance.
//!
//! A [`TransformRecord`] stores raw values, normalized tangents and one
//! 64-bit smooth mask per tangent side. Tangent arrays are written only when
//! some cell carries an authored, non-zero tangent.

use serde::{Deserialize, Serialize};

use crate::config::KeyframeConfig;
use crate::error::{KeyframeError, KeyframeResult};
use crate::schema::{TransformType, MAX_CHANNELS};
use crate::transform::TransformData;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransformType,
    #[serde(default)]
    pub values: Vec<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_tangents: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_tangents: Option<Vec<f32>>,
    #[serde(default)]
    pub in_smooth_bit: u64,
    #[serde(default)]
    pub out_smooth_bit: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub str_values: Option<Vec<String>>,
}

/// One bit per channel; bit `i` is channel `i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SmoothBits(u64);

impl SmoothBits {
    pub const CAPACITY: usize = MAX_CHANNELS;

    #[inline]
    pub fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// Pack flags in order; flags past [`Self::CAPACITY`] are dropped.
    pub fn from_flags(flags: impl IntoIterator<Item = bool>) -> Self {
        let mut bits = Self::default();
        for (i, flag) in flags.into_iter().take(Self::CAPACITY).enumerate() {
            bits.set(i, flag);
        }
        bits
    }

    #[inline]
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Out-of-range channels read as `false`.
    #[inline]
    pub fn get(self, channel: usize) -> bool {
        channel < Self::CAPACITY && self.0 & (1u64 << channel) != 0
    }

    pub fn set(&mut self, channel: usize, flag: bool) {
        if channel >= Self::CAPACITY {
            return;
        }
        if flag {
            self.0 |= 1u64 << channel;
        } else {
            self.0 &= !(1u64 << channel);
        }
    }
}

impl TransformData {
    fn in_smooth_bits(&self) -> SmoothBits {
        if !self.has_tangent() {
            return SmoothBits::default();
        }
        SmoothBits::from_flags(self.values.iter().map(|v| v.in_tangent.is_smooth))
    }

    fn out_smooth_bits(&self) -> SmoothBits {
        if !self.has_tangent() {
            return SmoothBits::default();
        }
        SmoothBits::from_flags(self.values.iter().map(|v| v.out_tangent.is_smooth))
    }

    fn normalized_in_tangents(&self) -> Option<Vec<f32>> {
        let authored = self.values.iter().any(|v| v.in_tangent.should_serialize());
        (self.has_tangent() && authored).then(|| {
            self.values
                .iter()
                .map(|v| v.in_tangent.normalized_value)
                .collect()
        })
    }

    fn normalized_out_tangents(&self) -> Option<Vec<f32>> {
        let authored = self.values.iter().any(|v| v.out_tangent.should_serialize());
        (self.has_tangent() && authored).then(|| {
            self.values
                .iter()
                .map(|v| v.out_tangent.normalized_value)
                .collect()
        })
    }

    pub fn to_record(&self) -> TransformRecord {
        TransformRecord {
            name: self.name.clone(),
            kind: self.kind(),
            values: self.values.iter().map(|v| v.value()).collect(),
            in_tangents: self.normalized_in_tangents(),
            out_tangents: self.normalized_out_tangents(),
            in_smooth_bit: self.in_smooth_bits().bits(),
            out_smooth_bit: self.out_smooth_bits().bits(),
            str_values: (!self.str_values.is_empty()).then(|| self.str_values.clone()),
        }
    }

    /// Load `record` into this initialized instance.
    ///
    /// Missing trailing values and tangents read as zero; extra entries are
    /// ignored. A missing string array leaves the current strings alone.
    /// Model and model bone names stored as `.menu` paths keep only the file
    /// name.
    pub fn load_record(&mut self, record: &TransformRecord) {
        if record.kind != self.kind() {
            log::warn!(
                "load_record {}: record kind {:?} applied to {:?}",
                record.name,
                record.kind,
                self.kind()
            );
        }
        if record.values.len() != self.values.len() {
            log::warn!(
                "load_record {}: {} values for {} channels",
                record.name,
                record.values.len(),
                self.values.len()
            );
        }

        self.name.clone_from(&record.name);
        if matches!(self.kind(), TransformType::Model | TransformType::ModelBone) {
            if let Some(file_name) = menu_file_name(&self.name).map(str::to_string) {
                self.name = file_name;
            }
        }

        let in_bits = SmoothBits::new(record.in_smooth_bit);
        let out_bits = SmoothBits::new(record.out_smooth_bit);
        let in_tangents = record.in_tangents.as_deref().unwrap_or_default();
        let out_tangents = record.out_tangents.as_deref().unwrap_or_default();

        for (i, cell) in self.values.iter_mut().enumerate() {
            cell.set_value(record.values.get(i).copied().unwrap_or(0.0));
            cell.in_tangent.normalized_value = in_tangents.get(i).copied().unwrap_or(0.0);
            cell.out_tangent.normalized_value = out_tangents.get(i).copied().unwrap_or(0.0);
            cell.in_tangent.is_smooth = in_bits.get(i);
            cell.out_tangent.is_smooth = out_bits.get(i);
        }

        if let Some(strings) = &record.str_values {
            for (dst, src) in self.str_values.iter_mut().zip(strings) {
                dst.clone_from(src);
            }
        }
    }

    /// Build a fresh instance for the record's kind and load it.
    pub fn from_record(
        record: &TransformRecord,
        config: &KeyframeConfig,
    ) -> KeyframeResult<Self> {
        let mut data = TransformData::with_name(record.kind, record.name.as_str(), config)?;
        data.load_record(record);
        Ok(data)
    }
}

/// File name of a `.menu` path, either separator.
fn menu_file_name(name: &str) -> Option<&str> {
    if !name.ends_with(".menu") {
        return None;
    }
    name.rsplit(['/', '\\']).next()
}

pub fn record_to_json(record: &TransformRecord) -> KeyframeResult<String> {
    Ok(serde_json::to_string(record)?)
}

pub fn record_from_json(json: &str) -> KeyframeResult<TransformRecord> {
    Ok(serde_json::from_str(json)?)
}

pub fn records_to_json(records: &[TransformRecord]) -> KeyframeResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parse a record list, rejecting any record whose kind has no schema.
pub fn records_from_json(json: &str) -> KeyframeResult<Vec<TransformRecord>> {
    let records: Vec<TransformRecord> = serde_json::from_str(json)?;
    if let Some(bad) = records
        .iter()
        .find(|r| crate::schema::schema(r.kind).is_none())
    {
        return Err(KeyframeError::NoSchema { kind: bad.kind });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_bits_pack_in_channel_order() {
        let bits = SmoothBits::from_flags([true, false, true]);
        assert_eq!(bits.bits(), 0b101);
        assert!(bits.get(2));
        assert!(!bits.get(1));
        assert!(!bits.get(64));
    }

    #[test]
    fn smooth_bits_use_the_high_bit() {
        let mut bits = SmoothBits::default();
        bits.set(63, true);
        assert_eq!(bits.bits(), 1u64 << 63);
        bits.set(64, true);
        assert_eq!(bits.bits(), 1u64 << 63);
        bits.set(63, false);
        assert_eq!(bits.bits(), 0);
    }

    #[test]
    fn menu_paths_reduce_to_file_names() {
        assert_eq!(menu_file_name("menu/dress/hat.menu"), Some("hat.menu"));
        assert_eq!(menu_file_name(r"C:\mod\chair.menu"), Some("chair.menu"));
        assert_eq!(menu_file_name("chair.menu"), Some("chair.menu"));
        assert_eq!(menu_file_name("menu/chair.model"), None);
    }

    #[test]
    fn record_json_uses_wire_names() {
        let record = TransformRecord {
            name: "fog".into(),
            kind: TransformType::DistanceFog,
            values: vec![1.0],
            in_smooth_bit: 3,
            ..Default::default()
        };
        let json = record_to_json(&record).expect("json");
        assert!(json.contains("\"type\":\"DistanceFog\""));
        assert!(json.contains("\"inSmoothBit\":3"));
        assert!(!json.contains("inTangents"));
        assert!(!json.contains("strValues"));
        assert_eq!(record_from_json(&json).expect("parse"), record);
    }
}
