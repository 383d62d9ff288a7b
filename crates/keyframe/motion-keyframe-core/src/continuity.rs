//! Tangent recomputation and rotation continuity between neighboring keys.

use crate::error::{KeyframeError, KeyframeResult};
use crate::math::{dot4, negate4};
use crate::transform::TransformData;

/// Synthetic delta substituted for a flat side next to a moving one.
const FLAT_NUDGE: f32 = 0.01;

/// Sign with `sign(0) == 1`, so a nudge always has a direction.
#[inline]
fn sign(v: f32) -> f32 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Ratios that overflow read as a flat tangent.
#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// Shift each axis of `angles` by whole turns so it lands within 180 degrees
/// of `prev`. The comparison uses the truncated difference. Non-finite axes
/// pass through unchanged.
pub fn fixed_euler_angles(angles: [f32; 3], prev: [f32; 3]) -> [f32; 3] {
    let mut out = angles;
    for (axis, value) in out.iter_mut().enumerate() {
        let diff = ((angles[axis] - prev[axis]) as f64).trunc();
        *value = unwrap_turns(*value, diff);
    }
    out
}

/// Canonical form of `angles`, each axis in `(-180, 180]`. Past about 1e12
/// degrees whole turns are no longer exact and the result is only finite.
pub fn normalized_euler_angles(angles: [f32; 3]) -> [f32; 3] {
    angles.map(|angle| {
        let mut folded = unwrap_turns(angle, (angle as f64).trunc());
        if folded > 180.0 {
            folded -= 360.0;
        } else if folded <= -180.0 {
            folded += 360.0;
        }
        folded
    })
}

/// Remove whole turns given a truncated `diff`. Turn counts round toward
/// zero, like integer division.
fn unwrap_turns(angle: f32, diff: f64) -> f32 {
    if !diff.is_finite() {
        return angle;
    }
    let turns = if diff > 180.0 {
        ((diff + 180.0) / 360.0).trunc()
    } else if diff < -180.0 {
        ((diff - 180.0) / 360.0).trunc()
    } else {
        return angle;
    };
    (angle as f64 - turns * 360.0) as f32
}

impl TransformData {
    /// Recompute in/out tangents of every tangent-bearing cell from the
    /// neighboring keyframes.
    ///
    /// All inputs are checked before any cell is touched; on error the
    /// instance is left exactly as it was.
    pub fn update_tangent(
        &mut self,
        prev: Option<&TransformData>,
        next: Option<&TransformData>,
        prev_time: f32,
        cur_time: f32,
        next_time: f32,
    ) -> KeyframeResult<()> {
        if !self.has_tangent() {
            return Ok(());
        }

        let result = self.check_tangent_inputs(prev, next, prev_time, cur_time, next_time);
        let (prev, next) = match result {
            Ok(pair) => pair,
            Err(err) => {
                log::error!("update_tangent {}: {err}", self.name);
                return Err(err);
            }
        };

        let dt0 = cur_time - prev_time;
        let dt1 = next_time - cur_time;
        let dt0_inv = 1.0 / dt0;
        let dt1_inv = 1.0 / dt1;
        let dt_inv = 1.0 / (dt0 + dt1);

        let indices = self.schema.tangent_indices();
        for &i in indices {
            let (Some(p), Some(n)) = (prev.values.get(i), next.values.get(i)) else {
                continue;
            };
            let (x0, x2) = (p.value(), n.value());
            let Some(cell) = self.values.get_mut(i) else {
                continue;
            };
            let x1 = cell.value();

            let mut dx0 = x1 - x0;
            let mut dx1 = x2 - x1;
            if dx0 == 0.0 && dx1 != 0.0 {
                dx0 = sign(dx1) * FLAT_NUDGE;
            } else if dx1 == 0.0 && dx0 != 0.0 {
                dx1 = sign(dx0) * FLAT_NUDGE;
            }

            let v0 = dx0 * dt0_inv;
            let v1 = dx1 * dt1_inv;

            if cell.in_tangent.is_smooth || cell.out_tangent.is_smooth {
                let tan = (x2 - x0) * dt_inv;
                let (tan0, tan1) = if v0 != 0.0 && v1 != 0.0 {
                    (finite_or_zero(tan / v0), finite_or_zero(tan / v1))
                } else {
                    (0.0, 0.0)
                };
                if cell.in_tangent.is_smooth {
                    cell.in_tangent.normalized_value = tan0;
                }
                if cell.out_tangent.is_smooth {
                    cell.out_tangent.normalized_value = tan1;
                }
            }

            cell.in_tangent.update_value(v0);
            cell.out_tangent.update_value(v1);
        }

        log::debug!(
            "update_tangent {} ({:?}): {} channels, dt0={dt0} dt1={dt1}",
            self.name,
            self.kind(),
            indices.len()
        );
        Ok(())
    }

    fn check_tangent_inputs<'a>(
        &self,
        prev: Option<&'a TransformData>,
        next: Option<&'a TransformData>,
        prev_time: f32,
        cur_time: f32,
        next_time: f32,
    ) -> KeyframeResult<(&'a TransformData, &'a TransformData)> {
        let prev = prev.ok_or_else(|| KeyframeError::MissingNeighbor {
            side: "prev".to_string(),
        })?;
        let next = next.ok_or_else(|| KeyframeError::MissingNeighbor {
            side: "next".to_string(),
        })?;

        let dt0 = cur_time - prev_time;
        let dt1 = next_time - cur_time;
        if dt0.is_nan() || dt1.is_nan() || dt0 <= 0.0 || dt1 <= 0.0 {
            return Err(KeyframeError::NonPositiveFrameDelta { dt0, dt1 });
        }

        let expected = (self.values.len(), self.str_values.len());
        for neighbor in [prev, next] {
            let actual = (neighbor.values.len(), neighbor.str_values.len());
            if actual != expected {
                return Err(KeyframeError::SchemaMismatch { expected, actual });
            }
        }
        Ok((prev, next))
    }

    /// Flip this quaternion when it lies on the far hemisphere from `prev`,
    /// so interpolation takes the short arc.
    pub fn fix_rotation(&mut self, prev: &TransformData) {
        if !self.has_rotation() || !self.schema.is_fix_rotation() {
            return;
        }
        let rotation = self.rotation();
        if dot4(prev.rotation(), rotation) < 0.0 {
            self.set_rotation(negate4(rotation));
        }
    }

    /// Unwrap stored euler angles against `prev`, see [`fixed_euler_angles`].
    pub fn fix_euler_angles(&mut self, prev: &TransformData) {
        if !self.has_euler_angles() || !self.schema.is_fix_rotation() {
            return;
        }
        let fixed = fixed_euler_angles(self.euler_angles(), prev.euler_angles());
        self.set_euler_angles(fixed);
    }
}
