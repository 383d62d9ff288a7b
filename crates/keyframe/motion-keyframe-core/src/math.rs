//! Quaternion and euler helpers on plain arrays.
//!
//! Quaternions are `(x, y, z, w)`. Euler angles are degrees and compose as
//! Z first, then X, then Y, matching the host engine's convention.

pub const IDENTITY_QUAT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

#[inline]
pub fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[inline]
pub fn negate4(q: [f32; 4]) -> [f32; 4] {
    [-q[0], -q[1], -q[2], -q[3]]
}

#[inline]
pub fn normalize4(mut q: [f32; 4]) -> [f32; 4] {
    let len2 = dot4(q, q);
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        q[0] *= inv_len;
        q[1] *= inv_len;
        q[2] *= inv_len;
        q[3] *= inv_len;
    }
    q
}

/// Quaternion for euler angles in degrees.
pub fn quat_from_euler_deg(euler: [f32; 3]) -> [f32; 4] {
    let hx = (euler[0] as f64).to_radians() * 0.5;
    let hy = (euler[1] as f64).to_radians() * 0.5;
    let hz = (euler[2] as f64).to_radians() * 0.5;
    let (sx, cx) = hx.sin_cos();
    let (sy, cy) = hy.sin_cos();
    let (sz, cz) = hz.sin_cos();

    [
        (cy * sx * cz + sy * cx * sz) as f32,
        (sy * cx * cz - cy * sx * sz) as f32,
        (cy * cx * sz - sy * sx * cz) as f32,
        (cy * cx * cz + sy * sx * sz) as f32,
    ]
}

/// Euler angles in degrees, each in `[0, 360)`.
pub fn euler_deg_from_quat(q: [f32; 4]) -> [f32; 3] {
    let q = normalize4(q);
    let (x, y, z, w) = (q[0] as f64, q[1] as f64, q[2] as f64, q[3] as f64);

    let sin_x = (2.0 * (w * x - y * z)).clamp(-1.0, 1.0);
    let (ex, ey, ez) = if sin_x.abs() > 0.999_999 {
        // gimbal lock: fold roll into yaw
        let m00 = 1.0 - 2.0 * (y * y + z * z);
        let m20 = 2.0 * (x * z - w * y);
        (
            std::f64::consts::FRAC_PI_2.copysign(sin_x),
            (-m20).atan2(m00),
            0.0,
        )
    } else {
        let m02 = 2.0 * (x * z + w * y);
        let m22 = 1.0 - 2.0 * (x * x + y * y);
        let m10 = 2.0 * (x * y + w * z);
        let m11 = 1.0 - 2.0 * (x * x + z * z);
        (sin_x.asin(), m02.atan2(m22), m10.atan2(m11))
    };

    [wrap_360(ex), wrap_360(ey), wrap_360(ez)]
}

fn wrap_360(rad: f64) -> f32 {
    let deg = rad.to_degrees().rem_euclid(360.0) as f32;
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() <= eps
    }

    fn same_rotation(a: [f32; 4], b: [f32; 4]) -> bool {
        dot4(normalize4(a), normalize4(b)).abs() > 0.9999
    }

    #[test]
    fn identity_maps_to_zero_angles() {
        assert_eq!(quat_from_euler_deg([0.0, 0.0, 0.0]), IDENTITY_QUAT);
        let e = euler_deg_from_quat(IDENTITY_QUAT);
        assert!(e.iter().all(|v| approx(*v, 0.0, 1e-4)));
    }

    #[test]
    fn single_axis_quarter_turns() {
        let half = std::f32::consts::FRAC_1_SQRT_2;
        let qx = quat_from_euler_deg([90.0, 0.0, 0.0]);
        assert!(same_rotation(qx, [half, 0.0, 0.0, half]));
        let qy = quat_from_euler_deg([0.0, 90.0, 0.0]);
        assert!(same_rotation(qy, [0.0, half, 0.0, half]));
        let qz = quat_from_euler_deg([0.0, 0.0, 90.0]);
        assert!(same_rotation(qz, [0.0, 0.0, half, half]));
    }

    #[test]
    fn euler_round_trip_outside_gimbal_lock() {
        for euler in [[10.0, 20.0, 30.0], [45.0, 300.0, 120.0], [350.0, 5.0, 200.0]] {
            let q = quat_from_euler_deg(euler);
            let back = euler_deg_from_quat(q);
            assert!(same_rotation(quat_from_euler_deg(back), q), "{euler:?} -> {back:?}");
            assert!(back.iter().all(|v| (0.0..360.0).contains(v)));
        }
    }

    #[test]
    fn gimbal_lock_still_reproduces_rotation() {
        let q = quat_from_euler_deg([90.0, 30.0, 0.0]);
        let back = euler_deg_from_quat(q);
        assert!(approx(back[0], 90.0, 1e-2));
        assert!(same_rotation(quat_from_euler_deg(back), q));
    }
}
