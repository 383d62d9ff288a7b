use motion_keyframe_core::{
    KeyframeConfig, KeyframeError, TangentPair, TangentType, TransformData, TransformRecord,
    TransformType,
};
use proptest::prelude::*;

fn approx(a: f32, b: f32, eps: f32) {
    assert!(
        (a - b).abs() <= eps,
        "approx failed: left={a} right={b} eps={eps}"
    );
}

/// IK hold keys carry tangents on their three position channels.
fn hold_key(x: f32) -> TransformData {
    let cfg = KeyframeConfig::default();
    let mut data =
        TransformData::with_name(TransformType::IKHold, "HandL", &cfg).expect("ik hold schema");
    data.set_position([x, 0.0, 0.0]);
    data
}

fn x_tangents(data: &TransformData) -> (f32, f32) {
    let cell = &data.values()[0];
    (cell.in_tangent.normalized_value, cell.out_tangent.normalized_value)
}

/// it should give neutral tangents for evenly spaced linear data
#[test]
fn linear_data_yields_unit_tangents() {
    let prev = hold_key(0.0);
    let next = hold_key(20.0);
    let mut cur = hold_key(10.0);

    cur.update_tangent(Some(&prev), Some(&next), 0.0, 1.0, 2.0)
        .expect("update");

    let (tin, tout) = x_tangents(&cur);
    approx(tin, 1.0, 1e-6);
    approx(tout, 1.0, 1e-6);
    approx(cur.values()[0].in_tangent.value(), 10.0, 1e-5);
    approx(cur.values()[0].out_tangent.value(), 10.0, 1e-5);

    // Flat channels stay flat.
    let y = &cur.values()[1];
    assert_eq!(y.in_tangent.normalized_value, 0.0);
    assert_eq!(y.out_tangent.normalized_value, 0.0);
}

/// it should nudge a flat side so the tangent keeps its direction
#[test]
fn zero_delta_side_is_nudged() {
    let prev = hold_key(5.0);
    let next = hold_key(8.0);
    let mut cur = hold_key(5.0);

    cur.update_tangent(Some(&prev), Some(&next), 0.0, 1.0, 2.0)
        .expect("update");

    let (tin, tout) = x_tangents(&cur);
    assert!(tin.is_finite() && tout.is_finite());
    assert!(tin > 0.0, "in tangent {tin}");
    assert!(tout > 0.0, "out tangent {tout}");
    approx(tin, 150.0, 1e-2);
    approx(tout, 0.5, 1e-6);

    // Both sides recover the same central slope.
    let cell = &cur.values()[0];
    approx(cell.in_tangent.value(), 1.5, 1e-4);
    approx(cell.out_tangent.value(), 1.5, 1e-4);
}

/// it should keep authored tangents and only rescale their slope
#[test]
fn authored_tangents_are_kept() {
    let prev = hold_key(0.0);
    let next = hold_key(30.0);
    let mut cur = hold_key(10.0);
    {
        let cell = &mut cur.values_mut()[0];
        cell.in_tangent.normalized_value = 0.5;
        cell.in_tangent.is_smooth = false;
    }

    cur.update_tangent(Some(&prev), Some(&next), 0.0, 2.0, 4.0)
        .expect("update");

    let cell = &cur.values()[0];
    assert_eq!(cell.in_tangent.normalized_value, 0.5);
    approx(cell.in_tangent.value(), 2.5, 1e-6);
    // Smooth out side: tan = 30 / 4, v1 = 20 / 2.
    approx(cell.out_tangent.normalized_value, 0.75, 1e-6);
}

/// it should abandon the whole update on non-increasing frame times
#[test]
fn invalid_frame_delta_writes_nothing() {
    let prev = hold_key(0.0);
    let next = hold_key(20.0);
    let mut cur = hold_key(10.0);
    cur.update_tangent(Some(&prev), Some(&next), 0.0, 1.0, 2.0)
        .expect("update");
    let before = cur.values().to_vec();

    let far = hold_key(500.0);
    let err = cur
        .update_tangent(Some(&prev), Some(&far), 1.0, 1.0, 2.0)
        .expect_err("dt0 == 0 must fail");
    assert!(matches!(err, KeyframeError::NonPositiveFrameDelta { .. }));

    let err = cur
        .update_tangent(Some(&prev), Some(&far), 0.0, 3.0, 2.0)
        .expect_err("dt1 < 0 must fail");
    assert!(matches!(err, KeyframeError::NonPositiveFrameDelta { .. }));

    for (a, b) in before.iter().zip(cur.values()) {
        assert_eq!(a.in_tangent, b.in_tangent);
        assert_eq!(a.out_tangent, b.out_tangent);
    }
}

/// it should report a missing neighbor without touching tangents
#[test]
fn missing_neighbor_is_reported() {
    let prev = hold_key(0.0);
    let mut cur = hold_key(10.0);

    let err = cur
        .update_tangent(Some(&prev), None, 0.0, 1.0, 2.0)
        .expect_err("missing next");
    assert_eq!(
        err,
        KeyframeError::MissingNeighbor {
            side: "next".to_string()
        }
    );
    let err = cur
        .update_tangent(None, Some(&prev), 0.0, 1.0, 2.0)
        .expect_err("missing prev");
    assert!(matches!(err, KeyframeError::MissingNeighbor { .. }));
    assert_eq!(x_tangents(&cur), (0.0, 0.0));
}

/// it should refuse neighbors with a different layout
#[test]
fn mismatched_neighbor_is_rejected() {
    let cfg = KeyframeConfig::default();
    let prev =
        TransformData::with_name(TransformType::Camera, "Camera", &cfg).expect("camera schema");
    let next = hold_key(20.0);
    let mut cur = hold_key(10.0);

    let err = cur
        .update_tangent(Some(&prev), Some(&next), 0.0, 1.0, 2.0)
        .expect_err("layout mismatch");
    assert!(matches!(err, KeyframeError::SchemaMismatch { .. }));
}

/// it should treat kinds without tangents as a no-op
#[test]
fn kinds_without_tangents_are_skipped() {
    let cfg = KeyframeConfig::default();
    let mut fog = TransformData::with_name(TransformType::DistanceFog, "fog", &cfg).expect("fog");
    assert!(!fog.has_tangent());
    fog.update_tangent(None, None, 0.0, 0.0, 0.0)
        .expect("no-op update");

    // Camera tangents are off until the toggle is enabled.
    let mut camera = TransformData::with_name(TransformType::Camera, "Camera", &cfg).expect("cam");
    camera
        .update_tangent(None, None, 0.0, 1.0, 2.0)
        .expect("no-op update");
}

/// it should solve every camera channel once the toggle is on
#[test]
fn camera_track_fixture_updates_middle_key() {
    let cfg: KeyframeConfig =
        motion_test_fixtures::configs::load("tangent-camera").expect("load config");
    let records: Vec<TransformRecord> =
        motion_test_fixtures::records::load("camera-track").expect("load records");
    let frames = motion_test_fixtures::records::frames("camera-track")
        .expect("frames lookup")
        .expect("track frames");

    let keys: Vec<TransformData> = records
        .iter()
        .map(|r| TransformData::from_record(r, &cfg).expect("camera record"))
        .collect();
    let mut mid = keys[1].clone();
    assert!(mid.has_tangent());
    assert!(!mid.has_easing());

    mid.update_tangent(Some(&keys[0]), Some(&keys[2]), frames[0], frames[1], frames[2])
        .expect("update");

    // x: 0, 2, 4 and ry: 0, 45, 90 are linear.
    let x = &mid.values()[0];
    approx(x.in_tangent.normalized_value, 1.0, 1e-6);
    approx(x.out_tangent.normalized_value, 1.0, 1e-6);
    let ry = &mid.values()[4];
    approx(ry.in_tangent.normalized_value, 1.0, 1e-6);
    approx(ry.out_tangent.value(), 1.5, 1e-6);

    // y: 1, 1, 1.5 gets the nudge on its flat side.
    let y = &mid.values()[1];
    assert!(y.in_tangent.normalized_value > 0.0);
    assert!(y.out_tangent.normalized_value > 0.0);

    // fov: 35, 35, 30 falls, so the nudge points down and the ratio stays positive.
    let fov = &mid.values()[8];
    assert!(fov.in_tangent.value() < 0.0);
    assert!(fov.out_tangent.value() < 0.0);
}

/// it should leave non-smooth presets alone
#[test]
fn linear_preset_is_not_recomputed() {
    let cfg = KeyframeConfig {
        default_tangent_type: TangentType::Linear,
        ..KeyframeConfig::default()
    };
    let make = |x: f32| {
        let mut data = TransformData::with_name(TransformType::IKHold, "HandR", &cfg).expect("ik");
        data.set_position([x, 0.0, 0.0]);
        data
    };
    let prev = make(0.0);
    let next = make(1.0);
    let mut cur = make(10.0);
    cur.update_tangent(Some(&prev), Some(&next), 0.0, 1.0, 2.0)
        .expect("update");

    let TangentPair {
        in_tangent,
        out_tangent,
        ..
    } = TangentType::Linear.default_pair();
    assert_eq!(x_tangents(&cur), (in_tangent, out_tangent));
    approx(cur.values()[0].out_tangent.value(), -9.0, 1e-6);
}

/// it should fall back to a flat tangent when the slope ratio overflows
#[test]
fn tiny_and_huge_slopes_stay_finite() {
    let prev = hold_key(0.0);
    let next = hold_key(1e30);
    let mut cur = hold_key(1e-30);

    cur.update_tangent(Some(&prev), Some(&next), 0.0, 1.0, 2.0)
        .expect("update");

    let (tin, tout) = x_tangents(&cur);
    assert_eq!(tin, 0.0);
    approx(tout, 0.5, 1e-6);
    assert!(cur.values()[0].in_tangent.value().is_finite());
    assert!(cur.values()[0].out_tangent.value().is_finite());
}

/// Small everyday values mixed with magnitudes up to a quarter of `f32::MAX`.
fn key_value() -> impl Strategy<Value = f32> {
    prop_oneof![
        -1000.0f32..1000.0,
        (f32::MIN_POSITIVE..f32::MAX / 4.0, any::<bool>())
            .prop_map(|(magnitude, negative)| if negative { -magnitude } else { magnitude }),
    ]
}

proptest! {
    #[test]
    fn tangents_stay_finite(
        x0 in key_value(),
        x1 in key_value(),
        x2 in key_value(),
        repeat in 0usize..3,
        t0 in 0u32..500,
        d0 in 1u32..200,
        d1 in 1u32..200,
    ) {
        // Force equal neighbors now and then.
        let (x0, x2) = match repeat {
            1 => (x1, x2),
            2 => (x0, x1),
            _ => (x0, x2),
        };
        let prev = hold_key(x0);
        let next = hold_key(x2);
        let mut cur = hold_key(x1);
        let t0 = t0 as f32;
        let t1 = t0 + d0 as f32;
        let t2 = t1 + d1 as f32;

        prop_assert!(cur.update_tangent(Some(&prev), Some(&next), t0, t1, t2).is_ok());
        for cell in cur.values() {
            prop_assert!(cell.in_tangent.normalized_value.is_finite());
            prop_assert!(cell.out_tangent.normalized_value.is_finite());
            prop_assert!(cell.in_tangent.value().is_finite());
            prop_assert!(cell.out_tangent.value().is_finite());
        }
    }
}
