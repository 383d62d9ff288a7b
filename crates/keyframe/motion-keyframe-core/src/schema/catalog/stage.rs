use crate::schema::builder::ranged;
use crate::schema::{CustomValueInfo, Group, Schema, SchemaBuilder, TransformType};

const LASER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
const LASER_SUB_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 0.1];
const SPOT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.3];
const SPOT_EULER: [f32; 3] = [90.0, 0.0, 0.0];

/// Beam shape values shared by a laser and its controller, from `first`.
fn laser_shape(first: usize) -> [CustomValueInfo; 10] {
    [
        ranged("intensity", first, "Intensity", 0.0, 1.0, 0.01, 1.0),
        ranged("laserRange", first + 1, "Range", 0.0, 100.0, 0.1, 13.0),
        ranged("laserWidth", first + 2, "Width", 0.0, 2.0, 0.01, 0.05),
        ranged("falloffExp", first + 3, "Falloff exponent", 0.0, 5.0, 0.01, 0.2),
        ranged("noiseStrength", first + 4, "Noise strength", 0.0, 1.0, 0.01, 0.1),
        ranged("noiseScale", first + 5, "Noise scale", 1.0, 100.0, 0.1, 10.0),
        ranged("coreRadius", first + 6, "Core radius", 0.0, 1.0, 0.01, 0.0),
        ranged("offsetRange", first + 7, "Offset range", 0.0, 10.0, 0.1, 0.0),
        ranged("glowWidth", first + 8, "Glow width", 0.0, 5.0, 0.01, 0.1),
        ranged("segmentRange", first + 9, "Segment range", 1.0, 64.0, 1.0, 10.0),
    ]
}

/// Cone shape values shared by a spot light and its controller, from `first`.
fn spot_shape(first: usize) -> [CustomValueInfo; 10] {
    [
        ranged("spotAngle", first, "Angle", 1.0, 179.0, 0.1, 10.0),
        ranged("spotRange", first + 1, "Range", 0.0, 100.0, 0.1, 10.0),
        ranged("rangeMultiplier", first + 2, "Range multiplier", 0.0, 1.0, 0.01, 0.8),
        ranged("falloffExp", first + 3, "Falloff exponent", 0.0, 5.0, 0.01, 0.5),
        ranged("noiseStrength", first + 4, "Noise strength", 0.0, 1.0, 0.01, 0.1),
        ranged("noiseScale", first + 5, "Noise scale", 1.0, 100.0, 0.1, 10.0),
        ranged("coreRadius", first + 6, "Core radius", 0.0, 1.0, 0.01, 0.2),
        ranged("offsetRange", first + 7, "Offset range", 0.0, 10.0, 0.1, 0.5),
        ranged("segmentAngle", first + 8, "Segment angle", 1.0, 64.0, 1.0, 10.0),
        ranged("segmentRange", first + 9, "Segment range", 1.0, 64.0, 1.0, 10.0),
    ]
}

fn z_test(index: usize) -> CustomValueInfo {
    ranged("zTest", index, "Z test", 0.0, 1.0, 1.0, 1.0)
}

fn toggle(key: &'static str, index: usize, name: &'static str, default: f32) -> CustomValueInfo {
    ranged(key, index, name, 0.0, 1.0, 1.0, default)
}

pub(super) fn stage_laser() -> Schema {
    SchemaBuilder::new(TransformType::StageLaser, 24)
        .euler_angles([1, 2, 3])
        .color(&[4, 5, 6, 7])
        .sub_color(&[8, 9, 10, 11])
        .visible(12)
        .tangents(&[Group::EulerAngles], &[13, 14, 15])
        .initial(|init| {
            init.color = LASER_COLOR;
            init.sub_color = LASER_SUB_COLOR;
        })
        .customs(laser_shape(13))
        .custom(z_test(23))
        .build()
}

pub(super) fn stage_laser_controller() -> Schema {
    SchemaBuilder::new(TransformType::StageLaserController, 37)
        .position([0, 1, 2])
        .euler_angles([3, 4, 5])
        .color(&[6, 7, 8, 9])
        .sub_color(&[10, 11, 12, 13])
        .visible(14)
        .tangents(
            &[Group::Position, Group::EulerAngles],
            &[31, 32, 33, 34, 35, 36, 15, 16, 17],
        )
        .initial(|init| {
            init.color = LASER_COLOR;
            init.sub_color = LASER_SUB_COLOR;
        })
        .customs(laser_shape(15))
        .customs([
            // Declared for old files; the controller no longer reads it.
            toggle("autoPosition", 25, "Batch position", 1.0),
            toggle("autoRotation", 26, "Batch rotation", 1.0),
            toggle("autoColor", 27, "Batch color", 1.0),
            toggle("autoLaserInfo", 28, "Batch info", 1.0),
            toggle("autoVisible", 29, "Batch visible", 1.0),
            z_test(30),
            ranged("rotationMinX", 31, "Min RX", -180.0, 180.0, 0.1, 0.0),
            ranged("rotationMinY", 32, "Min RY", -180.0, 180.0, 0.1, 0.0),
            ranged("rotationMinZ", 33, "Min RZ", -180.0, 180.0, 0.1, 0.0),
            ranged("rotationMaxX", 34, "Max RX", -180.0, 180.0, 0.1, 0.0),
            ranged("rotationMaxY", 35, "Max RY", -180.0, 180.0, 0.1, 0.0),
            ranged("rotationMaxZ", 36, "Max RZ", -180.0, 180.0, 0.1, 0.0),
        ])
        .build()
}

/// Slot 6 is unused.
pub(super) fn stage_light() -> Schema {
    SchemaBuilder::new(TransformType::StageLight, 23)
        .position([0, 1, 2])
        .euler_angles([3, 4, 5])
        .color(&[7, 8, 9, 10])
        .visible(11)
        .tangents(&[Group::Position, Group::EulerAngles], &[12, 13])
        .initial(|init| {
            init.position = [0.0, 10.0, 0.0];
            init.euler_angles = SPOT_EULER;
            init.color = SPOT_COLOR;
        })
        .customs(spot_shape(12))
        .custom(z_test(22))
        .build()
}

pub(super) fn stage_light_controller() -> Schema {
    SchemaBuilder::new(TransformType::StageLightController, 37)
        .position([0, 1, 2])
        .sub_position([3, 4, 5])
        .euler_angles([6, 7, 8])
        .sub_euler_angles([9, 10, 11])
        .color(&[12, 13, 14, 15])
        .sub_color(&[16, 17, 18, 19])
        .visible(20)
        .tangents(
            &[
                Group::Position,
                Group::SubPosition,
                Group::EulerAngles,
                Group::SubEulerAngles,
            ],
            &[21, 22],
        )
        .initial(|init| {
            init.position = [-5.0, 10.0, 0.0];
            init.sub_position = [5.0, 10.0, 0.0];
            init.euler_angles = SPOT_EULER;
            init.sub_euler_angles = SPOT_EULER;
            init.color = SPOT_COLOR;
            init.sub_color = SPOT_COLOR;
        })
        .customs(spot_shape(21))
        .customs([
            toggle("autoPosition", 31, "Batch position", 0.0),
            toggle("autoRotation", 32, "Batch rotation", 0.0),
            toggle("autoColor", 33, "Batch color", 0.0),
            toggle("autoLightInfo", 34, "Batch info", 0.0),
            toggle("autoVisible", 35, "Batch visible", 0.0),
            z_test(36),
        ])
        .build()
}

pub(super) fn psyllium_controller() -> Schema {
    SchemaBuilder::new(TransformType::PsylliumController, 7)
        .position([0, 1, 2])
        .euler_angles([3, 4, 5])
        .visible(6)
        .initial(|init| {
            init.position = [0.0, 0.0, 10.0];
            init.euler_angles = [0.0, 180.0, 0.0];
        })
        .build()
}

fn color_channels(
    keys: [&'static str; 4],
    names: [&'static str; 4],
    first: usize,
    rgba: [f32; 4],
) -> [CustomValueInfo; 4] {
    [0, 1, 2, 3].map(|i| ranged(keys[i], first + i, names[i], 0.0, 1.0, 0.01, rgba[i]))
}

pub(super) fn psyllium_bar() -> Schema {
    fn rgb8(r: f32, g: f32, b: f32, a: f32) -> [f32; 4] {
        [r / 255.0, g / 255.0, b / 255.0, a]
    }

    SchemaBuilder::new(TransformType::PsylliumBar, 31)
        .customs(color_channels(
            ["color1aR", "color1aG", "color1aB", "color1aA"],
            ["Core 1 R", "Core 1 G", "Core 1 B", "Core 1 A"],
            0,
            rgb8(246.0, 250.0, 59.0, 1.0),
        ))
        .customs(color_channels(
            ["color1bR", "color1bG", "color1bB", "color1bA"],
            ["Rim 1 R", "Rim 1 G", "Rim 1 B", "Rim 1 A"],
            4,
            rgb8(255.0, 161.0, 45.0, 1.0),
        ))
        .customs(color_channels(
            ["color1cR", "color1cG", "color1cB", "color1cA"],
            ["Glow 1 R", "Glow 1 G", "Glow 1 B", "Glow 1 A"],
            8,
            rgb8(246.0, 250.0, 59.0, 127.0 / 255.0),
        ))
        .customs(color_channels(
            ["color2aR", "color2aG", "color2aB", "color2aA"],
            ["Core 2 R", "Core 2 G", "Core 2 B", "Core 2 A"],
            12,
            rgb8(229.0, 107.0, 252.0, 1.0),
        ))
        .customs(color_channels(
            ["color2bR", "color2bG", "color2bB", "color2bA"],
            ["Rim 2 R", "Rim 2 G", "Rim 2 B", "Rim 2 A"],
            16,
            rgb8(101.0, 39.0, 163.0, 1.0),
        ))
        .customs(color_channels(
            ["color2cR", "color2cG", "color2cB", "color2cA"],
            ["Glow 2 R", "Glow 2 G", "Glow 2 B", "Glow 2 A"],
            20,
            rgb8(229.0, 107.0, 252.0, 127.0 / 255.0),
        ))
        .customs([
            ranged("baseScale", 24, "Scale", 0.0, 5.0, 0.01, 1.0),
            ranged("width", 25, "Width", 0.0, 5.0, 0.01, 0.14),
            ranged("height", 26, "Height", 0.0, 5.0, 0.01, 0.2),
            ranged("positionY", 27, "Y", 0.0, 5.0, 0.01, 0.1),
            ranged("radius", 28, "Radius", 0.0, 1.0, 0.01, 0.07),
            ranged("topThreshold", 29, "Top threshold", 0.0, 1.0, 0.01, 0.23),
            ranged("cutoffAlpha", 30, "Alpha cutoff", 0.0, 1.0, 0.01, 0.5),
        ])
        .build()
}

pub(super) fn psyllium_hand() -> Schema {
    SchemaBuilder::new(TransformType::PsylliumHand, 7)
        .customs([
            ranged("handSpacing", 0, "Hand spacing", 0.0, 10.0, 0.01, 0.37),
            ranged("barOffsetPositionX", 1, "X", -1.0, 1.0, 0.01, 0.03),
            ranged("barOffsetPositionY", 2, "Y", -1.0, 1.0, 0.01, 0.0),
            ranged("barOffsetPositionZ", 3, "Z", -1.0, 1.0, 0.01, 0.0),
            ranged("barOffsetRotationX", 4, "RX", -180.0, 180.0, 0.1, 0.0),
            ranged("barOffsetRotationY", 5, "RY", -180.0, 180.0, 0.1, 0.0),
            ranged("barOffsetRotationZ", 6, "RZ", -180.0, 180.0, 0.1, -20.0),
        ])
        .build()
}

/// Largest seed an editor slider accepts.
const MAX_SEED: f32 = i32::MAX as f32;

/// Seating block the psyllium crowd is spread over.
pub(super) fn psyllium_area() -> Schema {
    const PATTERN_WEIGHTS: [&str; 10] = [
        "patternWeight0",
        "patternWeight1",
        "patternWeight2",
        "patternWeight3",
        "patternWeight4",
        "patternWeight5",
        "patternWeight6",
        "patternWeight7",
        "patternWeight8",
        "patternWeight9",
    ];
    const PATTERN_NAMES: [&str; 10] = ["P0", "P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8", "P9"];

    SchemaBuilder::new(TransformType::PsylliumArea, 30)
        .position([0, 1, 2])
        .euler_angles([3, 4, 5])
        .initial(|init| init.position = [0.0, 0.0, 11.0])
        .customs([
            ranged("sizeX", 6, "SX", 0.0, 100.0, 0.1, 10.0),
            ranged("sizeY", 7, "SY", 0.0, 100.0, 0.1, 10.0),
            ranged("seatDistanceX", 8, "Seat width", 0.0, 10.0, 0.01, 1.0),
            ranged("seatDistanceY", 9, "Row width", 0.0, 10.0, 0.01, 1.0),
            ranged("randomPositionRangeX", 10, "X Random", 0.0, 10.0, 0.01, 0.05),
            ranged("randomPositionRangeY", 11, "Y Random", 0.0, 10.0, 0.01, 0.05),
            ranged("randomPositionRangeZ", 12, "Z Random", 0.0, 10.0, 0.01, 0.05),
            ranged("barCountWeight0", 13, "0 bars", 0.0, 1.0, 0.01, 0.5),
            ranged("barCountWeight1", 14, "1 bar", 0.0, 1.0, 0.01, 0.7),
            ranged("barCountWeight2", 15, "2 bars", 0.0, 1.0, 0.01, 0.05),
            ranged("barCountWeight3", 16, "3 bars", 0.0, 1.0, 0.01, 0.05),
            ranged("colorWeight1", 17, "Color 1", 0.0, 1.0, 0.01, 0.175),
            ranged("colorWeight2", 18, "Color 2", 0.0, 1.0, 0.01, 0.5),
        ])
        .customs(
            PATTERN_WEIGHTS
                .iter()
                .zip(PATTERN_NAMES)
                .enumerate()
                .map(|(i, (&key, name))| ranged(key, 19 + i, name, 0.0, 1.0, 0.01, 1.0)),
        )
        .custom(ranged("randomSeed", 29, "Random seed", 0.0, MAX_SEED, 1.0, 0.0))
        .build()
}

/// Random sway applied to every bar; position and euler hold the ranges.
pub(super) fn psyllium_pattern() -> Schema {
    SchemaBuilder::new(TransformType::PsylliumPattern, 11)
        .position([0, 1, 2])
        .euler_angles([3, 4, 5])
        .initial(|init| {
            init.position = [0.1, 0.1, 0.1];
            init.euler_angles = [5.0, 0.0, 10.0];
        })
        .customs([
            ranged("timeCount", 6, "T Count", 1.0, 100.0, 1.0, 1.0),
            ranged("timeRange", 7, "T Range", 0.0, 1.0, 0.01, 0.05),
            ranged("timeShiftMin", 8, "Shift min", 0.0, 10.0, 0.1, 0.5),
            ranged("timeShiftMax", 9, "Shift max", 0.0, 10.0, 0.1, 1.5),
            ranged("randomSeed", 10, "Random seed", 0.0, MAX_SEED, 1.0, 0.0),
        ])
        .build()
}

/// Left and right hand poses of one pattern step. Euler keys are kept as
/// authored so a swing past 180 degrees is not unwrapped.
pub(super) fn psyllium_transform() -> Schema {
    const HAND_POSITION: [f32; 3] = [0.0, 0.3, -0.5];
    const HAND_EULER: [f32; 3] = [-10.0, 0.0, 0.0];

    SchemaBuilder::new(TransformType::PsylliumTransform, 12)
        .position([0, 1, 2])
        .sub_position([3, 4, 5])
        .euler_angles([6, 7, 8])
        .sub_euler_angles([9, 10, 11])
        .tangents_all()
        .keep_rotation()
        .initial(|init| {
            init.position = HAND_POSITION;
            init.sub_position = HAND_POSITION;
            init.euler_angles = HAND_EULER;
            init.sub_euler_angles = HAND_EULER;
        })
        .build()
}
