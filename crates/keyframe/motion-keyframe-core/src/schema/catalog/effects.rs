use crate::schema::builder::{plain, ranged};
use crate::schema::{CustomValueInfo, Schema, SchemaBuilder, TransformType};

const TRANSPARENT_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 0.0];

/// Blend weights shared by the screen-space effects, in slot order.
fn blend_weights(first: usize, defaults: [f32; 5]) -> [CustomValueInfo; 5] {
    [
        ranged("useNormal", first, "Normal", 0.0, 2.0, 0.01, defaults[0]),
        ranged("useAdd", first + 1, "Add", 0.0, 2.0, 0.01, defaults[1]),
        ranged("useMultiply", first + 2, "Multiply", 0.0, 2.0, 0.01, defaults[2]),
        ranged("useOverlay", first + 3, "Overlay", 0.0, 2.0, 0.01, defaults[3]),
        ranged("useSubstruct", first + 4, "Subtract", 0.0, 2.0, 0.01, defaults[4]),
    ]
}

pub(super) fn depth_of_field() -> Schema {
    SchemaBuilder::new(TransformType::DepthOfField, 7)
        .easing(0)
        .visible(1)
        .customs([
            CustomValueInfo {
                max_from_position_range: true,
                ..ranged("focalLength", 2, "Focus distance", 0.0, 5.0, 0.1, 10.0)
            },
            ranged("focalSize", 3, "Focal size", 0.0, 2.0, 0.01, 0.05),
            ranged("aperture", 4, "Aperture", 0.0, 60.0, 0.1, 11.5),
            ranged("maxBlurSize", 5, "Blur size", 0.0, 10.0, 0.1, 2.0),
            plain("maidSlotNo", 6, "Follow", -1.0),
        ])
        .build()
}

pub(super) fn distance_fog() -> Schema {
    SchemaBuilder::new(TransformType::DistanceFog, 18)
        .color(&[0, 1, 2, 3])
        .sub_color(&[4, 5, 6, 7])
        .visible(8)
        .easing(9)
        .initial(|init| init.sub_color = TRANSPARENT_WHITE)
        .customs([
            ranged("fogStart", 10, "Start depth", 0.0, 100.0, 0.1, 0.0),
            ranged("fogEnd", 11, "End depth", 0.0, 100.0, 0.1, 50.0),
            ranged("fogExp", 12, "Exponent", 0.0, 5.0, 0.01, 1.0),
        ])
        .customs(blend_weights(13, [1.0, 0.0, 0.0, 0.0, 0.0]))
        .build()
}

pub(super) fn gt_tone_map() -> Schema {
    SchemaBuilder::new(TransformType::GTToneMap, 8)
        .visible(0)
        .easing(1)
        .initial(|init| init.visible = false)
        .customs([
            ranged("maxBrightness", 2, "MaxBrightness", 1.0, 100.0, 0.1, 1.0),
            ranged("contrast", 3, "Contrast", 0.0, 5.0, 0.01, 1.0),
            ranged("linearStart", 4, "LinearStart", 0.0, 1.0, 0.01, 0.22),
            ranged("linearLength", 5, "LinearLength", 0.0, 1.0, 0.01, 0.4),
            ranged("blackTightness", 6, "BlackTightness", 1.0, 3.0, 0.01, 1.33),
            ranged("blackOffset", 7, "BlackOffset", 0.0, 1.0, 0.01, 0.0),
        ])
        .build()
}

pub(super) fn paraffin() -> Schema {
    SchemaBuilder::new(TransformType::Paraffin, 24)
        .color(&[0, 1, 2, 3])
        .sub_color(&[4, 5, 6, 7])
        .visible(8)
        .easing(9)
        .initial(|init| init.sub_color = TRANSPARENT_WHITE)
        .customs([
            ranged("centerPositionX", 10, "X", -1.0, 2.0, 0.01, 0.5),
            ranged("centerPositionY", 11, "Y", -1.0, 2.0, 0.01, 0.5),
            ranged("radiusFar", 12, "Outer radius", 0.0, 1.0, 0.01, 1.0),
            ranged("radiusNear", 13, "Inner radius", 0.0, 1.0, 0.01, 1.0),
            ranged("radiusScaleX", 14, "SX", 0.0, 5.0, 0.01, 1.0),
            ranged("radiusScaleY", 15, "SY", 0.0, 5.0, 0.01, 1.0),
        ])
        .customs(blend_weights(16, [0.0, 1.0, 0.0, 0.0, 0.0]))
        .customs([
            ranged("depthMin", 21, "Min depth", 0.0, 100.0, 0.1, 0.0),
            ranged("depthMax", 22, "Max depth", 0.0, 100.0, 0.1, 0.0),
            ranged("depthFade", 23, "Depth fade", 0.0, 10.0, 0.01, 0.0),
        ])
        .build()
}

pub(super) fn rimlight() -> Schema {
    SchemaBuilder::new(TransformType::Rimlight, 28)
        .euler_angles([0, 1, 2])
        .color(&[3, 4, 5, 6])
        .sub_color(&[7, 8, 9, 10])
        .visible(11)
        .easing(12)
        .initial(|init| init.sub_color = TRANSPARENT_WHITE)
        .customs([
            ranged("lightArea", 13, "Area", 0.0, 2.0, 0.01, 1.0),
            ranged("fadeRange", 14, "Fade width", 0.0, 2.0, 0.01, 0.2),
            ranged("fadeExp", 15, "Exponent", 0.0, 5.0, 0.01, 1.0),
            ranged("depthMin", 16, "Min depth", 0.0, 100.0, 0.1, 0.0),
            ranged("depthMax", 17, "Max depth", 0.0, 100.0, 0.1, 5.0),
            ranged("depthFade", 18, "Depth fade", 0.0, 10.0, 0.01, 1.0),
        ])
        .customs(blend_weights(19, [0.0, 0.8, 0.0, 0.0, 0.0]))
        .customs([
            ranged("isWorldSpace", 24, "World space", 0.0, 1.0, 1.0, 0.0),
            ranged("edgeDepth", 25, "Edge depth", 0.0, 10.0, 0.01, 0.0),
            ranged("edgeRange", 26, "Edge width", 0.0, 10.0, 0.01, 0.0),
            ranged("heightMin", 27, "Min height", -10.0, 10.0, 0.01, 0.01),
        ])
        .build()
}
