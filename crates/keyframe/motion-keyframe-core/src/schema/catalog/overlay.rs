use crate::schema::builder::{plain, ranged};
use crate::schema::{Group, Schema, SchemaBuilder, TransformType};

/// Last attach point of a placed image (right lower leg).
const LAST_ATTACH_POINT: f32 = 18.0;

pub(super) fn text() -> Schema {
    SchemaBuilder::new(TransformType::Text, 20)
        .str_value_count(2)
        .position([0, 1, 2])
        .euler_angles([3, 4, 5])
        .scale([6, 7, 8])
        .color(&[9, 10, 11, 12])
        .easing(13)
        .customs([
            plain("index", 14, "Index", 0.0),
            plain("fontSize", 15, "Size", 50.0),
            plain("lineSpacing", 16, "Line spacing", 50.0),
            plain("alignment", 17, "Alignment", 4.0),
            plain("sizeDeltaX", 18, "Width", 1000.0),
            plain("sizeDeltaY", 19, "Height", 1000.0),
        ])
        .str_value("text", 0, "Text")
        .str_value("font", 1, "Font")
        .build()
}

/// Image placed in the scene. Keys are lowercase as stored by the placement
/// plugin.
pub(super) fn png_object() -> Schema {
    SchemaBuilder::new(TransformType::PngObject, 31)
        .position([0, 1, 2])
        .euler_angles([3, 4, 5])
        .color(&[6, 7, 8, 9])
        .visible(10)
        .tangents(&[Group::Position, Group::EulerAngles], &[13, 20])
        .customs([
            ranged("inversion", 11, "Mirror", 0.0, 1.0, 1.0, 0.0),
            ranged("stoprotation", 12, "Stop camera rotation", 0.0, 1.0, 1.0, 0.0),
            ranged("scalex", 13, "Scale", 0.0, 10.0, 0.01, 1.0),
            ranged("scalemag", 14, "Scale factor", 1.0, 100.0, 1.0, 1.0),
            ranged("fixcamera", 15, "Fix to camera", 0.0, 1.0, 1.0, 0.0),
            ranged("attach", 16, "Attach", 0.0, LAST_ATTACH_POINT, 1.0, 0.0),
            ranged("attachrotation", 17, "Follow camera rotation", 0.0, 1.0, 1.0, 0.0),
            ranged("brightness", 18, "Brightness", 0.0, 255.0, 1.0, 255.0),
            ranged("scalez", 19, "SZ", 0.0, 10.0, 0.01, 1.0),
            ranged("primitivereferencex", 20, "primitivereferencex", 0.0, 1.0, 1.0, 1.0),
            ranged("squareuv", 21, "squareuv", 0.0, 1.0, 1.0, 0.0),
            ranged("maid", 22, "maid", -1.0, 10.0, 1.0, -1.0),
            ranged("apngspeed", 23, "ASpeed", 0.0, 5.0, 0.01, 1.0),
            ranged("apngisfixedspeed", 24, "Fixed speed", 0.0, 1.0, 1.0, 0.0),
            ranged("stoprotationvx", 25, "SRX", -180.0, 180.0, 0.1, 0.0),
            ranged("stoprotationvy", 26, "SRY", -180.0, 180.0, 0.1, 0.0),
            ranged("stoprotationvz", 27, "SRZ", -180.0, 180.0, 0.1, 0.0),
            ranged("fixedposx", 28, "FX", -100.0, 100.0, 0.01, 0.0),
            ranged("fixedposy", 29, "FY", -100.0, 100.0, 0.01, 0.0),
            ranged("fixedposz", 30, "FZ", -100.0, 100.0, 0.01, 0.0),
        ])
        .build()
}
