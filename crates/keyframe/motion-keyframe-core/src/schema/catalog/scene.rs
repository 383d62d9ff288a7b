use crate::config::TangentToggle;
use crate::schema::builder::{plain, ranged};
use crate::schema::{CustomValueInfo, Schema, SchemaBuilder, TransformType};

pub(super) fn bg() -> Schema {
    SchemaBuilder::new(TransformType::BG, 9)
        .position([0, 1, 2])
        .euler_angles([3, 4, 5])
        .scale([6, 7, 8])
        .build()
}

pub(super) fn bg_color() -> Schema {
    SchemaBuilder::new(TransformType::BGColor, 3)
        .color(&[0, 1, 2])
        .initial(|init| init.color = [0.0, 0.0, 0.0, 1.0])
        .build()
}

pub(super) fn bg_ground_color() -> Schema {
    SchemaBuilder::new(TransformType::BGGroundColor, 10)
        .position([0, 1, 2])
        .scale([3, 4, 5])
        .color(&[6, 7, 8])
        .visible(9)
        .initial(|init| {
            init.scale = [100.0, 100.0, 100.0];
            init.color = [0.0, 0.0, 0.0, 1.0];
        })
        .build()
}

pub(super) fn bg_model() -> Schema {
    SchemaBuilder::new(TransformType::BGModel, 11)
        .position([0, 1, 2])
        .rotation([3, 4, 5, 6])
        .scale([7, 8, 9])
        .visible(10)
        .tangents_base()
        .build()
}

/// Scale carries distance, field of view and an unused slot.
pub(super) fn camera() -> Schema {
    SchemaBuilder::new(TransformType::Camera, 10)
        .position([0, 1, 2])
        .euler_angles([3, 4, 5])
        .easing(6)
        .scale([7, 8, 9])
        .tangents_all()
        .toggled_by(TangentToggle::Camera)
        .initial(|init| init.scale = [1.0, 35.0, 0.0])
        .build()
}

pub(super) fn light() -> Schema {
    SchemaBuilder::new(TransformType::Light, 18)
        .position([0, 1, 2])
        .rotation([3, 4, 5, 6])
        .color(&[7, 8, 9])
        .easing(10)
        .visible(17)
        .tangents_all()
        .toggled_by(TangentToggle::Light)
        .customs([
            plain("range", 11, "Range", 3.0),
            plain("intensity", 12, "Intensity", 0.95),
            plain("spotAngle", 13, "Spot angle", 50.0),
            plain("shadowStrength", 14, "Shadow strength", 0.1),
            plain("shadowBias", 15, "Shadow bias", 0.01),
            plain("maidSlotNo", 16, "Follow", -1.0),
        ])
        .build()
}

pub(super) fn model() -> Schema {
    SchemaBuilder::new(TransformType::Model, 10)
        .position([0, 1, 2])
        .euler_angles([3, 4, 5])
        .scale([6, 7, 8])
        .easing(9)
        .build()
}

pub(super) fn model_bone() -> Schema {
    SchemaBuilder::new(TransformType::ModelBone, 10)
        .position([0, 1, 2])
        .euler_angles([3, 4, 5])
        .scale([6, 7, 8])
        .easing(9)
        .rest_pose()
        .build()
}

pub(super) fn model_shape_key() -> Schema {
    SchemaBuilder::new(TransformType::ModelShapeKey, 2)
        .easing(0)
        .tangents_all()
        .toggled_by(TangentToggle::ModelShapeKey)
        .custom(plain("weight", 1, "Weight", 0.0))
        .build()
}

/// RGB channels of one material color property, edited as free floats.
fn material_color(
    keys: [&'static str; 3],
    names: [&'static str; 3],
    first: usize,
    default: f32,
) -> [CustomValueInfo; 3] {
    [0, 1, 2].map(|i| plain(keys[i], first + i, names[i], default))
}

pub(super) fn model_material() -> Schema {
    SchemaBuilder::new(TransformType::ModelMaterial, 38)
        .easing(0)
        .color(&[1, 2, 3])
        .customs(material_color(
            ["ShadowColor.r", "ShadowColor.g", "ShadowColor.b"],
            ["Shadow R", "Shadow G", "Shadow B"],
            4,
            0.0,
        ))
        .customs(material_color(
            ["RimColor.r", "RimColor.g", "RimColor.b"],
            ["Rim R", "Rim G", "Rim B"],
            7,
            0.0,
        ))
        .customs(material_color(
            ["OutlineColor.r", "OutlineColor.g", "OutlineColor.b"],
            ["Outline R", "Outline G", "Outline B"],
            10,
            0.0,
        ))
        .customs(material_color(
            ["EmissionColor.r", "EmissionColor.g", "EmissionColor.b"],
            ["Emission R", "Emission G", "Emission B"],
            17,
            1.0,
        ))
        .customs(material_color(
            ["MatcapColor.r", "MatcapColor.g", "MatcapColor.b"],
            ["Matcap R", "Matcap G", "Matcap B"],
            20,
            1.0,
        ))
        .customs(material_color(
            ["ReflectionColor.r", "ReflectionColor.g", "ReflectionColor.b"],
            ["Reflection R", "Reflection G", "Reflection B"],
            23,
            1.0,
        ))
        .customs([
            ranged("_Shininess", 13, "_Shininess", 0.0, 10.0, 0.01, 0.0),
            ranged("_OutlineWidth", 14, "_OutlineWidth", 0.0, 1.0, 0.0001, 0.0),
            ranged("_RimPower", 15, "_RimPower", 0.0, 100.0, 0.01, 0.0),
            ranged("_RimShift", 16, "_RimShift", 0.0, 10.0, 0.01, 0.0),
            ranged("_NormalValue", 26, "Normal map strength", 0.0, 1.0, 0.01, 0.0),
            ranged("_ParallaxValue", 27, "Parallax strength", 0.0, 1.0, 0.01, 0.0),
            ranged("_MatcapValue", 28, "Matcap strength", 0.0, 1.0, 0.01, 0.0),
            ranged("_MatcapMaskValue", 29, "Matcap mask strength", 0.0, 1.0, 0.01, 0.0),
            ranged("_EmissionValue", 30, "Emission strength", 0.0, 1.0, 0.01, 0.0),
            ranged("_EmissionHDRExposure", 31, "Emission HDR exposure", 0.0, 3.0, 0.01, 0.0),
            ranged("_EmissionPower", 32, "Emission power", -3.0, 3.0, 0.01, 0.0),
            ranged("_RimLightValue", 33, "Rim light strength", 0.0, 1.0, 0.01, 0.0),
            ranged("_RimLightPower", 34, "Rim light power", -3.0, 3.0, 0.01, 0.0),
            ranged("_MetallicValue", 35, "Metallic", 0.0, 1.0, 0.01, 0.0),
            ranged("_SmoothnessValue", 36, "Smoothness", 0.0, 1.0, 0.01, 0.0),
            ranged("_OcclusionValue", 37, "Occlusion", 0.0, 1.0, 0.01, 0.0),
        ])
        .build()
}
