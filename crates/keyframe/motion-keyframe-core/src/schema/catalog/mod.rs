//! Built-in layouts, one constructor per kind.

mod body;
mod effects;
mod overlay;
mod scene;
mod stage;

use super::{Schema, TransformType};

pub(super) fn build(kind: TransformType) -> Option<Schema> {
    let schema = match kind {
        TransformType::Animation => body::animation(),
        TransformType::BG => scene::bg(),
        TransformType::BGColor => scene::bg_color(),
        TransformType::BGGroundColor => scene::bg_ground_color(),
        TransformType::BGModel => scene::bg_model(),
        TransformType::Camera => scene::camera(),
        TransformType::DepthOfField => effects::depth_of_field(),
        TransformType::DistanceFog => effects::distance_fog(),
        TransformType::Dress => body::dress(),
        TransformType::GTToneMap => effects::gt_tone_map(),
        TransformType::ExtendBone => body::extend_bone(),
        TransformType::Eyes => body::eyes(),
        TransformType::FingerBlend => body::finger_blend(),
        TransformType::Grounding => body::grounding(),
        TransformType::IKHold => body::ik_hold(),
        TransformType::Light => scene::light(),
        TransformType::LookAtTarget => body::look_at_target(),
        TransformType::Model => scene::model(),
        TransformType::ModelBone => scene::model_bone(),
        TransformType::ModelShapeKey => scene::model_shape_key(),
        TransformType::ModelMaterial => scene::model_material(),
        TransformType::Morph => body::morph(),
        TransformType::Move => body::motion(),
        TransformType::Paraffin => effects::paraffin(),
        TransformType::PngObject => overlay::png_object(),
        TransformType::PsylliumArea => stage::psyllium_area(),
        TransformType::PsylliumBar => stage::psyllium_bar(),
        TransformType::PsylliumController => stage::psyllium_controller(),
        TransformType::PsylliumHand => stage::psyllium_hand(),
        TransformType::PsylliumPattern => stage::psyllium_pattern(),
        TransformType::PsylliumTransform => stage::psyllium_transform(),
        TransformType::Rimlight => effects::rimlight(),
        TransformType::Root => body::root(),
        TransformType::Rotation => body::rotation(),
        TransformType::Se => body::se(),
        TransformType::ShapeKey => body::shape_key(),
        TransformType::StageLaser => stage::stage_laser(),
        TransformType::StageLaserController => stage::stage_laser_controller(),
        TransformType::StageLight => stage::stage_light(),
        TransformType::StageLightController => stage::stage_light_controller(),
        TransformType::Text => overlay::text(),
        TransformType::Undress => body::undress(),
        TransformType::Voice => body::voice(),
        TransformType::None => return None,
    };
    Some(schema)
}
