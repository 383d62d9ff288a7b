use serde::{Deserialize, Serialize};

/// Transform kind tag. Discriminants are the integers stored by older
/// timeline files and must not be renumbered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i32)]
pub enum TransformType {
    #[default]
    None = 0,
    Animation = 1,
    BG,
    BGColor,
    BGGroundColor,
    BGModel,
    Camera,
    DepthOfField,
    DistanceFog,
    Dress,
    ExtendBone,
    Eyes,
    FingerBlend,
    Grounding,
    IKHold,
    Light,
    LookAtTarget,
    Model,
    ModelBone,
    ModelShapeKey,
    ModelMaterial,
    Move,
    Paraffin,
    PsylliumArea,
    PsylliumBar,
    PsylliumController,
    PsylliumHand,
    PsylliumPattern,
    PsylliumTransform,
    Rimlight,
    Root,
    Rotation,
    ShapeKey,
    StageLaser,
    StageLaserController,
    StageLight,
    StageLightController,
    Undress,
    Voice,
    GTToneMap,

    Morph = 1000,
    Se,
    Text,

    PngObject = 2000,
}

impl TransformType {
    pub const ALL: [TransformType; 44] = [
        TransformType::None,
        TransformType::Animation,
        TransformType::BG,
        TransformType::BGColor,
        TransformType::BGGroundColor,
        TransformType::BGModel,
        TransformType::Camera,
        TransformType::DepthOfField,
        TransformType::DistanceFog,
        TransformType::Dress,
        TransformType::ExtendBone,
        TransformType::Eyes,
        TransformType::FingerBlend,
        TransformType::Grounding,
        TransformType::IKHold,
        TransformType::Light,
        TransformType::LookAtTarget,
        TransformType::Model,
        TransformType::ModelBone,
        TransformType::ModelShapeKey,
        TransformType::ModelMaterial,
        TransformType::Move,
        TransformType::Paraffin,
        TransformType::PsylliumArea,
        TransformType::PsylliumBar,
        TransformType::PsylliumController,
        TransformType::PsylliumHand,
        TransformType::PsylliumPattern,
        TransformType::PsylliumTransform,
        TransformType::Rimlight,
        TransformType::Root,
        TransformType::Rotation,
        TransformType::ShapeKey,
        TransformType::StageLaser,
        TransformType::StageLaserController,
        TransformType::StageLight,
        TransformType::StageLightController,
        TransformType::Undress,
        TransformType::Voice,
        TransformType::GTToneMap,
        TransformType::Morph,
        TransformType::Se,
        TransformType::Text,
        TransformType::PngObject,
    ];

    #[inline]
    pub fn tag(self) -> i32 {
        self as i32
    }

    pub fn from_tag(tag: i32) -> Option<TransformType> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_stable() {
        assert_eq!(TransformType::Animation.tag(), 1);
        assert_eq!(TransformType::Camera.tag(), 6);
        assert_eq!(TransformType::Voice.tag(), 38);
        assert_eq!(TransformType::Text.tag(), 1002);
        assert_eq!(TransformType::from_tag(2000), Some(TransformType::PngObject));
        assert_eq!(TransformType::GTToneMap.tag(), 39);
        assert_eq!(TransformType::from_tag(40), None);
    }

    #[test]
    fn serializes_by_name() {
        let json = serde_json::to_string(&TransformType::DistanceFog).expect("serialize");
        assert_eq!(json, "\"DistanceFog\"");
    }
}
