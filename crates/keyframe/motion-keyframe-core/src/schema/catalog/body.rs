use crate::config::TangentToggle;
use crate::schema::builder::{plain, ranged};
use crate::schema::{Group, Schema, SchemaBuilder, TransformType};

pub(super) fn animation() -> Schema {
    SchemaBuilder::new(TransformType::Animation, 6)
        .str_value_count(1)
        .easing(0)
        .customs([
            ranged("StartTime", 1, "Start time", 0.0, 10.0, 0.01, 0.0),
            ranged("Weight", 2, "Weight", 0.0, 1.0, 0.01, 1.0),
            ranged("Speed", 3, "Speed", 0.0, 2.0, 0.01, 1.0),
            ranged("Loop", 4, "Loop", 0.0, 1.0, 1.0, 1.0),
            ranged("OverrideTime", 5, "Override time", 0.0, 1.0, 1.0, 0.0),
        ])
        .str_value("AnmName", 0, "Animation name")
        .build()
}

/// `rid` uses a degenerate range so editors treat it as an integer field.
pub(super) fn dress() -> Schema {
    SchemaBuilder::new(TransformType::Dress, 1)
        .str_value_count(1)
        .custom(ranged(
            "rid",
            0,
            "RID",
            i32::MIN as f32,
            i32::MIN as f32,
            1.0,
            0.0,
        ))
        .str_value("propName", 0, "Prop name")
        .build()
}

pub(super) fn extend_bone() -> Schema {
    SchemaBuilder::new(TransformType::ExtendBone, 10)
        .rotation([0, 1, 2, 3])
        .position([4, 5, 6])
        .scale([7, 8, 9])
        .tangents_all()
        .rest_pose()
        .build()
}

pub(super) fn eyes() -> Schema {
    SchemaBuilder::new(TransformType::Eyes, 3)
        .easing(0)
        .customs([
            plain("horizon", 1, "Horizontal", 0.0),
            plain("vertical", 2, "Vertical", 0.0),
        ])
        .build()
}

pub(super) fn finger_blend() -> Schema {
    SchemaBuilder::new(TransformType::FingerBlend, 17)
        .customs([
            plain("value_open", 0, "Open", 0.0),
            plain("value_fist", 1, "Fist", 0.0),
            plain("lock_enabled0", 2, "Lock (thumb)", 0.0),
            plain("lock_enabled1", 3, "Lock (index)", 0.0),
            plain("lock_enabled2", 4, "Lock (middle)", 0.0),
            plain("lock_enabled3", 5, "Lock (ring)", 0.0),
            plain("lock_enabled4", 6, "Lock (little)", 0.0),
            plain("lock_value_open0", 7, "Open (thumb)", 0.0),
            plain("lock_value_open1", 8, "Open (index)", 0.0),
            plain("lock_value_open2", 9, "Open (middle)", 0.0),
            plain("lock_value_open3", 10, "Open (ring)", 0.0),
            plain("lock_value_open4", 11, "Open (little)", 0.0),
            plain("lock_value_fist0", 12, "Fist (thumb)", 0.0),
            plain("lock_value_fist1", 13, "Fist (index)", 0.0),
            plain("lock_value_fist2", 14, "Fist (middle)", 0.0),
            plain("lock_value_fist3", 15, "Fist (ring)", 0.0),
            plain("lock_value_fist4", 16, "Fist (little)", 0.0),
        ])
        .build()
}

pub(super) fn grounding() -> Schema {
    SchemaBuilder::new(TransformType::Grounding, 7)
        .customs([
            plain("isGroundingFootL", 0, "Ground left foot", 0.0),
            plain("floorHeight", 1, "Floor height", 0.0),
            plain("footBaseOffset", 2, "Ankle height", 0.05),
            plain("footStretchHeight", 3, "Stretch height", 0.1),
            plain("footStretchAngle", 4, "Stretch angle", 45.0),
            plain("footGroundAngle", 5, "Grounded angle", 90.0),
            plain("isGroundingFootR", 6, "Ground right foot", 0.0),
        ])
        .build()
}

pub(super) fn ik_hold() -> Schema {
    SchemaBuilder::new(TransformType::IKHold, 5)
        .position([0, 1, 2])
        .tangents(&[Group::Position], &[])
        .customs([
            plain("isHold", 3, "IK hold", 0.0),
            plain("isAnime", 4, "IK animation", 0.0),
        ])
        .global()
        .build()
}

pub(super) fn look_at_target() -> Schema {
    SchemaBuilder::new(TransformType::LookAtTarget, 3)
        .customs([
            plain("targetType", 0, "Target", 0.0),
            plain("targetIndex", 1, "Target index", 0.0),
            plain("maidPointType", 2, "Point", 0.0),
        ])
        .build()
}

pub(super) fn motion() -> Schema {
    SchemaBuilder::new(TransformType::Move, 10)
        .position([0, 1, 2])
        .euler_angles([3, 4, 5])
        .easing(6)
        .scale([7, 8, 9])
        .tangents_base()
        .toggled_by(TangentToggle::Motion)
        .build()
}

pub(super) fn root() -> Schema {
    SchemaBuilder::new(TransformType::Root, 7)
        .rotation([0, 1, 2, 3])
        .position([4, 5, 6])
        .tangents_all()
        .rest_pose()
        .build()
}

pub(super) fn rotation() -> Schema {
    SchemaBuilder::new(TransformType::Rotation, 4)
        .rotation([0, 1, 2, 3])
        .tangents_all()
        .rest_pose()
        .hidden_by_bone_key()
        .build()
}

pub(super) fn shape_key() -> Schema {
    SchemaBuilder::new(TransformType::ShapeKey, 2)
        .easing(0)
        .custom(plain("weight", 1, "Weight", 0.0))
        .build()
}

pub(super) fn undress() -> Schema {
    SchemaBuilder::new(TransformType::Undress, 1)
        .custom(plain("isVisible", 0, "Visible", 0.0))
        .build()
}

pub(super) fn voice() -> Schema {
    SchemaBuilder::new(TransformType::Voice, 4)
        .str_value_count(2)
        .customs([
            plain("startTime", 0, "Start", 0.0),
            plain("length", 1, "Length", 0.0),
            plain("fadeTime", 2, "Fade", 0.1),
            plain("pitch", 3, "Pitch", 1.0),
        ])
        .str_value("voiceName", 0, "Voice name")
        .str_value("loopVoiceName", 1, "Loop voice")
        .build()
}

pub(super) fn morph() -> Schema {
    SchemaBuilder::new(TransformType::Morph, 1)
        .custom(plain("morphValue", 0, "Value", 0.0))
        .build()
}

pub(super) fn se() -> Schema {
    SchemaBuilder::new(TransformType::Se, 2)
        .str_value_count(1)
        .customs([
            plain("interval", 0, "Interval", 0.0),
            plain("isLoop", 1, "Loop", 0.0),
        ])
        .str_value("fileName", 0, "Sound name")
        .build()
}
