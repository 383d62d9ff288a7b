use motion_keyframe_core::{
    CustomValueType, KeyframeConfig, KeyframeError, TangentValueType, TransformData,
    TransformType,
};

fn make(kind: TransformType, name: &str) -> TransformData {
    TransformData::with_name(kind, name, &KeyframeConfig::default()).expect("schema")
}

/// it should read back what was written through a named key
#[test]
fn fog_start_round_trips() {
    let mut fog = make(TransformType::DistanceFog, "DistanceFog");
    assert_eq!(fog.custom_value("fogStart").value(), 0.0);
    fog.set_custom_value("fogStart", 12.5);
    assert_eq!(fog.custom_value("fogStart").value(), 12.5);
    assert_eq!(fog.values()[10].value(), 12.5);

    fog.try_set_custom_value("fogEnd", 80.0).expect("declared key");
    assert_eq!(fog.try_custom_value("fogEnd").expect("declared key").value(), 80.0);
}

/// it should degrade to a zero cell for undeclared keys
#[test]
fn unknown_key_reads_zero() {
    let mut fog = make(TransformType::DistanceFog, "DistanceFog");
    let before = fog.values().to_vec();

    assert_eq!(fog.custom_value("fogDensity").value(), 0.0);
    fog.set_custom_value("fogDensity", 3.0);
    assert_eq!(fog.values(), before.as_slice());
    assert!(fog.custom_value_mut("fogDensity").is_none());
    assert!(fog.custom_value_info("fogDensity").is_none());
    assert_eq!(fog.custom_value_name("fogDensity"), "fogDensity");
    assert_eq!(fog.default_custom_value("fogDensity"), 0.0);
    assert!(!fog.has_custom_value("fogDensity"));

    assert_eq!(
        fog.try_custom_value("fogDensity").err(),
        Some(KeyframeError::UnknownCustomValue {
            kind: TransformType::DistanceFog,
            key: "fogDensity".to_string(),
        })
    );
    assert!(fog.try_set_custom_value("fogDensity", 1.0).is_err());
}

/// it should expose display metadata for declared keys
#[test]
fn metadata_comes_from_the_schema() {
    let fog = make(TransformType::DistanceFog, "DistanceFog");
    let info = fog.custom_value_info("fogEnd").expect("fogEnd");
    assert_eq!(info.index, 11);
    assert_eq!((info.min, info.max, info.step), (0.0, 100.0, 0.1));
    assert_eq!(info.value_type(), CustomValueType::FloatSlider);
    assert_eq!(fog.custom_value_name("fogEnd"), "End depth");
    assert_eq!(fog.default_custom_value("fogEnd"), 50.0);
}

/// it should bound the focal length slider by the configured range
#[test]
fn focal_length_follows_position_range() {
    let cfg = KeyframeConfig {
        position_range: 25.0,
        ..KeyframeConfig::default()
    };
    let dof = TransformData::with_name(TransformType::DepthOfField, "DepthOfField", &cfg)
        .expect("dof");
    assert_eq!(dof.custom_value_info("focalLength").expect("focal").max, 25.0);
    assert_eq!(dof.custom_value_info("aperture").expect("aperture").max, 60.0);

    let dof = make(TransformType::DepthOfField, "DepthOfField");
    assert_eq!(dof.custom_value_info("focalLength").expect("focal").max, 5.0);
}

/// it should share bool and int views with the float slot
#[test]
fn typed_views_over_custom_cells() {
    let mut grounding = make(TransformType::Grounding, "Grounding");
    let cell = grounding
        .custom_value_mut("isGroundingFootL")
        .expect("declared key");
    cell.set_bool(true);
    assert_eq!(grounding.custom_value("isGroundingFootL").value(), 1.0);

    let mut light = make(TransformType::Light, "Light");
    light.set_custom_value("maidSlotNo", 2.9);
    assert_eq!(light.custom_value("maidSlotNo").as_int(), 2);
    light.reset();
    assert_eq!(light.custom_value("maidSlotNo").as_int(), -1);
}

/// it should look up string slots by key
#[test]
fn string_values_by_key() {
    let mut dress = make(TransformType::Dress, "Dress");
    assert!(dress.has_str_value("propName"));
    dress.set_str_value("propName", "acchat_z_heart");
    assert_eq!(dress.str_value("propName"), "acchat_z_heart");
    assert_eq!(dress.str_value_name("propName"), "Prop name");

    assert_eq!(dress.str_value("menu"), "");
    assert_eq!(dress.str_value_name("menu"), "menu");
    dress.set_str_value("menu", "ignored");
    assert_eq!(dress.str_values(), &["acchat_z_heart".to_string()]);
    assert!(matches!(
        dress.try_set_str_value("menu", "x"),
        Err(KeyframeError::UnknownStrValue { .. })
    ));
    assert_eq!(dress.try_str_value("propName"), Ok("acchat_z_heart"));
}

/// it should map coarse selectors to concrete slots
#[test]
fn selectors_pick_channel_subsets() {
    let mut root = make(TransformType::Root, "Bip01");
    assert_eq!(root.value_indices(TangentValueType::Move), vec![4, 5, 6]);
    assert_eq!(root.value_indices(TangentValueType::Rotation), vec![0, 1, 2, 3]);
    assert_eq!(root.value_indices(TangentValueType::RW), vec![3]);
    assert_eq!(root.value_indices(TangentValueType::Y), vec![5]);
    assert!(root.value_indices(TangentValueType::Scale).is_empty());
    assert_eq!(root.value_indices(TangentValueType::All).len(), 7);

    for cell in root.value_data_list_mut(TangentValueType::Move) {
        cell.set_value(2.0);
    }
    assert_eq!(root.position(), [2.0, 2.0, 2.0]);
    assert_eq!(root.in_tangent_list(TangentValueType::Rotation).len(), 4);

    // Euler kinds answer rotation selectors from their euler slots.
    let camera = make(TransformType::Camera, "Camera");
    assert_eq!(camera.value_indices(TangentValueType::RY), vec![4]);
    assert!(camera.value_indices(TangentValueType::RW).is_empty());
    assert_eq!(camera.value_indices(TangentValueType::SZ), vec![9]);

    let fog = make(TransformType::DistanceFog, "DistanceFog");
    assert!(fog.value_data_list(TangentValueType::Rotation).is_empty());
    assert!(fog.value_data_list(TangentValueType::All).is_empty());
    assert!(fog.out_tangent_list(TangentValueType::X).is_empty());
}

/// it should list tangent and base cells in schema order
#[test]
fn tangent_and_base_subsets() {
    let controller = make(TransformType::StageLaserController, "StageLaserController");
    let tangent_slots = controller.schema().tangent_indices();
    assert_eq!(
        tangent_slots,
        &[0, 1, 2, 3, 4, 5, 31, 32, 33, 34, 35, 36, 15, 16, 17]
    );
    assert_eq!(controller.tangent_values().len(), 15);
    assert_eq!(controller.base_values().len(), 6);
}

/// it should name every material color channel
#[test]
fn material_colors_are_addressable() {
    let mut material = make(TransformType::ModelMaterial, "body/_MainTex");
    material.reset();
    for (key, index, default) in [
        ("ShadowColor.r", 4, 0.0),
        ("OutlineColor.b", 12, 0.0),
        ("EmissionColor.g", 18, 1.0),
        ("ReflectionColor.b", 25, 1.0),
    ] {
        assert!(material.has_custom_value(key), "{key}");
        let info = material.custom_value_info(key).expect("declared");
        assert_eq!(info.index, index);
        assert_eq!(info.value_type(), CustomValueType::FloatValue);
        assert_eq!(material.custom_value(key).value(), default, "{key}");
    }
    assert_eq!(material.schema().custom_values().len(), 34);

    material.set_custom_value("ShadowColor.r", 0.4);
    assert_eq!(material.values()[4].value(), 0.4);
    material.reset();
    assert_eq!(material.values()[4].value(), 0.0);
}

/// it should restore the laser controller batch flags on reset
#[test]
fn laser_controller_auto_position() {
    let mut controller = make(TransformType::StageLaserController, "StageLaserController");
    controller.reset();
    assert!(controller.has_custom_value("autoPosition"));
    assert_eq!(controller.custom_value("autoPosition").value(), 1.0);
    controller.set_custom_value("autoPosition", 0.0);
    assert_eq!(controller.values()[25].value(), 0.0);
    controller.reset();
    assert!(controller.custom_value("autoPosition").as_bool());
}
