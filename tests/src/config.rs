/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Loading preset parameters through the JSON surface
use instafilter_core::colorspace::ColorSpace;
use instafilter_image::errors::ImageErrors;
use instafilter_procs::presets::chicago::ChicagoParams;
use instafilter_procs::presets::geneva::GenevaParams;
use instafilter_procs::presets::{Preset, PresetConfig};

use crate::{apply, random_image};

#[test]
fn tagged_configs_parse() {
    let configs = r#"[
        {"preset": "andromeda", "alpha": 1.2, "bluize": 0},
        {"preset": "chicago", "sepiacolor": [200, 220, 190]},
        {"preset": "geneva"},
        {"preset": "ghost", "whiteoutside": 0},
        {"preset": "sixities"}
    ]"#;
    let configs: Vec<PresetConfig> = serde_json::from_str(configs).unwrap();

    let presets: Vec<Preset> = configs.iter().map(PresetConfig::preset).collect();
    assert_eq!(presets, Preset::ALL);

    assert_eq!(
        configs[1],
        PresetConfig::Chicago(ChicagoParams {
            sepiacolor: [200, 220, 190],
            ..ChicagoParams::default()
        })
    );
    assert!(configs.iter().all(|x| x.validate().is_ok()));
}

#[test]
fn configs_survive_serialization() {
    for preset in Preset::ALL {
        let config = preset.default_config();
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(serde_json::from_str::<PresetConfig>(&json).unwrap(), config);
    }
}

#[test]
fn unknown_fields_are_rejected() {
    let result = serde_json::from_str::<PresetConfig>(r#"{"preset": "sixities", "alpha": 1.0}"#);
    assert!(result.is_err());

    let result = serde_json::from_str::<PresetConfig>(r#"{"preset": "instant"}"#);
    assert!(result.is_err());
}

#[test]
fn out_of_range_values_never_run() {
    let cases = [
        (Preset::Andromeda, serde_json::json!({ "beta": -256 })),
        (Preset::Andromeda, serde_json::json!({ "greenoutside": 12.5 })),
        (Preset::Chicago, serde_json::json!({ "redshift": -1 })),
        (Preset::Geneva, serde_json::json!({ "blackoutside": 1000 })),
        (Preset::Ghost, serde_json::json!({ "whiteoutside": 255.5 }))
    ];

    for (preset, json) in cases {
        let config = preset.config_from(json).unwrap();

        let err = config.pipeline().unwrap_err();
        assert!(
            matches!(err, ImageErrors::InvalidParameter { .. }),
            "{preset}: {err:?}"
        );
    }
}

#[test]
fn invalid_parameter_message_names_the_parameter() {
    let config = Preset::Chicago
        .config_from(serde_json::json!({ "whiteoutside": 300 }))
        .unwrap();
    let message = config.validate().unwrap_err().to_string();

    assert!(message.contains("Chicago"), "{message}");
    assert!(message.contains("whiteoutside"), "{message}");
}

#[test]
fn geneva_ignores_alpha_and_beta() {
    let tuned = PresetConfig::Geneva(GenevaParams {
        alpha: 3.0,
        beta: 50.0,
        ..GenevaParams::default()
    });

    let mut with_defaults = random_image(13, 9, ColorSpace::RGB, 77);
    let mut with_overrides = with_defaults.clone();

    apply(&Preset::Geneva.default_config(), &mut with_defaults, 1);
    apply(&tuned, &mut with_overrides, 1);

    assert_eq!(with_defaults.as_bytes(), with_overrides.as_bytes());
}
