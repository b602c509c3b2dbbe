/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Invariants that hold for every preset and any input
use instafilter_core::colorspace::ColorSpace;
use instafilter_image::host::LoggingHost;
use instafilter_image::image::Image;
use instafilter_image::pipelines::Pipeline;
use instafilter_image::pixel::{Channel, Pixel};
use instafilter_procs::channel_shift::ChannelShift;
use instafilter_procs::desaturate::Desaturate;
use instafilter_procs::presets::Preset;
use instafilter_procs::radial_blend::RadialBlend;

use crate::{apply, random_image};

#[test]
fn alpha_passes_through_every_preset() {
    for preset in Preset::ALL {
        let original = random_image(31, 17, ColorSpace::RGBA, 0x5eed);
        let mut image = original.clone();

        apply(&preset.default_config(), &mut image, 1);

        for (before, after) in original.pixels().zip(image.pixels()) {
            assert_eq!(before.a, after.a, "{preset} changed alpha");
        }
    }
}

#[test]
fn extreme_parameters_stay_in_range() {
    // every output is a u8, what matters is that saturating, not wrapping,
    // happened. Push everything to white and check nothing wrapped to black
    let json = serde_json::json!({ "alpha": 50.0, "beta": 255, "whiteoutside": 255 });
    let config = Preset::Ghost.config_from(json).unwrap();
    let mut image = random_image(16, 16, ColorSpace::RGB, 3);

    apply(&config, &mut image, 1);
    assert!(image.as_bytes().iter().all(|x| *x == 255));

    let json = serde_json::json!({ "alpha": -50.0, "beta": -255, "whiteoutside": 0 });
    let config = Preset::Ghost.config_from(json).unwrap();
    let mut image = random_image(16, 16, ColorSpace::RGB, 4);

    apply(&config, &mut image, 1);
    assert!(image.as_bytes().iter().all(|x| *x == 0));
}

#[test]
fn radial_blend_is_point_symmetric() {
    let (width, height) = (12, 8);
    let mut image = Image::fill(Pixel::rgb(100, 150, 200), ColorSpace::RGB, width, height);

    let mut pipeline = Pipeline::new("Vignette");
    pipeline.chain_stage(Box::new(RadialBlend::new(70.0, 90.0)));
    pipeline.run(&mut image, &mut LoggingHost::new()).unwrap();

    // the center is at (width / 2, height / 2), so x reflects onto width - x
    for y in 1..height {
        for x in 1..width {
            assert_eq!(
                image.pixel(x, y),
                image.pixel(width - x, height - y),
                "({x}, {y}) differs from its reflection"
            );
        }
    }
}

#[test]
fn centered_presets_are_point_symmetric() {
    let (width, height) = (10, 6);

    for preset in [Preset::Andromeda, Preset::Chicago, Preset::Geneva, Preset::Ghost] {
        let mut image = Image::fill(Pixel::rgb(60, 120, 180), ColorSpace::RGB, width, height);
        apply(&preset.default_config(), &mut image, 1);

        for y in 1..height {
            for x in 1..width {
                assert_eq!(image.pixel(x, y), image.pixel(width - x, height - y), "{preset}");
            }
        }
    }
}

#[test]
fn sixities_vignette_is_lopsided() {
    let (width, height) = (10, 6);
    let mut image = Image::fill(Pixel::rgb(60, 120, 180), ColorSpace::RGB, width, height);

    apply(&Preset::Sixities.default_config(), &mut image, 1);

    let asymmetric = (1..height)
        .flat_map(|y| (1..width).map(move |x| (x, y)))
        .any(|(x, y)| image.pixel(x, y) != image.pixel(width - x, height - y));
    assert!(asymmetric);
}

#[test]
fn single_channel_shift_keeps_gray_base() {
    let mut image = random_image(20, 20, ColorSpace::RGB, 11);

    let mut pipeline = Pipeline::new("Blue cast");
    pipeline
        .chain_stage(Box::new(Desaturate::new()))
        .chain_stage(Box::new(ChannelShift::outward(Channel::Blue, 80.0)));
    pipeline.run(&mut image, &mut LoggingHost::new()).unwrap();

    assert!(image.pixels().all(|x| x.r == x.g));
}

#[test]
fn gray_presets_keep_red_equal_to_green() {
    for preset in [Preset::Geneva, Preset::Ghost] {
        let mut image = random_image(20, 20, ColorSpace::RGB, 12);
        apply(&preset.default_config(), &mut image, 1);

        assert!(image.pixels().all(|x| x.r == x.g), "{preset}");
    }
    let mut image = random_image(20, 20, ColorSpace::RGB, 13);
    apply(&Preset::Ghost.default_config(), &mut image, 1);
    assert!(image.pixels().all(|x| x.g == x.b));
}

#[test]
fn second_application_changes_the_image() {
    for preset in Preset::ALL {
        let mut once = random_image(24, 24, ColorSpace::RGB, 21);
        apply(&preset.default_config(), &mut once, 1);

        let mut twice = once.clone();
        apply(&preset.default_config(), &mut twice, 1);

        assert_ne!(once.as_bytes(), twice.as_bytes(), "{preset} is idempotent");
    }
}

#[test]
fn single_pixel_layers() {
    for preset in Preset::ALL {
        let mut image = random_image(1, 1, ColorSpace::RGBA, 99);
        let alpha = image.pixel(0, 0).unwrap().a;

        let report = apply(&preset.default_config(), &mut image, 4);

        assert_eq!(report.pixels, 1);
        assert_eq!(image.pixel(0, 0).unwrap().a, alpha);
    }
}

#[test]
fn empty_layers_succeed() {
    for preset in Preset::ALL {
        let mut image = Image::fill(Pixel::rgb(1, 2, 3), ColorSpace::RGB, 0, 5);
        let report = apply(&preset.default_config(), &mut image, 1);

        assert_eq!(report.pixels, 0);
    }
}
