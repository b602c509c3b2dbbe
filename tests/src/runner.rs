/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Runner behavior shared by all presets
use instafilter_core::colorspace::ColorSpace;
use instafilter_image::errors::ImageErrors;
use instafilter_image::geometry::Region;
use instafilter_image::host::LoggingHost;
use instafilter_image::image::Image;
use instafilter_image::pipelines::{CancelToken, RunOptions};
use instafilter_image::traits::HostLayer;
use instafilter_procs::presets::Preset;

use crate::{apply, random_image};

#[test]
fn threads_do_not_change_the_output() {
    for preset in Preset::ALL {
        let mut sequential = random_image(37, 29, ColorSpace::RGBA, 1234);
        let mut threaded = sequential.clone();

        let single = apply(&preset.default_config(), &mut sequential, 1);
        let multi = apply(&preset.default_config(), &mut threaded, 6);

        assert_eq!(single.pixels, multi.pixels);
        assert_eq!(single.rows, 29);
        assert_eq!(sequential.as_bytes(), threaded.as_bytes(), "{preset}");
    }
}

#[test]
fn whole_layer_is_reported_updated() {
    let mut image = random_image(8, 5, ColorSpace::RGB, 5);
    apply(&Preset::Chicago.default_config(), &mut image, 1);

    assert_eq!(image.last_update(), Some(Region::full(8, 5)));
}

#[test]
fn cancelled_run_closes_the_undo_group() {
    let token = CancelToken::new();
    token.cancel();

    let mut image = random_image(8, 5, ColorSpace::RGB, 6);
    let original = image.clone();
    let pipeline = Preset::Ghost.default_config().pipeline().unwrap();
    let mut host = LoggingHost::new();

    let failure = pipeline
        .run_with_options(
            &mut image,
            &mut host,
            &RunOptions::new().set_cancel_token(token)
        )
        .unwrap_err();

    assert!(matches!(failure.cause, ImageErrors::Cancelled));
    assert_eq!(host.open_undo_groups(), 0);
    assert_eq!(host.messages().len(), 1);
    assert_eq!(image.as_bytes(), original.as_bytes());
}
