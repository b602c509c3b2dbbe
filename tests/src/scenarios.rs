/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Known outputs for small images
use std::fs::read;

use instafilter_core::colorspace::ColorSpace;
use instafilter_image::image::Image;
use instafilter_image::pixel::Pixel;
use instafilter_procs::presets::Preset;

use crate::{apply, data_path, ScenarioEntry};

#[test]
fn test_scenarios() {
    let json_file = read(data_path().join("scenarios.json")).unwrap();
    let entries: Vec<ScenarioEntry> = serde_json::from_slice(&json_file).unwrap();

    let mut failures = Vec::new();

    for entry in &entries {
        let config = Preset::lookup(&entry.preset).unwrap().default_config();
        let mut image = Image::from_fn(entry.width, entry.height, ColorSpace::RGB, |x, y| {
            let [r, g, b] = entry.pixels[y * entry.width + x];
            Pixel::rgb(r, g, b)
        });

        apply(&config, &mut image, 1);

        let found: Vec<[u8; 3]> = image.pixels().map(|x| [x.r, x.g, x.b]).collect();

        if found != entry.expected {
            failures.push(format!(
                "{} ({}x{}, {:?})\nExpected {:?}\nbut found {:?}",
                entry.preset, entry.width, entry.height, entry.comment, entry.expected, found
            ));
        }
    }
    if !failures.is_empty() {
        panic!("{}", failures.join("\n\n"));
    }
}

#[test]
fn chicago_brightens_with_distance() {
    let (width, height) = (9, 7);
    let mut image = Image::fill(Pixel::rgb(128, 128, 128), ColorSpace::RGB, width, height);

    apply(&Preset::Chicago.default_config(), &mut image, 1);

    let mut by_distance: Vec<(f64, Pixel)> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| {
            let dx = x as f64 - width as f64 / 2.0;
            let dy = y as f64 - height as f64 / 2.0;
            ((dx * dx + dy * dy).sqrt(), image.pixel(x, y).unwrap())
        })
        .collect();
    by_distance.sort_by(|a, b| a.0.total_cmp(&b.0));

    for pair in by_distance.windows(2) {
        let (near, far) = (pair[0].1, pair[1].1);

        assert!(near.r <= far.r && near.g <= far.g && near.b <= far.b);
    }
    let nearest = by_distance[0].1;
    let farthest = by_distance[by_distance.len() - 1].1;
    assert!(nearest.r < farthest.r && nearest.g < farthest.g && nearest.b < farthest.b);
}
