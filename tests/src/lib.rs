/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::path::{Path, PathBuf};

use instafilter_core::colorspace::ColorSpace;
use instafilter_image::host::LoggingHost;
use instafilter_image::image::Image;
use instafilter_image::pipelines::{RunOptions, RunReport};
use instafilter_image::pixel::Pixel;
use instafilter_procs::presets::PresetConfig;
use nanorand::{Rng, WyRand};
use serde::Deserialize;

mod config;
mod properties;
mod runner;
mod scenarios;

#[derive(Clone, Deserialize, Debug)]
pub struct ScenarioEntry {
    pub preset:   String,
    pub comment:  Option<String>,
    pub width:    usize,
    pub height:   usize,
    pub pixels:   Vec<[u8; 3]>,
    pub expected: Vec<[u8; 3]>
}

pub fn data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// A reproducible image filled with random samples
pub fn random_image(width: usize, height: usize, colorspace: ColorSpace, seed: u64) -> Image {
    let mut pixels = vec![0_u8; width * height * colorspace.num_components()];
    WyRand::new_seed(seed).fill(&mut pixels);

    Image::from_raw(pixels, width, height, colorspace).unwrap()
}

/// Run `config` over `image` with a headless host
pub fn apply(config: &PresetConfig, image: &mut Image, threads: usize) -> RunReport {
    let pipeline = config.pipeline().unwrap();
    let options = RunOptions::new().set_threads(threads);

    pipeline
        .run_with_options(image, &mut LoggingHost::new(), &options)
        .unwrap()
}
