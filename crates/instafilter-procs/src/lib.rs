/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Color transform stages and filter presets for `instafilter-image`
//!
//! Every stage implements the `PixelStage` trait defined by instafilter-image,
//! the presets in [`presets`] chain them into ready made filters.
//!
//! # Example
//! - Apply Chicago with a stronger white fade
//! ```
//! use instafilter_core::colorspace::ColorSpace;
//! use instafilter_image::host::LoggingHost;
//! use instafilter_image::image::Image;
//! use instafilter_image::pixel::Pixel;
//! use instafilter_procs::presets::chicago::ChicagoParams;
//! use instafilter_procs::presets::FilterPreset;
//!
//! let mut image = Image::fill(Pixel::rgba(128, 128, 128, 7), ColorSpace::RGBA, 100, 100);
//! let params = ChicagoParams {
//!     whiteoutside: 200.0,
//!     ..ChicagoParams::default()
//! };
//! // execute the filter
//! params.pipeline().unwrap().run(&mut image, &mut LoggingHost::new()).unwrap();
//! assert_eq!(image.pixel(0, 0).unwrap().a, Some(7));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod channel_shift;
pub mod cubic_tone;
pub mod desaturate;
pub mod linear_map;
pub mod params;
pub mod presets;
pub mod radial_blend;
pub mod sepia;
pub mod stage;
