/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A per-pixel filter engine
//!
//! This crate applies an ordered list of color transforms, called stages,
//! to every pixel of a layer owned by a host application.
//!
//! - [`pipelines`] holds the runner
//! - [`traits`] defines the seams, [`PixelStage`](traits::PixelStage) for
//!   transforms and [`HostLayer`](traits::HostLayer) / [`Host`](traits::Host)
//!   for the application owning the pixels
//! - [`image`] is an in-memory layer, [`host`] a headless host
//!
//! Concrete stages and presets live in `instafilter-procs`.
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
    clippy::missing_panics_doc
)]

pub mod errors;
pub mod geometry;
pub mod host;
pub mod image;
pub mod pipelines;
pub mod pixel;
pub mod traits;
