/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits at the seams of the engine
//!
//! - [`PixelStage`] is implemented by every color transform a pipeline can hold
//! - [`HostLayer`] and [`Host`] are implemented by whatever owns the pixels,
//!   the undo stack and the progress bar
use instafilter_core::colorspace::ColorSpace;

use crate::errors::ImageErrors;
use crate::geometry::{PixelContext, Region};
use crate::pixel::{Pixel, Rgb};

/// This encapsulates a single per-pixel color transform.
///
/// All transforms that can be stored in a pipeline
/// need to implement this trait.
///
/// Stages are pure, they receive the working color produced by the
/// previous stage and return a new one. Values outside `0..=255` are
/// expected, clamping happens once after the last stage.
pub trait PixelStage: Send + Sync {
    /// Get the name of this stage
    fn name(&self) -> &'static str;

    /// Transform one pixel
    ///
    /// # Arguments
    /// - rgb: Working color produced by the previous stage
    /// - ctx: Position and distance information of the pixel
    fn apply(&self, rgb: Rgb, ctx: &PixelContext) -> Rgb;
}

/// A layer owned by the host application
///
/// The engine borrows the layer mutably for the duration of one run and
/// writes every pixel exactly once.
pub trait HostLayer {
    /// Name shown in progress messages
    fn name(&self) -> &str;

    /// Get layer dimensions as a tuple of (width,height)
    fn dimensions(&self) -> (usize, usize);

    /// Get the colorspace the layer stores its pixels in
    fn colorspace(&self) -> ColorSpace;

    /// Read pixel `(x, y)`
    ///
    /// # Errors
    /// Host specific, e.g. the coordinate lies outside the layer
    fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, ImageErrors>;

    /// Replace pixel `(x, y)`
    ///
    /// # Errors
    /// Host specific, e.g. the coordinate lies outside the layer
    fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), ImageErrors>;

    /// Tell the host that `region` changed and should be redrawn
    fn notify_updated(&mut self, region: Region);

    /// Direct access to the interleaved samples, row by row
    ///
    /// Layers returning `Some` allow the engine to process disjoint row
    /// bands on several threads. The default keeps all access going
    /// through [`get_pixel`](HostLayer::get_pixel) and
    /// [`set_pixel`](HostLayer::set_pixel).
    fn interleaved_mut(&mut self) -> Option<&mut [u8]> {
        None
    }
}

/// Undo, progress and diagnostics services of the host application
pub trait Host {
    /// Open an undo group so the run is undone in one step
    fn begin_undo_group(&mut self);

    /// Close the undo group opened by [`begin_undo_group`](Host::begin_undo_group)
    fn end_undo_group(&mut self);

    /// Start a progress indicator with `message`
    fn progress_init(&mut self, message: &str);

    /// Report progress, a fraction in `0.0..=1.0` that never decreases
    fn progress_update(&mut self, fraction: f64);

    /// Finish the progress indicator
    fn progress_end(&mut self);

    /// Show a message to the user
    fn message(&mut self, message: &str);
}
