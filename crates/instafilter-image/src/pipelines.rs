/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pipelines, ordered per-pixel color transforms
//!
//! A pipeline owns an ordered list of [`PixelStage`]s and runs them over
//! every pixel of a host layer.
//!
//! A run
//! 1. Opens the progress indicator and an undo group
//! 2. Computes the layer [`Geometry`] once
//! 3. Visits pixels row by row, folding each one through every stage,
//!    clamping to `0..=255` and writing it back with alpha untouched
//! 4. Reports progress after every row
//! 5. Notifies the host of the updated region
//! 6. Closes the undo group and the progress indicator, whether the run
//!    succeeded or not
use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use instafilter_core::log::{debug, trace, warn};

use crate::errors::{ImageErrors, RunFailure};
use crate::geometry::{DistanceMode, Geometry, PixelContext, Region};
use crate::pixel::{Pixel, Rgb};
use crate::traits::{Host, HostLayer, PixelStage};

/// Outcome of a run
pub type RunResult = Result<RunReport, RunFailure>;

/// Summary of a successful run
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunReport {
    /// Pixels written
    pub pixels:  usize,
    /// Rows completed
    pub rows:    usize,
    /// Threads that shared the work
    pub threads: usize,
    pub elapsed: Duration
}

/// Cooperative cancellation for a run
///
/// The runner checks the token before starting each row, a cancelled run
/// stops at a row boundary and still closes its undo group.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }
    /// Ask every run holding this token to stop
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Options influencing how, but never what, a run computes
#[derive(Clone, Debug)]
pub struct RunOptions {
    threads: usize,
    cancel:  Option<CancelToken>
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            threads: 1,
            cancel:  None
        }
    }
}

impl RunOptions {
    pub fn new() -> RunOptions {
        RunOptions::default()
    }

    /// Set the number of threads sharing the pixel loop
    ///
    /// Only layers exposing their samples through
    /// [`HostLayer::interleaved_mut`] are processed on more than one thread.
    /// Zero is treated as one.
    #[must_use]
    pub fn set_threads(mut self, threads: usize) -> RunOptions {
        self.threads = threads.max(1);
        self
    }

    #[must_use]
    pub fn set_cancel_token(mut self, token: CancelToken) -> RunOptions {
        self.cancel = Some(token);
        self
    }

    pub const fn threads(&self) -> usize {
        self.threads
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

/// An ordered list of stages applied to every pixel of a layer
///
/// # Example
/// ```
/// use instafilter_core::colorspace::ColorSpace;
/// use instafilter_image::geometry::PixelContext;
/// use instafilter_image::host::LoggingHost;
/// use instafilter_image::image::Image;
/// use instafilter_image::pipelines::Pipeline;
/// use instafilter_image::pixel::{Pixel, Rgb};
/// use instafilter_image::traits::PixelStage;
///
/// struct Invert;
///
/// impl PixelStage for Invert {
///     fn name(&self) -> &'static str {
///         "invert"
///     }
///     fn apply(&self, rgb: Rgb, _: &PixelContext) -> Rgb {
///         rgb.map(|x| 255.0 - x)
///     }
/// }
///
/// let mut image = Image::fill(Pixel::rgb(0, 100, 255), ColorSpace::RGB, 4, 4);
/// let mut pipeline = Pipeline::new("Invert");
/// pipeline.chain_stage(Box::new(Invert));
///
/// pipeline.run(&mut image, &mut LoggingHost::new()).unwrap();
/// assert_eq!(image.pixel(0, 0), Some(Pixel::rgb(255, 155, 0)));
/// ```
pub struct Pipeline {
    name:          String,
    distance_mode: DistanceMode,
    stages:        Vec<Box<dyn PixelStage>>
}

impl Pipeline {
    /// Create a new empty pipeline
    ///
    /// `name` is used in progress messages, e.g. `Applying <name> filter to ...`
    pub fn new(name: impl Into<String>) -> Pipeline {
        Pipeline {
            name:          name.into(),
            distance_mode: DistanceMode::Centered,
            stages:        vec![]
        }
    }

    /// Add a new stage to the end of the pipeline.
    ///
    /// This is used as a way to chain multiple stages in a builder
    /// pattern style
    pub fn chain_stage(&mut self, stage: Box<dyn PixelStage>) -> &mut Pipeline {
        trace!("Pipeline `{}`: chained stage `{}`", self.name, stage.name());
        self.stages.push(stage);
        self
    }

    /// Set how per-pixel distances are measured for this pipeline
    pub fn set_distance_mode(&mut self, mode: DistanceMode) -> &mut Pipeline {
        self.distance_mode = mode;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn distance_mode(&self) -> DistanceMode {
        self.distance_mode
    }

    pub fn stages(&self) -> &[Box<dyn PixelStage>] {
        &self.stages
    }

    /// Run one pixel through every stage
    ///
    /// The color channels are clamped to `0..=255` after the last stage,
    /// alpha is carried over untouched.
    pub fn transform(&self, pixel: Pixel, ctx: &PixelContext) -> Pixel {
        let rgb = self
            .stages
            .iter()
            .fold(Rgb::from(pixel), |rgb, stage| stage.apply(rgb, ctx));

        let [r, g, b] = rgb.to_u8_saturating();

        Pixel { r, g, b, a: pixel.a }
    }

    /// Apply the pipeline to `layer` with default options
    ///
    /// See [`run_with_options`](Pipeline::run_with_options)
    pub fn run<L, H>(&self, layer: &mut L, host: &mut H) -> RunResult
    where
        L: HostLayer + ?Sized,
        H: Host + ?Sized
    {
        self.run_with_options(layer, host, &RunOptions::default())
    }

    /// Apply the pipeline to every pixel of `layer`
    ///
    /// The host undo group and progress indicator are always closed,
    /// on failure the host is also sent a message naming the pixel
    /// being processed and the cause.
    ///
    /// # Errors
    /// - The layer is not RGB or RGBA
    /// - The host failed to read or write a pixel
    /// - The run was cancelled
    ///
    /// Pixels written before a failure stay written.
    pub fn run_with_options<L, H>(&self, layer: &mut L, host: &mut H, options: &RunOptions) -> RunResult
    where
        L: HostLayer + ?Sized,
        H: Host + ?Sized
    {
        host.progress_init(&format!(
            "Applying {} filter to {}...",
            self.name,
            layer.name()
        ));
        host.begin_undo_group();

        let result = self.execute(layer, host, options);

        match &result {
            Ok(report) => {
                trace!(
                    "Finished running `{}` in {} ms",
                    self.name,
                    report.elapsed.as_millis()
                );
            }
            Err(failure) => {
                host.message(&failure.to_string());
            }
        }

        host.end_undo_group();
        host.progress_end();

        result
    }

    fn execute<L, H>(&self, layer: &mut L, host: &mut H, options: &RunOptions) -> RunResult
    where
        L: HostLayer + ?Sized,
        H: Host + ?Sized
    {
        let start = Instant::now();

        let components = layer.colorspace().num_components();

        let (width, height) = layer.dimensions();
        let geometry = Geometry::new(width, height);

        if width == 0 || height == 0 {
            warn!("Layer `{}` has no pixels, nothing to do", layer.name());
            host.progress_update(1.0);

            return Ok(RunReport {
                pixels:  0,
                rows:    0,
                threads: 1,
                elapsed: start.elapsed()
            });
        }

        debug!(
            "Geometry: {}x{}, center {:?}, max distance {}",
            width,
            height,
            geometry.center(),
            geometry.max_distance()
        );

        let mut threads = 1;

        #[cfg(feature = "threads")]
        {
            let wanted = options.threads().min(height);

            if wanted > 1 {
                if let Some(samples) = layer.interleaved_mut() {
                    trace!("Running `{}` on {} threads", self.name, wanted);
                    self.execute_threaded(samples, components, &geometry, wanted, host, options)?;
                    threads = wanted;
                }
            }
        }

        if threads == 1 {
            trace!("Running `{}` in single threaded mode", self.name);
            self.execute_sequential(layer, &geometry, host, options)?;
        }

        layer.notify_updated(Region::full(width, height));

        Ok(RunReport {
            pixels: width * height,
            rows: height,
            threads,
            elapsed: start.elapsed()
        })
    }

    #[allow(clippy::cast_precision_loss)]
    fn execute_sequential<L, H>(
        &self, layer: &mut L, geometry: &Geometry, host: &mut H, options: &RunOptions
    ) -> Result<(), RunFailure>
    where
        L: HostLayer + ?Sized,
        H: Host + ?Sized
    {
        let (width, height) = geometry.dimensions();

        for y in 0..height {
            if options.is_cancelled() {
                debug!("Run of `{}` cancelled before row {}", self.name, y);
                return Err(RunFailure::new(ImageErrors::Cancelled));
            }

            for x in 0..width {
                let pixel = layer
                    .get_pixel(x, y)
                    .map_err(|err| RunFailure::at(x, y, err))?;

                let ctx = geometry.context(x, y, self.distance_mode);
                let new_pixel = self.transform(pixel, &ctx);

                layer
                    .set_pixel(x, y, new_pixel)
                    .map_err(|err| RunFailure::at(x, y, err))?;
            }
            host.progress_update((y + 1) as f64 / height as f64);
        }
        Ok(())
    }

    /// Split the layer into bands of whole rows, one band per thread
    ///
    /// Workers send the index of every finished row back, the calling
    /// thread turns the count into progress updates.
    #[cfg(feature = "threads")]
    #[allow(clippy::cast_precision_loss)]
    fn execute_threaded<H>(
        &self, samples: &mut [u8], components: usize, geometry: &Geometry, threads: usize,
        host: &mut H, options: &RunOptions
    ) -> Result<(), RunFailure>
    where
        H: Host + ?Sized
    {
        let (width, height) = geometry.dimensions();
        let row_len = width * components;

        if samples.len() != row_len * height {
            return Err(RunFailure::new(ImageErrors::DimensionsMisMatch(
                row_len * height,
                samples.len()
            )));
        }

        let rows_per_band = height.div_ceil(threads);
        let mut completed = 0_usize;

        std::thread::scope(|s| {
            let (sender, receiver) = std::sync::mpsc::channel::<usize>();

            for (band, chunk) in samples.chunks_mut(row_len * rows_per_band).enumerate() {
                let sender = sender.clone();

                s.spawn(move || {
                    for (i, row) in chunk.chunks_exact_mut(row_len).enumerate() {
                        if options.is_cancelled() {
                            return;
                        }
                        let y = band * rows_per_band + i;

                        self.transform_row(row, y, components, geometry);

                        if sender.send(y).is_err() {
                            return;
                        }
                    }
                });
            }
            // workers hold the remaining senders, the loop ends once they all finish
            drop(sender);

            for _ in receiver {
                completed += 1;
                host.progress_update(completed as f64 / height as f64);
            }
        });

        if completed != height {
            debug!(
                "Run of `{}` cancelled after {} of {} rows",
                self.name, completed, height
            );
            return Err(RunFailure::new(ImageErrors::Cancelled));
        }
        Ok(())
    }

    #[cfg(feature = "threads")]
    fn transform_row(&self, row: &mut [u8], y: usize, components: usize, geometry: &Geometry) {
        for (x, samples) in row.chunks_exact_mut(components).enumerate() {
            let ctx = geometry.context(x, y, self.distance_mode);
            let pixel = self.transform(Pixel::from_samples(samples), &ctx);

            pixel.write_samples(samples);
        }
    }
}

impl Debug for Pipeline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("distance_mode", &self.distance_mode)
            .field(
                "stages",
                &self.stages.iter().map(|x| x.name()).collect::<Vec<_>>()
            )
            .finish()
    }
}
