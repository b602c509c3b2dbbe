/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Cubic tone curve injection
//!
//! Evaluates a cubic centered on mid gray at the mean of the current color,
//! and adds the result to a single channel.
//!
//! ```text
//! v        = (r + g + b) / 3
//! f(v)     = a(v - 128)^3 + b(v - 128)^2 + c(v - 128) + d
//! target' += f(v) * gain * scale
//! ```
//! With only the square term set the curve is an even parabola, shadows and
//! highlights both receive the channel while mid tones are left alone.
use instafilter_image::geometry::PixelContext;
use instafilter_image::pixel::{Channel, Rgb};
use instafilter_image::traits::PixelStage;

/// Evaluate `a(v - 128)^3 + b(v - 128)^2 + c(v - 128) + d`
pub fn cubic(coefficients: [f64; 4], value: f64) -> f64 {
    let [a, b, c, d] = coefficients;
    let v = value - 128.0;

    a * v.powf(3.0) + b * v.powf(2.0) + c * v + d
}

/// Push one channel along a tone curve of the pixel's mean
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicToneInject {
    target:       Channel,
    coefficients: [f64; 4],
    gain:         f64,
    scale:        f64
}

impl CubicToneInject {
    /// Create a new tone curve injection
    ///
    /// # Arguments
    /// - target: Channel receiving the curve value
    /// - coefficients: `[a, b, c, d]`, see module docs
    /// - gain: Intensity the curve value is multiplied with
    #[must_use]
    pub fn new(target: Channel, coefficients: [f64; 4], gain: f64) -> CubicToneInject {
        CubicToneInject {
            target,
            coefficients,
            gain,
            scale: 1.0
        }
    }

    /// Apply an extra factor after the gain
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> CubicToneInject {
        self.scale = scale;
        self
    }
}

impl PixelStage for CubicToneInject {
    fn name(&self) -> &'static str {
        "cubic tone inject"
    }

    fn apply(&self, mut rgb: Rgb, _: &PixelContext) -> Rgb {
        let curve = cubic(self.coefficients, rgb.average()) * self.gain;

        *rgb.get_mut(self.target) += curve * self.scale;
        rgb
    }
}
