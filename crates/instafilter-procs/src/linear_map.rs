/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Linear tone mapping
//!
//! ```text
//! channel' = gain * channel + offset
//! ```
//! applied identically to red, green and blue.
//! A gain above one with a negative offset stretches contrast around the
//! point `-offset / (gain - 1)`.
use instafilter_image::geometry::PixelContext;
use instafilter_image::pixel::Rgb;
use instafilter_image::traits::PixelStage;

/// Scale and shift every color channel
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearMap {
    gain:   f64,
    offset: f64
}

impl LinearMap {
    #[must_use]
    pub fn new(gain: f64, offset: f64) -> LinearMap {
        LinearMap { gain, offset }
    }

    pub const fn gain(&self) -> f64 {
        self.gain
    }

    pub const fn offset(&self) -> f64 {
        self.offset
    }
}

impl PixelStage for LinearMap {
    fn name(&self) -> &'static str {
        "linear map"
    }

    fn apply(&self, rgb: Rgb, _: &PixelContext) -> Rgb {
        rgb.map(|x| self.gain * x + self.offset)
    }
}
