/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sepia toning of a gray image
//!
//! Each channel is scaled by the matching component of a tint color,
//! with an extra constant pushed into red:
//!
//! ```text
//! r' = red_shift + (tint.r / 255) * r
//! g' =             (tint.g / 255) * g
//! b' =             (tint.b / 255) * b
//! ```
//! The input is expected to be achromatic (see [`Desaturate`](crate::desaturate::Desaturate)),
//! so every channel holds the same gray value.
use instafilter_image::geometry::PixelContext;
use instafilter_image::pixel::Rgb;
use instafilter_image::traits::PixelStage;

/// Tint a gray image towards `color`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SepiaTint {
    color:     [u8; 3],
    red_shift: f64
}

impl SepiaTint {
    #[must_use]
    pub fn new(color: [u8; 3], red_shift: f64) -> SepiaTint {
        SepiaTint { color, red_shift }
    }
}

impl PixelStage for SepiaTint {
    fn name(&self) -> &'static str {
        "sepia tint"
    }

    fn apply(&self, rgb: Rgb, _: &PixelContext) -> Rgb {
        let [r, g, b] = self.color.map(|x| f64::from(x) / 255.0);

        Rgb {
            r: self.red_shift + (r * rgb.r),
            g: g * rgb.g,
            b: b * rgb.b
        }
    }
}
