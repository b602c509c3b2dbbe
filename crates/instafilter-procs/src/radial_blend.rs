/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Radial vignette
//!
//! Brightens towards the layer center and darkens towards the corners.
//!
//! ```text
//! channel' = channel
//!          + (white / max_distance) * (max_distance - distance)
//!          - (black / max_distance) * distance
//! ```
//! With `white` zero this is a plain dark vignette, with `black` zero a
//! glow. Both terms vanish on a layer without pixels.
use instafilter_image::geometry::PixelContext;
use instafilter_image::pixel::Rgb;
use instafilter_image::traits::PixelStage;

/// Blend every channel towards white at the center and black at the rim
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadialBlend {
    toward_white: f64,
    toward_black: f64
}

impl RadialBlend {
    /// Create a new radial blend
    ///
    /// # Arguments
    /// - toward_white: Amount added at the very center, fading to zero at the corners
    /// - toward_black: Amount subtracted at the corners, fading to zero at the center
    #[must_use]
    pub fn new(toward_white: f64, toward_black: f64) -> RadialBlend {
        RadialBlend {
            toward_white,
            toward_black
        }
    }
}

impl PixelStage for RadialBlend {
    fn name(&self) -> &'static str {
        "radial blend"
    }

    fn apply(&self, rgb: Rgb, ctx: &PixelContext) -> Rgb {
        let white = ctx.inward(self.toward_white);
        let black = ctx.outward(self.toward_black);

        rgb.map(|x| x + white).map(|x| x - black)
    }
}
