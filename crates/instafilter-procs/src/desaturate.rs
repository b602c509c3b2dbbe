/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Collapse a color to gray

use instafilter_image::geometry::PixelContext;
use instafilter_image::pixel::Rgb;
use instafilter_image::traits::PixelStage;

/// Replace every channel with the plain mean `(r + g + b) / 3`
///
/// This is not a perceptual grayscale, all channels weigh the same.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Desaturate;

impl Desaturate {
    #[must_use]
    pub fn new() -> Desaturate {
        Desaturate
    }
}

impl PixelStage for Desaturate {
    fn name(&self) -> &'static str {
        "desaturate"
    }

    fn apply(&self, rgb: Rgb, _: &PixelContext) -> Rgb {
        Rgb::splat(rgb.average())
    }
}

#[cfg(test)]
mod tests {
    use instafilter_image::geometry::{DistanceMode, Geometry};
    use instafilter_image::pixel::Rgb;
    use instafilter_image::traits::PixelStage;

    use crate::desaturate::Desaturate;

    #[test]
    fn out_of_range_values_are_averaged_as_is() {
        let ctx = Geometry::new(2, 2).context(0, 0, DistanceMode::Centered);
        let out = Desaturate::new().apply(Rgb::new(403.625, -100.0, -100.0), &ctx);

        assert_eq!(out, Rgb::splat(67.875));
    }
}
