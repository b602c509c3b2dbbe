/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An in-memory layer
//!
//! The layer stores 8 bit interleaved samples, row by row,
//! in either RGB or RGBA order.
use instafilter_core::colorspace::ColorSpace;
use instafilter_core::log::trace;

use crate::errors::ImageErrors;
use crate::geometry::Region;
use crate::pixel::Pixel;
use crate::traits::HostLayer;

/// A single layer held in memory
#[derive(Clone, Debug)]
pub struct Image {
    name:        String,
    pixels:      Vec<u8>,
    width:       usize,
    height:      usize,
    colorspace:  ColorSpace,
    last_update: Option<Region>
}

impl Image {
    /// Create an image from interleaved samples
    ///
    /// # Errors
    /// If `pixels` doesn't hold exactly `width * height * components` samples
    pub fn from_raw(
        pixels: Vec<u8>, width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(colorspace.num_components()))
            .ok_or(ImageErrors::GenericStr("Image dimensions overflow"))?;

        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }

        Ok(Image {
            name: String::from("Background"),
            pixels,
            width,
            height,
            colorspace,
            last_update: None
        })
    }

    /// Create an image with every pixel set to `pixel`
    ///
    /// For RGBA images a pixel without alpha is stored as fully opaque
    pub fn fill(pixel: Pixel, colorspace: ColorSpace, width: usize, height: usize) -> Image {
        Image::from_fn(width, height, colorspace, |_, _| pixel)
    }

    /// Create an image by calling `function` for every `(x, y)` coordinate
    ///
    /// # Example
    /// ```
    /// use instafilter_core::colorspace::ColorSpace;
    /// use instafilter_image::image::Image;
    /// use instafilter_image::pixel::Pixel;
    ///
    /// // a horizontal gray ramp
    /// let image = Image::from_fn(256, 1, ColorSpace::RGB, |x, _| {
    ///     Pixel::rgb(x as u8, x as u8, x as u8)
    /// });
    /// assert_eq!(image.pixel(10, 0), Some(Pixel::rgb(10, 10, 10)));
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, colorspace: ColorSpace, mut function: F) -> Image
    where
        F: FnMut(usize, usize) -> Pixel
    {
        let components = colorspace.num_components();
        let mut pixels = vec![0_u8; width * height * components];

        if width != 0 {
            for (y, row) in pixels.chunks_exact_mut(width * components).enumerate() {
                for (x, samples) in row.chunks_exact_mut(components).enumerate() {
                    let mut pixel = function(x, y);

                    if colorspace.has_alpha() {
                        pixel.a = Some(pixel.a.unwrap_or(u8::MAX));
                    }
                    pixel.write_samples(samples);
                }
            }
        }

        Image {
            name: String::from("Background"),
            pixels,
            width,
            height,
            colorspace,
            last_update: None
        }
    }

    /// Set the layer name reported to the host
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Image {
        self.name = name.into();
        self
    }

    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Return pixel `(x, y)` or `None` when it lies outside the image
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let components = self.colorspace.num_components();
        let start = (y * self.width + x) * components;

        Some(Pixel::from_samples(&self.pixels[start..start + components]))
    }

    /// Iterate over all pixels in row major order
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.pixels
            .chunks_exact(self.colorspace.num_components())
            .map(Pixel::from_samples)
    }

    /// The raw interleaved samples
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image, returning the raw interleaved samples
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// The last region the engine reported as updated
    pub const fn last_update(&self) -> Option<Region> {
        self.last_update
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<usize, ImageErrors> {
        if x >= self.width || y >= self.height {
            return Err(ImageErrors::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height
            });
        }
        Ok((y * self.width + x) * self.colorspace.num_components())
    }
}

impl HostLayer for Image {
    fn name(&self) -> &str {
        &self.name
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, ImageErrors> {
        let start = self.check_bounds(x, y)?;
        let components = self.colorspace.num_components();

        Ok(Pixel::from_samples(&self.pixels[start..start + components]))
    }

    fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), ImageErrors> {
        let start = self.check_bounds(x, y)?;
        let components = self.colorspace.num_components();

        pixel.write_samples(&mut self.pixels[start..start + components]);
        Ok(())
    }

    fn notify_updated(&mut self, region: Region) {
        trace!("Layer `{}` updated in {:?}", self.name, region);
        self.last_update = Some(region);
    }

    fn interleaved_mut(&mut self) -> Option<&mut [u8]> {
        Some(&mut self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use instafilter_core::colorspace::ColorSpace;

    use crate::errors::ImageErrors;
    use crate::image::Image;
    use crate::pixel::Pixel;
    use crate::traits::HostLayer;

    #[test]
    fn fill_rgba_is_opaque() {
        let image = Image::fill(Pixel::rgb(1, 2, 3), ColorSpace::RGBA, 3, 2);

        assert_eq!(image.as_bytes().len(), 3 * 2 * 4);
        assert!(image.pixels().all(|x| x == Pixel::rgba(1, 2, 3, 255)));
    }

    #[test]
    fn from_raw_checks_length() {
        let err = Image::from_raw(vec![0; 11], 2, 2, ColorSpace::RGB).unwrap_err();
        assert!(matches!(err, ImageErrors::DimensionsMisMatch(12, 11)));
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut image = Image::fill(Pixel::rgb(0, 0, 0), ColorSpace::RGB, 2, 2);

        image.set_pixel(1, 1, Pixel::rgb(9, 8, 7)).unwrap();
        assert_eq!(image.get_pixel(1, 1).unwrap(), Pixel::rgb(9, 8, 7));
        assert_eq!(image.pixel(1, 1), Some(Pixel::rgb(9, 8, 7)));

        assert!(matches!(
            image.get_pixel(2, 0),
            Err(ImageErrors::OutOfBounds { x: 2, y: 0, .. })
        ));
        assert!(image.set_pixel(0, 5, Pixel::rgb(1, 1, 1)).is_err());
        assert_eq!(image.pixel(0, 2), None);
    }

    #[test]
    fn row_major_layout() {
        let image = Image::from_fn(3, 2, ColorSpace::RGB, |x, y| {
            Pixel::rgb(x as u8, y as u8, 0)
        });

        assert_eq!(&image.as_bytes()[..6], &[0, 0, 0, 1, 0, 0]);
        assert_eq!(&image.as_bytes()[9..12], &[0, 1, 0]);
    }
}
