/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel representations
//!
//! A [`Pixel`] is what the host stores, 8 bits per channel with an optional
//! alpha sample. An [`Rgb`] is the floating point working value that stages
//! pass along; it can leave the `0..=255` range freely and is only clamped
//! when it is written back.

/// One of the color channels of a pixel
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Channel {
    Red,
    Green,
    Blue
}

impl Channel {
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2
        }
    }
}

/// A pixel as stored by the host
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha, present for RGBA layers
    pub a: Option<u8>
}

impl Pixel {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Pixel {
        Pixel { r, g, b, a: None }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Pixel {
        Pixel {
            r,
            g,
            b,
            a: Some(a)
        }
    }

    /// Read a pixel from interleaved samples
    ///
    /// `samples` must hold 3 or 4 values, the fourth one is alpha.
    /// Callers slice by the layer's component count, shorter slices panic.
    pub(crate) fn from_samples(samples: &[u8]) -> Pixel {
        Pixel {
            r: samples[0],
            g: samples[1],
            b: samples[2],
            a: samples.get(3).copied()
        }
    }

    /// Write this pixel into interleaved samples
    ///
    /// The alpha sample is only touched when both sides carry one
    pub(crate) fn write_samples(&self, samples: &mut [u8]) {
        samples[0] = self.r;
        samples[1] = self.g;
        samples[2] = self.b;

        if let (Some(a), Some(out)) = (self.a, samples.get_mut(3)) {
            *out = a;
        }
    }
}

/// Working color of a pixel while it moves through a pipeline
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Rgb {
        Rgb { r, g, b }
    }
    /// Color with every channel set to `value`
    pub const fn splat(value: f64) -> Rgb {
        Rgb {
            r: value,
            g: value,
            b: value
        }
    }

    /// Plain mean of the three channels, `(r + g + b) / 3`
    pub fn average(&self) -> f64 {
        (self.r + self.g + self.b) / 3.0
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b
        }
    }

    pub fn get_mut(&mut self, channel: Channel) -> &mut f64 {
        match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b
        }
    }

    /// Apply `function` to each channel
    #[must_use]
    pub fn map<F: Fn(f64) -> f64>(self, function: F) -> Rgb {
        Rgb {
            r: function(self.r),
            g: function(self.g),
            b: function(self.b)
        }
    }

    /// Saturate each channel to `0..=255` and truncate towards zero
    ///
    /// NaN saturates to zero.
    pub fn to_u8_saturating(&self) -> [u8; 3] {
        [
            clamp_channel(self.r),
            clamp_channel(self.g),
            clamp_channel(self.b)
        ]
    }
}

impl From<Pixel> for Rgb {
    fn from(pixel: Pixel) -> Self {
        Rgb {
            r: f64::from(pixel.r),
            g: f64::from(pixel.g),
            b: f64::from(pixel.b)
        }
    }
}

#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn clamp_channel(value: f64) -> u8 {
    if value > 255.0 {
        return 255;
    }
    if value < 0.0 {
        return 0;
    }
    // float to int casts truncate, and NaN becomes 0
    value as u8
}

#[cfg(test)]
mod tests {
    use crate::pixel::{Channel, Pixel, Rgb};

    #[test]
    fn saturates_and_truncates() {
        let rgb = Rgb::new(403.625, -100.0, 141.99);
        assert_eq!(rgb.to_u8_saturating(), [255, 0, 141]);

        let rgb = Rgb::new(f64::NAN, 0.999, 254.9999);
        assert_eq!(rgb.to_u8_saturating(), [0, 0, 254]);
    }

    #[test]
    fn channel_access() {
        let mut rgb = Rgb::new(1.0, 2.0, 3.0);
        *rgb.get_mut(Channel::Green) += 10.0;

        assert_eq!(rgb.get(Channel::Red), 1.0);
        assert_eq!(rgb.get(Channel::Green), 12.0);
        assert_eq!(rgb.get(Channel::Blue), 3.0);
        assert_eq!(Channel::Blue.index(), 2);
    }

    #[test]
    fn samples_keep_alpha() {
        let mut samples = [1, 2, 3, 99];
        let pixel = Pixel::from_samples(&samples);
        assert_eq!(pixel, Pixel::rgba(1, 2, 3, 99));

        Pixel::rgba(7, 8, 9, 99).write_samples(&mut samples);
        assert_eq!(samples, [7, 8, 9, 99]);

        let mut rgb_samples = [0_u8; 3];
        Pixel::rgba(4, 5, 6, 10).write_samples(&mut rgb_samples);
        assert_eq!(rgb_samples, [4, 5, 6]);
    }
}
