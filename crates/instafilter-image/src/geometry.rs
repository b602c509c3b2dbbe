/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Distance field geometry
//!
//! Vignette style stages weigh their effect by how far a pixel lies from the
//! layer center, normalized by the layer diagonal.
//!
//! ```text
//! center       = (width / 2, height / 2)
//! distance     = sqrt((x - center_x)^2 + (y - center_y)^2)
//! max_distance = sqrt(width^2 + height^2)
//! ```
//! A layer with no pixels has a `max_distance` of zero, every distance
//! weighted term then contributes nothing instead of dividing by zero.

/// How the per-pixel distance is measured
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DistanceMode {
    /// Euclidean distance from the layer center
    #[default]
    Centered,
    /// Vertical offset measured from the column index instead of the row,
    /// `dy = |x - height / 2|`.
    ///
    /// Kept for the Sixities preset, whose published output was produced
    /// this way. The resulting vignette is not symmetric and distances can
    /// exceed `max_distance` on wide layers.
    ColumnMirrored
}

/// Per layer constants, computed once per run
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    width:        usize,
    height:       usize,
    center_x:     f64,
    center_y:     f64,
    max_distance: f64
}

#[allow(clippy::cast_precision_loss)]
impl Geometry {
    pub fn new(width: usize, height: usize) -> Geometry {
        let w = width as f64;
        let h = height as f64;

        Geometry {
            width,
            height,
            center_x: w / 2.0,
            center_y: h / 2.0,
            max_distance: (w.powf(2.0) + h.powf(2.0)).sqrt()
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn center(&self) -> (f64, f64) {
        (self.center_x, self.center_y)
    }

    /// Length of the layer diagonal
    pub const fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// True when the layer has no pixels
    pub fn is_degenerate(&self) -> bool {
        self.max_distance == 0.0
    }

    /// Build the context handed to stages for pixel `(x, y)`
    pub fn context(&self, x: usize, y: usize, mode: DistanceMode) -> PixelContext {
        let fx = x as f64;

        let dx = (fx - self.center_x).abs();
        let dy = match mode {
            DistanceMode::Centered => (y as f64 - self.center_y).abs(),
            DistanceMode::ColumnMirrored => (fx - self.center_y).abs()
        };

        PixelContext {
            x,
            y,
            distance: (dx.powf(2.0) + dy.powf(2.0)).sqrt(),
            max_distance: self.max_distance
        }
    }
}

/// Geometric context of the pixel a stage is transforming
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PixelContext {
    pub x:            usize,
    pub y:            usize,
    /// Distance from the layer center
    pub distance:     f64,
    /// Diagonal of the layer the pixel belongs to
    pub max_distance: f64
}

impl PixelContext {
    /// `distance / max_distance`, zero for a degenerate layer
    pub fn normalized_distance(&self) -> f64 {
        if self.max_distance == 0.0 {
            return 0.0;
        }
        self.distance / self.max_distance
    }

    /// `(amount / max_distance) * distance`
    ///
    /// Grows from zero at the center towards `amount` at the corners.
    /// Zero for a degenerate layer.
    pub fn outward(&self, amount: f64) -> f64 {
        if self.max_distance == 0.0 {
            return 0.0;
        }
        (amount / self.max_distance) * self.distance
    }

    /// `(amount / max_distance) * (max_distance - distance)`
    ///
    /// Largest at the center, shrinking towards the corners.
    /// Zero for a degenerate layer.
    pub fn inward(&self, amount: f64) -> f64 {
        if self.max_distance == 0.0 {
            return 0.0;
        }
        (amount / self.max_distance) * (self.max_distance - self.distance)
    }
}

/// A rectangular part of a layer, as reported to the host for redraw
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Region {
    pub x:      usize,
    pub y:      usize,
    pub width:  usize,
    pub height: usize
}

impl Region {
    /// The whole of a `width` x `height` layer
    pub const fn full(width: usize, height: usize) -> Region {
        Region {
            x: 0,
            y: 0,
            width,
            height
        }
    }
}
