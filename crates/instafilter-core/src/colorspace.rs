/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Layer colorspace information.

/// Colorspaces a filter layer can be stored in
///
/// Filters only understand interleaved red, green and blue samples,
/// optionally followed by an alpha sample.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColorSpace {
    /// Red, Green, Blue
    RGB,
    /// Red, Green, Blue, Alpha
    RGBA
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::RGBA => 4
        }
    }

    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::RGBA)
    }

    /// Return the colorspace that stores `components` channels per pixel
    ///
    /// Returns `None` for anything other than 3 or 4 components
    pub const fn from_components(components: usize) -> Option<ColorSpace> {
        match components {
            3 => Some(Self::RGB),
            4 => Some(Self::RGBA),
            _ => None
        }
    }

    /// Stable lowercase name, as used in command line options
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RGB => "rgb",
            Self::RGBA => "rgba"
        }
    }
}
