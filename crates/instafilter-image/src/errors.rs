/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during filter runs
use std::fmt::{Debug, Display, Formatter};

/// All possible image errors that can occur.
///
/// This covers host buffer access, parameter validation
/// and run control failures.
pub enum ImageErrors {
    /// The layer stores a channel count filters can't handle
    UnsupportedChannels(usize),
    /// Buffer length does not match the declared dimensions
    ///
    /// Expected, found
    DimensionsMisMatch(usize, usize),
    /// A pixel was requested outside the layer
    OutOfBounds {
        x:      usize,
        y:      usize,
        width:  usize,
        height: usize
    },
    /// The host refused a read or a write
    HostAccess(String),
    /// A preset parameter failed validation
    InvalidParameter {
        preset:    &'static str,
        parameter: &'static str,
        reason:    String
    },
    /// A preset was configured with a parameter it doesn't declare
    UnknownParameter(&'static str, String),
    /// No preset carries the requested name
    UnknownPreset(String),
    /// The run was stopped through its cancellation token
    Cancelled,
    IoError(std::io::Error),
    GenericString(String),
    GenericStr(&'static str)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedChannels(found) => {
                write!(
                    f,
                    "Unsupported channel count {found}, filters expect 3 (RGB) or 4 (RGBA) channels"
                )
            }
            Self::DimensionsMisMatch(expected, found) => {
                write!(
                    f,
                    "Dimensions mismatch, expected {expected} but found {found}"
                )
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height
            } => {
                write!(
                    f,
                    "Pixel ({x}, {y}) lies outside the {width}x{height} layer"
                )
            }
            Self::HostAccess(reason) => write!(f, "Host buffer access failed: {reason}"),
            Self::InvalidParameter {
                preset,
                parameter,
                reason
            } => {
                write!(f, "Invalid value for `{parameter}` of {preset}: {reason}")
            }
            Self::UnknownParameter(preset, parameter) => {
                write!(f, "{preset} has no parameter named `{parameter}`")
            }
            Self::UnknownPreset(name) => write!(f, "No filter preset named {name:?}"),
            Self::Cancelled => write!(f, "Operation cancelled"),
            Self::IoError(err) => write!(f, "{err}"),
            Self::GenericString(err) => write!(f, "{err}"),
            Self::GenericStr(err) => write!(f, "{err}")
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl From<std::io::Error> for ImageErrors {
    fn from(err: std::io::Error) -> Self {
        ImageErrors::IoError(err)
    }
}

impl From<String> for ImageErrors {
    fn from(s: String) -> ImageErrors {
        ImageErrors::GenericString(s)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(s: &'static str) -> ImageErrors {
        ImageErrors::GenericStr(s)
    }
}

/// A failed filter run
///
/// Carries the pixel being processed when the run stopped, if any,
/// and the underlying cause.
pub struct RunFailure {
    pub coordinate: Option<(usize, usize)>,
    pub cause:      ImageErrors
}

impl RunFailure {
    /// A failure not tied to any pixel, e.g. an unsupported layer
    pub fn new(cause: ImageErrors) -> RunFailure {
        RunFailure {
            coordinate: None,
            cause
        }
    }
    /// A failure raised while processing pixel `(x, y)`
    pub fn at(x: usize, y: usize, cause: ImageErrors) -> RunFailure {
        RunFailure {
            coordinate: Some((x, y)),
            cause
        }
    }
}

impl Debug for RunFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.coordinate {
            Some((x, y)) => write!(f, "Unexpected error at pixel ({x}, {y}) : {:?}", self.cause),
            None => write!(f, "Unexpected error : {:?}", self.cause)
        }
    }
}

impl Display for RunFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for RunFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

impl From<ImageErrors> for RunFailure {
    fn from(cause: ImageErrors) -> Self {
        RunFailure::new(cause)
    }
}
