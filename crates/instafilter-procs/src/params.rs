/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Parameter descriptors
//!
//! Every preset publishes a static table of [`ParamSpec`]s describing the
//! knobs a host dialog should show. The same table is used to validate
//! user supplied values before a pipeline is built.
use instafilter_image::errors::ImageErrors;
use serde::Serialize;

/// The kind of input a parameter expects, with its default value
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParamKind {
    /// Any finite number
    Float { default: f64 },
    /// A whole number in `min..=max`
    Slider { default: f64, min: f64, max: f64 },
    /// An RGB color
    Color { default: [u8; 3] }
}

/// A single tunable preset parameter
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ParamSpec {
    /// Key used in configuration files and on the command line
    pub name:  &'static str,
    /// Human readable label
    pub label: &'static str,
    pub kind:  ParamKind
}

impl ParamSpec {
    pub const fn float(name: &'static str, label: &'static str, default: f64) -> ParamSpec {
        ParamSpec {
            name,
            label,
            kind: ParamKind::Float { default }
        }
    }

    pub const fn slider(
        name: &'static str, label: &'static str, default: f64, min: f64, max: f64
    ) -> ParamSpec {
        ParamSpec {
            name,
            label,
            kind: ParamKind::Slider { default, min, max }
        }
    }

    pub const fn color(name: &'static str, label: &'static str, default: [u8; 3]) -> ParamSpec {
        ParamSpec {
            name,
            label,
            kind: ParamKind::Color { default }
        }
    }

    /// Check a numeric value against this parameter
    ///
    /// # Errors
    /// - The value is NaN or infinite
    /// - The parameter is a slider and the value is fractional or out of range
    /// - The parameter is a color
    pub fn check_number(&self, preset: &'static str, value: f64) -> Result<(), ImageErrors> {
        let invalid = |reason: String| ImageErrors::InvalidParameter {
            preset,
            parameter: self.name,
            reason
        };

        if !value.is_finite() {
            return Err(invalid(format!("{value} is not a finite number")));
        }
        match self.kind {
            ParamKind::Float { .. } => Ok(()),
            ParamKind::Slider { min, max, .. } => {
                if value.fract() != 0.0 {
                    return Err(invalid(format!("{value} is not a whole number")));
                }
                if value < min || value > max {
                    return Err(invalid(format!(
                        "{value} is outside the allowed range {min}..={max}"
                    )));
                }
                Ok(())
            }
            ParamKind::Color { .. } => Err(invalid("expected a color, found a number".to_string()))
        }
    }
}

/// Find the parameter called `name` in `specs`
///
/// # Errors
/// `UnknownParameter` when the table has no such entry
pub fn find_param(
    preset: &'static str, specs: &'static [ParamSpec], name: &str
) -> Result<&'static ParamSpec, ImageErrors> {
    specs
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| ImageErrors::UnknownParameter(preset, name.to_string()))
}

/// Validate `value` against the parameter called `name` in `specs`
pub(crate) fn check_named(
    preset: &'static str, specs: &'static [ParamSpec], name: &str, value: f64
) -> Result<(), ImageErrors> {
    find_param(preset, specs, name)?.check_number(preset, value)
}
